//! Browser utilities
//!
//! Opening URLs with the system's default handler. One adapter per
//! platform is chosen at startup so callers never inspect the host OS.

use std::io;
use std::process::{Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};
use thiserror::Error;

/// Errors that can occur when launching a browser
#[derive(Debug, Error)]
pub enum LaunchError {
    /// No launcher is known for this operating system
    #[error("Unsupported platform: {0}")]
    UnsupportedPlatform(String),

    /// The launcher process could not be started
    #[error("Failed to run {program}: {source}")]
    Spawn {
        program: &'static str,
        #[source]
        source: std::io::Error,
    },
}

/// Capability to open a URL with the platform default handler
pub trait BrowserLauncher {
    /// Start opening `url` without waiting for the handler to exit
    fn open(&self, url: &str) -> Result<(), LaunchError>;
}

/// Launcher that shells out to the platform's opener command
///
/// - macOS: `open`
/// - Linux: `xdg-open`
/// - Windows: `rundll32 url.dll,FileProtocolHandler`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemBrowser {
    program: &'static str,
    args: &'static [&'static str],
}

impl SystemBrowser {
    /// Opener for the given `std::env::consts::OS` value
    pub fn for_platform(os: &str) -> Option<Self> {
        let (program, args): (&'static str, &'static [&'static str]) = match os {
            "linux" => ("xdg-open", &[]),
            "macos" => ("open", &[]),
            "windows" => ("rundll32", &["url.dll,FileProtocolHandler"]),
            _ => return None,
        };
        Some(Self { program, args })
    }

    /// Full command line used to open `url`
    pub fn command_line(&self, url: &str) -> Vec<String> {
        std::iter::once(self.program)
            .chain(self.args.iter().copied())
            .chain(std::iter::once(url))
            .map(str::to_string)
            .collect()
    }
}

impl BrowserLauncher for SystemBrowser {
    fn open(&self, url: &str) -> Result<(), LaunchError> {
        log::debug!("Opening {} with {}", url, self.program);

        let argv = self.command_line(url);

        let mut command = Command::new(&argv[0]);
        command
            .args(&argv[1..])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        spawn_detached(&mut command)
            .map(drop)
            .map_err(|source| LaunchError::Spawn {
                program: self.program,
                source,
            })
    }
}

/// Start `command` without blocking the caller
///
/// The child is reaped on a background thread so it never lingers as a
/// zombie. The handle yields its exit status, or `None` if waiting failed.
fn spawn_detached(command: &mut Command) -> io::Result<JoinHandle<Option<ExitStatus>>> {
    let mut child = command.spawn()?;
    Ok(thread::spawn(move || match child.wait() {
        Ok(status) => {
            log::debug!("Browser launcher exited with {}", status);
            Some(status)
        }
        Err(e) => {
            log::warn!("Failed to wait for browser launcher: {}", e);
            None
        }
    }))
}

/// Launcher for platforms without a known opener
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unsupported {
    os: String,
}

impl BrowserLauncher for Unsupported {
    fn open(&self, _url: &str) -> Result<(), LaunchError> {
        Err(LaunchError::UnsupportedPlatform(self.os.clone()))
    }
}

/// Select the launcher for an operating system
pub fn launcher_for(os: &str) -> Box<dyn BrowserLauncher> {
    match SystemBrowser::for_platform(os) {
        Some(browser) => Box::new(browser),
        None => {
            log::warn!("No browser launcher for platform {}", os);
            Box::new(Unsupported { os: os.to_string() })
        }
    }
}

/// Select the launcher for the running operating system
pub fn default_launcher() -> Box<dyn BrowserLauncher> {
    launcher_for(std::env::consts::OS)
}
