//! Interactive session context
//!
//! Owns the session state, the shared catalog and the browser launcher.
//! Each submitted line is routed through the reducer and its side effect
//! performed before the next line is read.

use crate::domain_models::RepoCatalog;
use crate::reducer::{reduce, Effect};
use crate::state::SessionState;
use crate::utils::browser::BrowserLauncher;
use crate::views::render_table;
use anyhow::Result;
use std::io::Write;
use std::sync::Arc;

pub struct Session {
    state: SessionState,
    catalog: Arc<RepoCatalog>,
    launcher: Box<dyn BrowserLauncher>,
}

impl Session {
    pub fn new(catalog: Arc<RepoCatalog>, launcher: Box<dyn BrowserLauncher>) -> Self {
        Self {
            state: SessionState::default(),
            catalog,
            launcher,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn catalog(&self) -> &Arc<RepoCatalog> {
        &self.catalog
    }

    /// Prompt derived from the current state
    pub fn prompt(&self) -> String {
        self.state.prompt()
    }

    /// Process one submitted line, writing any output to `out`
    ///
    /// Only write failures on `out` are returned as errors; user mistakes
    /// and launch failures are reported on `out` and the session goes on.
    pub fn submit<W: Write + ?Sized>(&mut self, input: &str, out: &mut W) -> Result<()> {
        let transition = reduce(self.state.clone(), input, &self.catalog);

        if transition.state != self.state {
            log::debug!("Session state -> {:?}", transition.state);
        }
        self.state = transition.state;

        match transition.effect {
            None => {}
            Some(Effect::RenderList) => {
                render_table(out, self.catalog.repositories())?;
            }
            Some(Effect::RenderRepository(name)) => {
                if let Some(repo) = self.catalog.get(&name) {
                    render_table(out, std::iter::once(repo))?;
                }
            }
            Some(Effect::OpenInBrowser { name, url }) => {
                if let Err(e) = self.launcher.open(&url) {
                    log::error!("Failed to open {} in browser: {}", name, e);
                    writeln!(out, "Could not open {}: {}", url, e)?;
                }
            }
            Some(Effect::InvalidRepoName(name)) => {
                writeln!(out, "Invalid repo name: {}", name)?;
            }
            Some(Effect::UnrecognizedCommand(input)) => {
                writeln!(out, "Unrecognized command: {}", input)?;
            }
        }

        Ok(())
    }
}
