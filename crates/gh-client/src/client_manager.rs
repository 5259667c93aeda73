//! Credential resolution and client construction
//!
//! Resolves the access token from the environment and builds an
//! octocrab-backed client for github.com or a GitHub Enterprise host.

use crate::{OctocrabClient, DEFAULT_HOST};
use anyhow::{Context, Result};
use log::{debug, info};
use octocrab::Octocrab;
use std::sync::Arc;

/// Environment variables consulted for the token, in priority order
pub const TOKEN_ENV_VARS: [&str; 3] = ["GITHUB_ACCESS_TOKEN", "GITHUB_TOKEN", "GH_TOKEN"];

/// Environment variable naming a GitHub Enterprise host
pub const HOST_ENV_VAR: &str = "GITHUB_HOST";

/// Resolves the GitHub access token
///
/// Tries `GITHUB_ACCESS_TOKEN`, then `GITHUB_TOKEN`, then `GH_TOKEN`.
/// Empty values are skipped. The token itself is never validated
/// locally; a bad token surfaces as a failed fetch.
#[derive(Debug, Clone, Default)]
pub struct TokenResolver {
    token: Option<String>,
}

impl TokenResolver {
    /// Resolve from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = TOKEN_ENV_VARS.iter().find_map(|key| {
            let value = lookup(key)?;
            let value = value.trim();
            if value.is_empty() {
                None
            } else {
                debug!("Using token from env var {}", key);
                Some(value.to_string())
            }
        });

        Self { token }
    }

    /// Get the resolved token
    pub fn token(&self) -> Result<&str> {
        self.token.as_deref().ok_or_else(|| {
            anyhow::anyhow!(
                "No GitHub token found. Set {} (or {}) to a personal access token",
                TOKEN_ENV_VARS[0],
                TOKEN_ENV_VARS[1..].join(" / ")
            )
        })
    }
}

/// Resolve the API host from the environment (None = github.com)
pub fn host_from_env() -> Option<String> {
    std::env::var(HOST_ENV_VAR)
        .ok()
        .map(|h| h.trim().to_string())
        .filter(|h| !h.is_empty() && h != DEFAULT_HOST)
}

/// Compute the API base URL for a host
pub fn api_base_url(host: Option<&str>) -> String {
    match host {
        Some(h) if h != DEFAULT_HOST => format!("https://{}/api/v3", h),
        _ => "https://api.github.com".to_string(),
    }
}

/// Build an authenticated client
///
/// # Arguments
///
/// * `token` - Personal access token
/// * `host` - GitHub host (None = github.com)
pub fn connect(token: &str, host: Option<&str>) -> Result<OctocrabClient> {
    let effective_host = host.unwrap_or(DEFAULT_HOST);
    info!("Creating GitHub client for host: {}", effective_host);

    let mut builder = Octocrab::builder().personal_token(token.to_string());

    if let Some(h) = host.filter(|h| *h != DEFAULT_HOST) {
        let uri = api_base_url(Some(h));
        builder = builder.base_uri(&uri).context("Failed to set base URI")?;
    }

    let octocrab = builder.build().context("Failed to build Octocrab client")?;
    Ok(OctocrabClient::new(Arc::new(octocrab)))
}
