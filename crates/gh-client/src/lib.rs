//! GitHub API client for listing the authenticated user's repositories
//!
//! This crate provides a trait-based GitHub API client. The application
//! depends only on the `GitHubClient` trait, so tests can substitute a
//! fake that serves canned pages.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │              GitHubClient trait                 │
//! │  - fetch_repository_page()                      │
//! └─────────────────────────────────────────────────┘
//!                        │
//!                        ▼
//!               ┌─────────────────┐
//!               │ OctocrabClient  │
//!               │ (direct API)    │
//!               └─────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use gh_client::{connect, GitHubClient, TokenResolver};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let tokens = TokenResolver::from_env();
//! let client = connect(tokens.token()?, None)?;
//! let page = client.fetch_repository_page(1, 45).await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod client_manager;
pub mod octocrab_client;
pub mod types;

/// Default GitHub host (public GitHub)
pub const DEFAULT_HOST: &str = "github.com";

pub use client::GitHubClient;
pub use client_manager::{api_base_url, connect, host_from_env, TokenResolver};
pub use octocrab_client::OctocrabClient;
pub use types::{Repository, RepositoryPage};
