//! GitHub client trait
//!
//! This module defines the `GitHubClient` trait that all client
//! implementations must satisfy. The browser only reads from GitHub,
//! so the trait exposes a single listing capability.

use crate::types::RepositoryPage;
use async_trait::async_trait;

/// GitHub API client trait
///
/// Implementations can be direct (hitting the API) or fakes serving
/// canned pages in tests.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow sharing across
/// async tasks and threads.
///
/// # Example
///
/// ```rust,ignore
/// use gh_client::{GitHubClient, RepositoryPage};
///
/// async fn first_page(client: &dyn GitHubClient) -> anyhow::Result<RepositoryPage> {
///     client.fetch_repository_page(1, 45).await
/// }
/// ```
#[async_trait]
pub trait GitHubClient: Send + Sync {
    /// Fetch one page of repositories owned by the authenticated user
    ///
    /// Results are sorted by most recent push, newest first.
    ///
    /// # Arguments
    ///
    /// * `page` - 1-based page number
    /// * `per_page` - Page size
    ///
    /// # Returns
    ///
    /// The page, with `next_page` set when more results follow, or an
    /// error if the request failed (transport or authorization).
    async fn fetch_repository_page(&self, page: u32, per_page: u8)
        -> anyhow::Result<RepositoryPage>;
}
