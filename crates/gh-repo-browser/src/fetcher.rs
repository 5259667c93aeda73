//! Repository fetcher
//!
//! Walks every page of the authenticated user's repositories and builds
//! the catalog the interactive session runs against.

use crate::domain_models::{RepoCatalog, Repository};
use anyhow::Context;
use gh_client::GitHubClient;
use log::{debug, info, warn};
use thiserror::Error;

/// Page size requested from GitHub
pub const PER_PAGE: u8 = 45;

/// A page request failed part-way through the listing
#[derive(Debug, Error)]
#[error("Failed to fetch repository page {page} ({fetched} repositories fetched before it): {cause:#}")]
pub struct FetchError {
    /// Page number that failed
    pub page: u32,
    /// Repositories accumulated before the failure
    pub fetched: usize,
    /// Transport or authorization error reported by the client
    pub cause: anyhow::Error,
}

/// Outcome of a full listing
///
/// The catalog always holds whatever was fetched, even when `error` is
/// set, so callers decide whether partial results are usable.
#[derive(Debug)]
#[must_use = "the fetch error must be checked before relying on the catalog"]
pub struct FetchReport {
    pub catalog: RepoCatalog,
    pub error: Option<FetchError>,
}

impl FetchReport {
    /// Decide whether the session can start on this listing
    ///
    /// A failure with nothing fetched is an error. Partial results are
    /// kept with a warning on stderr.
    pub fn into_catalog(self) -> anyhow::Result<RepoCatalog> {
        let FetchReport { catalog, error } = self;
        match error {
            None => Ok(catalog),
            Some(err) if catalog.is_empty() => {
                Err(err).context("Could not list your GitHub repositories")
            }
            Some(err) => {
                warn!("Continuing with partial repository list: {}", err);
                eprintln!(
                    "Warning: repository list is incomplete ({} fetched): {}",
                    catalog.len(),
                    err
                );
                Ok(catalog)
            }
        }
    }
}

/// Fetch all repositories owned by the authenticated user
///
/// Requests pages sorted by most recent push until GitHub stops sending
/// a next-page marker. The first failing page aborts the loop without
/// retrying; repositories from earlier pages are kept.
pub async fn fetch_repositories<C>(client: &C) -> FetchReport
where
    C: GitHubClient + ?Sized,
{
    let mut repositories: Vec<Repository> = Vec::new();
    let mut page = 1u32;
    let mut error = None;

    loop {
        debug!("Requesting repository page {}", page);

        match client.fetch_repository_page(page, PER_PAGE).await {
            Ok(result) => {
                let next_page = result.next_page;
                repositories.extend(result.repositories);

                match next_page {
                    Some(next) => page = next,
                    None => break,
                }
            }
            Err(cause) => {
                warn!("Repository page {} failed: {:#}", page, cause);
                error = Some(FetchError {
                    page,
                    fetched: repositories.len(),
                    cause,
                });
                break;
            }
        }
    }

    let catalog = RepoCatalog::new(repositories);
    info!(
        "Fetched {} repositories ({} distinct names)",
        catalog.len(),
        catalog.distinct_names()
    );

    FetchReport { catalog, error }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use gh_client::RepositoryPage;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    /// Mock client serving canned pages, failing on unknown page numbers
    #[derive(Debug, Clone)]
    struct MockClient {
        pages: HashMap<u32, RepositoryPage>,
        requested: Arc<Mutex<Vec<(u32, u8)>>>,
    }

    impl MockClient {
        fn new(pages: Vec<(u32, RepositoryPage)>) -> Self {
            Self {
                pages: pages.into_iter().collect(),
                requested: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn requested(&self) -> Vec<(u32, u8)> {
            self.requested.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl GitHubClient for MockClient {
        async fn fetch_repository_page(
            &self,
            page: u32,
            per_page: u8,
        ) -> anyhow::Result<RepositoryPage> {
            self.requested.lock().unwrap().push((page, per_page));
            self.pages
                .get(&page)
                .cloned()
                .ok_or_else(|| anyhow::anyhow!("401 Bad credentials"))
        }
    }

    fn repo(name: &str) -> Repository {
        Repository::new(name, format!("https://github.com/me/{}", name))
    }

    fn page(names: &[&str], next_page: Option<u32>) -> RepositoryPage {
        RepositoryPage {
            repositories: names.iter().map(|n| repo(n)).collect(),
            next_page,
        }
    }

    fn names(catalog: &RepoCatalog) -> Vec<&str> {
        catalog
            .repositories()
            .iter()
            .map(|r| r.name.as_str())
            .collect()
    }

    #[tokio::test]
    async fn test_pagination_concatenates_pages() {
        let mock = MockClient::new(vec![
            (1, page(&["a", "b"], Some(2))),
            (2, page(&["c"], None)),
        ]);

        let report = fetch_repositories(&mock).await;

        assert!(report.error.is_none());
        assert_eq!(names(&report.catalog), vec!["a", "b", "c"]);
        assert_eq!(report.catalog.distinct_names(), 3);
        assert_eq!(mock.requested(), vec![(1, PER_PAGE), (2, PER_PAGE)]);
    }

    #[tokio::test]
    async fn test_single_page_stops_without_marker() {
        let mock = MockClient::new(vec![(1, page(&["only"], None))]);

        let report = fetch_repositories(&mock).await;

        assert!(report.error.is_none());
        assert_eq!(names(&report.catalog), vec!["only"]);
        assert_eq!(mock.requested().len(), 1);
    }

    #[tokio::test]
    async fn test_follows_next_page_marker() {
        // GitHub may skip numbers; the marker decides what comes next
        let mock = MockClient::new(vec![
            (1, page(&["a"], Some(3))),
            (3, page(&["b"], None)),
        ]);

        let report = fetch_repositories(&mock).await;

        assert!(report.error.is_none());
        assert_eq!(mock.requested(), vec![(1, PER_PAGE), (3, PER_PAGE)]);
    }

    #[tokio::test]
    async fn test_duplicate_names_across_pages() {
        let mut later = repo("dup");
        later.open_issues_count = 7;
        let mock = MockClient::new(vec![
            (1, page(&["dup", "x"], Some(2))),
            (
                2,
                RepositoryPage {
                    repositories: vec![later],
                    next_page: None,
                },
            ),
        ]);

        let report = fetch_repositories(&mock).await;

        assert_eq!(report.catalog.len(), 3);
        assert_eq!(report.catalog.distinct_names(), 2);
        assert_eq!(report.catalog.get("dup").unwrap().open_issues_count, 7);
    }

    #[tokio::test]
    async fn test_failure_keeps_partial_results() {
        // Page 2 is missing, so the mock fails it
        let mock = MockClient::new(vec![(1, page(&["a", "b"], Some(2)))]);

        let report = fetch_repositories(&mock).await;

        assert!(report.error.is_some());
        assert_eq!(names(&report.catalog), vec!["a", "b"]);
        let error = report.error.unwrap();
        assert_eq!(error.page, 2);
        assert_eq!(error.fetched, 2);
        assert!(error.to_string().contains("Bad credentials"));
        assert_eq!(mock.requested().len(), 2);
    }

    #[tokio::test]
    async fn test_failure_on_first_page() {
        let mock = MockClient::new(vec![]);

        let report = fetch_repositories(&mock).await;

        assert!(report.catalog.is_empty());
        assert_eq!(report.error.unwrap().fetched, 0);
        // No retries
        assert_eq!(mock.requested(), vec![(1, PER_PAGE)]);
    }

    #[tokio::test]
    async fn test_complete_listing_starts_session() {
        let mock = MockClient::new(vec![(1, page(&["a", "b"], None))]);

        let catalog = fetch_repositories(&mock).await.into_catalog().unwrap();

        assert_eq!(names(&catalog), vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_nothing_fetched_is_fatal() {
        let mock = MockClient::new(vec![]);

        let err = fetch_repositories(&mock).await.into_catalog().unwrap_err();

        assert!(err.to_string().contains("Could not list your GitHub repositories"));
        assert!(format!("{:#}", err).contains("Bad credentials"));
    }

    #[tokio::test]
    async fn test_partial_listing_starts_session() {
        let mock = MockClient::new(vec![(1, page(&["a", "b"], Some(2)))]);

        let catalog = fetch_repositories(&mock).await.into_catalog().unwrap();

        assert_eq!(names(&catalog), vec!["a", "b"]);
        assert!(catalog.contains("a"));
    }

    #[test]
    fn test_empty_but_complete_listing_is_not_an_error() {
        let report = FetchReport {
            catalog: RepoCatalog::default(),
            error: None,
        };

        let catalog = report.into_catalog().unwrap();

        assert!(catalog.is_empty());
    }
}
