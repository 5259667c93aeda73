//! Octocrab-based GitHub API client
//!
//! Direct implementation of the `GitHubClient` trait using the octocrab library.

use crate::client::GitHubClient;
use crate::types::{Repository, RepositoryPage};
use async_trait::async_trait;
use log::debug;
use octocrab::Octocrab;
use serde::Serialize;
use std::sync::Arc;

/// Query parameters for `GET /user/repos`
#[derive(Debug, Serialize)]
struct ListReposParams {
    #[serde(rename = "type")]
    kind: &'static str,
    sort: &'static str,
    per_page: u8,
    page: u32,
}

/// Direct GitHub API client using octocrab
#[derive(Debug, Clone)]
pub struct OctocrabClient {
    octocrab: Arc<Octocrab>,
}

impl OctocrabClient {
    /// Create a new client with the given octocrab instance
    pub fn new(octocrab: Arc<Octocrab>) -> Self {
        Self { octocrab }
    }
}

#[async_trait]
impl GitHubClient for OctocrabClient {
    async fn fetch_repository_page(
        &self,
        page: u32,
        per_page: u8,
    ) -> anyhow::Result<RepositoryPage> {
        debug!("Fetching repository page {} (per_page={})", page, per_page);

        let params = ListReposParams {
            kind: "owner",
            sort: "pushed",
            per_page,
            page,
        };

        // Raw GET keeps the Link-header pagination that `Page` parses for us
        let response: octocrab::Page<octocrab::models::Repository> =
            self.octocrab.get("/user/repos", Some(&params)).await?;

        let next_page = response.next.is_some().then_some(page + 1);
        let repositories = response
            .items
            .into_iter()
            .map(convert_repository)
            .collect::<Vec<_>>();

        debug!(
            "Fetched {} repositories on page {} (next: {:?})",
            repositories.len(),
            page,
            next_page
        );

        Ok(RepositoryPage {
            repositories,
            next_page,
        })
    }
}

/// Convert octocrab Repository to our Repository type
fn convert_repository(repo: octocrab::models::Repository) -> Repository {
    Repository {
        name: repo.name,
        description: repo.description,
        language: repo.language.as_ref().and_then(convert_language),
        html_url: repo
            .html_url
            .as_ref()
            .map(|u| u.to_string())
            .unwrap_or_default(),
        open_issues_count: repo.open_issues_count.unwrap_or(0),
        pushed_at: repo.pushed_at,
    }
}

/// GitHub reports the language as a JSON value; only strings are meaningful
fn convert_language(value: &serde_json::Value) -> Option<String> {
    value.as_str().map(str::to_string)
}
