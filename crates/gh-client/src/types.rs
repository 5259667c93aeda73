//! GitHub API data transfer objects
//!
//! These types represent the data returned from the GitHub API.
//! They are intentionally separate from application domain models
//! to keep this crate pure and reusable.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A repository owned by the authenticated user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    /// Repository name, unique within the account
    pub name: String,

    /// Free-form description (absent when the owner never set one)
    pub description: Option<String>,

    /// Primary language as detected by GitHub
    pub language: Option<String>,

    /// Repository URL for opening in browser
    pub html_url: String,

    /// Number of open issues
    pub open_issues_count: u32,

    /// When the repository last received a push
    pub pushed_at: Option<DateTime<Utc>>,
}

impl Repository {
    /// Create a repository with only the fields the listing requires
    pub fn new(name: impl Into<String>, html_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            language: None,
            html_url: html_url.into(),
            open_issues_count: 0,
            pushed_at: None,
        }
    }
}

/// One page of a repository listing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryPage {
    /// Repositories on this page, most recently pushed first
    pub repositories: Vec<Repository>,

    /// Page number to request next, `None` on the last page
    pub next_page: Option<u32>,
}
