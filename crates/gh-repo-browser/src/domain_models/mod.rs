//! Domain models
//!
//! Application-level views over the data fetched from GitHub.

mod catalog;

pub use catalog::RepoCatalog;
pub use gh_client::Repository;
