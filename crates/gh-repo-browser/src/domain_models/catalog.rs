//! Repository catalog
//!
//! Holds the fetched repositories in push order together with a
//! name-keyed index. Built once at startup and never mutated afterwards.

use super::Repository;
use std::collections::HashMap;

/// Fetched repositories plus a lookup index by name
///
/// The sequence keeps every repository in the order GitHub returned it
/// (most recently pushed first). The index maps each distinct name to
/// its last occurrence in the sequence, so a duplicate name resolves to
/// the later entry.
#[derive(Debug, Clone, Default)]
pub struct RepoCatalog {
    repositories: Vec<Repository>,
    index: HashMap<String, usize>,
}

impl RepoCatalog {
    /// Build the catalog from a fetched sequence
    pub fn new(repositories: Vec<Repository>) -> Self {
        let mut index = HashMap::with_capacity(repositories.len());
        for (position, repo) in repositories.iter().enumerate() {
            // Later entries overwrite earlier ones
            index.insert(repo.name.clone(), position);
        }

        Self {
            repositories,
            index,
        }
    }

    /// Look up a repository by exact name
    pub fn get(&self, name: &str) -> Option<&Repository> {
        self.index.get(name).map(|&i| &self.repositories[i])
    }

    /// Whether a repository with this exact name exists
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// All repositories in fetch order
    pub fn repositories(&self) -> &[Repository] {
        &self.repositories
    }

    /// Number of repositories in the sequence (duplicates included)
    pub fn len(&self) -> usize {
        self.repositories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repositories.is_empty()
    }

    /// Number of distinct names in the index
    pub fn distinct_names(&self) -> usize {
        self.index.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(name: &str, description: &str) -> Repository {
        let mut repo = Repository::new(name, format!("https://github.com/me/{}", name));
        repo.description = Some(description.to_string());
        repo
    }

    #[test]
    fn test_catalog_preserves_order() {
        let catalog = RepoCatalog::new(vec![repo("b", ""), repo("a", ""), repo("c", "")]);
        let names: Vec<_> = catalog
            .repositories()
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, vec!["b", "a", "c"]);
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.distinct_names(), 3);
    }

    #[test]
    fn test_duplicate_name_last_wins() {
        let catalog = RepoCatalog::new(vec![repo("dup", "first"), repo("other", ""), repo("dup", "second")]);

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.distinct_names(), 2);
        assert_eq!(
            catalog.get("dup").and_then(|r| r.description.as_deref()),
            Some("second")
        );
    }

    #[test]
    fn test_lookup_is_exact() {
        let catalog = RepoCatalog::new(vec![repo("alpha", "")]);
        assert!(catalog.contains("alpha"));
        assert!(!catalog.contains("Alpha"));
        assert!(!catalog.contains("alph"));
        assert!(catalog.get("missing").is_none());
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = RepoCatalog::default();
        assert!(catalog.is_empty());
        assert_eq!(catalog.distinct_names(), 0);
    }
}
