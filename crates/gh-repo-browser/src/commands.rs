//! Command tokens
//!
//! Literal tokens recognized by the session, with the descriptions shown
//! next to them in completion lists.

pub const LIST: &str = "list";
pub const SEARCH: &str = "search";
pub const INFO: &str = "info";
pub const OPEN: &str = "open";

/// A literal command and its help text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command {
    pub token: &'static str,
    pub description: &'static str,
}

/// Commands available at the root
pub const ROOT_COMMANDS: [Command; 2] = [
    Command {
        token: LIST,
        description: "List all of your GitHub repositories",
    },
    Command {
        token: SEARCH,
        description: "Search for a specific GitHub repository",
    },
];

/// Commands available once a repository is selected
pub const REPO_COMMANDS: [Command; 2] = [
    Command {
        token: INFO,
        description: "Get repository info",
    },
    Command {
        token: OPEN,
        description: "Open repository in default browser",
    },
];
