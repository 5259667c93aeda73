//! Session state
//!
//! Navigation depth of the interactive session and the prompt text
//! derived from it.

/// Prompt shown when no live prefix is active
pub const DEFAULT_PROMPT: &str = ">>> ";

/// Where the user currently is in the command hierarchy
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    /// Nothing selected; `list` and `search` are available
    #[default]
    Root,
    /// `search` was entered; the next token must name a repository
    SearchPending,
    /// A repository is focused; `info` and `open` act on it
    RepoSelected(String),
}

impl SessionState {
    /// Live prefix mirroring the navigation depth, `None` at root
    pub fn live_prefix(&self) -> Option<String> {
        match self {
            SessionState::Root => None,
            SessionState::SearchPending => Some("search > ".to_string()),
            SessionState::RepoSelected(name) => Some(format!("repo - {} > ", name)),
        }
    }

    /// Prompt to display: the live prefix when active, otherwise the default
    pub fn prompt(&self) -> String {
        self.live_prefix()
            .unwrap_or_else(|| DEFAULT_PROMPT.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_root() {
        assert_eq!(SessionState::default(), SessionState::Root);
    }

    #[test]
    fn test_live_prefix_per_state() {
        assert_eq!(SessionState::Root.live_prefix(), None);
        assert_eq!(
            SessionState::SearchPending.live_prefix().as_deref(),
            Some("search > ")
        );
        assert_eq!(
            SessionState::RepoSelected("alpha".to_string())
                .live_prefix()
                .as_deref(),
            Some("repo - alpha > ")
        );
    }

    #[test]
    fn test_prompt_falls_back_to_default() {
        assert_eq!(SessionState::Root.prompt(), DEFAULT_PROMPT);
        assert_eq!(SessionState::SearchPending.prompt(), "search > ");
    }
}
