//! Completion suggestions
//!
//! Candidates for the next token given the session state and the word
//! being typed. Read-only: computing suggestions never changes state.

use crate::commands::{Command, REPO_COMMANDS, ROOT_COMMANDS};
use crate::domain_models::RepoCatalog;
use crate::state::SessionState;
use crate::views::display_text;

/// A completion candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub text: String,
    pub description: String,
}

impl From<&Command> for Suggestion {
    fn from(command: &Command) -> Self {
        Self {
            text: command.token.to_string(),
            description: command.description.to_string(),
        }
    }
}

/// Candidates valid in `state`, filtered to those starting with `prefix`
///
/// Matching is case-sensitive. An empty prefix returns every candidate.
/// Repository names keep fetch order.
pub fn suggest(state: &SessionState, prefix: &str, catalog: &RepoCatalog) -> Vec<Suggestion> {
    let candidates: Vec<Suggestion> = match state {
        SessionState::Root => ROOT_COMMANDS.iter().map(Suggestion::from).collect(),
        SessionState::SearchPending => catalog
            .repositories()
            .iter()
            .map(|repo| Suggestion {
                text: repo.name.clone(),
                description: display_text(repo.description.as_deref(), 0),
            })
            .collect(),
        SessionState::RepoSelected(_) => REPO_COMMANDS.iter().map(Suggestion::from).collect(),
    };

    if prefix.is_empty() {
        return candidates;
    }

    candidates
        .into_iter()
        .filter(|s| s.text.starts_with(prefix))
        .collect()
}

/// The word being completed: text after the last whitespace before `pos`
///
/// Returns the byte offset where the word starts and the word itself.
pub fn word_before_cursor(line: &str, pos: usize) -> (usize, &str) {
    let line_to_cursor = &line[..pos];
    let start = line_to_cursor
        .rfind(char::is_whitespace)
        .map_or(0, |i| i + line_to_cursor[i..].chars().next().map_or(1, char::len_utf8));
    (start, &line_to_cursor[start..])
}
