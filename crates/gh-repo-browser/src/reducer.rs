use crate::commands::{INFO, LIST, OPEN, SEARCH};
use crate::domain_models::RepoCatalog;
use crate::state::SessionState;

/// Side effect requested by a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Render every repository as a table
    RenderList,
    /// Render a single-row table for the named repository
    RenderRepository(String),
    /// Open the repository URL with the platform default handler
    OpenInBrowser { name: String, url: String },
    /// A search token matched no repository
    InvalidRepoName(String),
    /// Input matched no command valid in the current state
    UnrecognizedCommand(String),
}

/// Result of routing one submitted line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: SessionState,
    pub effect: Option<Effect>,
}

impl Transition {
    fn to(state: SessionState) -> Self {
        Self {
            state,
            effect: None,
        }
    }

    fn with(state: SessionState, effect: Effect) -> Self {
        Self {
            state,
            effect: Some(effect),
        }
    }
}

/// Reducer - pure function from current state + submitted line to the next
/// state and an optional side effect
///
/// Input is matched literally; only a trailing line terminator is dropped.
/// An empty line cancels back to root from every state.
pub fn reduce(state: SessionState, input: &str, catalog: &RepoCatalog) -> Transition {
    let input = input.trim_end_matches(['\n', '\r']);

    if input.is_empty() {
        log::debug!("Cancel to root from {:?}", state);
        return Transition::to(SessionState::Root);
    }

    match state {
        SessionState::Root => match input {
            LIST => Transition::with(SessionState::Root, Effect::RenderList),
            SEARCH => Transition::to(SessionState::SearchPending),
            _ => Transition::with(
                SessionState::Root,
                Effect::UnrecognizedCommand(input.to_string()),
            ),
        },
        SessionState::SearchPending => {
            if catalog.contains(input) {
                Transition::to(SessionState::RepoSelected(input.to_string()))
            } else {
                Transition::with(
                    SessionState::SearchPending,
                    Effect::InvalidRepoName(input.to_string()),
                )
            }
        }
        SessionState::RepoSelected(name) => match input {
            INFO => {
                let effect = Effect::RenderRepository(name.clone());
                Transition::with(SessionState::RepoSelected(name), effect)
            }
            OPEN => match catalog.get(&name) {
                Some(repo) => {
                    let effect = Effect::OpenInBrowser {
                        name: name.clone(),
                        url: repo.html_url.clone(),
                    };
                    Transition::with(SessionState::RepoSelected(name), effect)
                }
                // Selection is only ever made from the catalog
                None => Transition::with(SessionState::Root, Effect::InvalidRepoName(name)),
            },
            _ => Transition::with(
                SessionState::RepoSelected(name),
                Effect::UnrecognizedCommand(input.to_string()),
            ),
        },
    }
}
