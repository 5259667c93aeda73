//! Interactive read-eval loop
//!
//! Line editing, completion and hints come from rustyline. The helper
//! is re-synced with the session state before every read so completion
//! always reflects the current navigation depth.

use crate::domain_models::RepoCatalog;
use crate::session::Session;
use crate::state::SessionState;
use crate::suggestions::{suggest, word_before_cursor, Suggestion};
use anyhow::{Context, Result};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{CompletionType, Config, EditMode, Editor, Helper};
use std::io::{self, Write};
use std::sync::Arc;

/// Completion helper backed by the suggestion engine
struct RepoHelper {
    catalog: Arc<RepoCatalog>,
    state: SessionState,
}

impl RepoHelper {
    fn new(catalog: Arc<RepoCatalog>) -> Self {
        Self {
            catalog,
            state: SessionState::default(),
        }
    }

    fn sync(&mut self, state: &SessionState) {
        if &self.state != state {
            self.state = state.clone();
        }
    }

    fn candidates(&self, line: &str, pos: usize) -> (usize, Vec<Suggestion>) {
        let (start, word) = word_before_cursor(line, pos);
        (start, suggest(&self.state, word, &self.catalog))
    }
}

fn to_pair(suggestion: Suggestion, width: usize) -> Pair {
    let display = if suggestion.description.is_empty() {
        suggestion.text.clone()
    } else {
        format!("{:<width$}  {}", suggestion.text, suggestion.description, width = width)
    };
    Pair {
        display,
        replacement: suggestion.text,
    }
}

impl Completer for RepoHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (start, suggestions) = self.candidates(line, pos);
        let width = suggestions
            .iter()
            .map(|s| s.text.chars().count())
            .max()
            .unwrap_or(0);
        let pairs = suggestions.into_iter().map(|s| to_pair(s, width)).collect();
        Ok((start, pairs))
    }
}

impl Hinter for RepoHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &rustyline::Context<'_>) -> Option<String> {
        if pos < line.len() {
            return None;
        }
        let (_, word) = word_before_cursor(line, pos);
        if word.is_empty() {
            return None;
        }
        let (_, suggestions) = self.candidates(line, pos);
        suggestions
            .first()
            .and_then(|s| s.text.strip_prefix(word))
            .filter(|rest| !rest.is_empty())
            .map(str::to_string)
    }
}

impl Highlighter for RepoHelper {}
impl Validator for RepoHelper {}
impl Helper for RepoHelper {}

/// Run the interactive loop until Ctrl-C or Ctrl-D
pub fn run(mut session: Session) -> Result<()> {
    let config = Config::builder()
        .completion_type(CompletionType::List)
        .edit_mode(EditMode::Emacs)
        .auto_add_history(false)
        .build();

    let mut rl: Editor<RepoHelper, DefaultHistory> =
        Editor::with_config(config).context("Failed to initialize line editor")?;
    rl.set_helper(Some(RepoHelper::new(Arc::clone(session.catalog()))));

    let mut stdout = io::stdout();
    log::info!("Starting interactive session");

    loop {
        if let Some(helper) = rl.helper_mut() {
            helper.sync(session.state());
        }

        match rl.readline(&session.prompt()) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    rl.add_history_entry(line.as_str()).ok();
                }
                session.submit(&line, &mut stdout)?;
                stdout.flush()?;
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e).context("Readline failed"),
        }
    }

    log::info!("Interactive session ended");
    Ok(())
}
