//! Line editing for the REPL.

use crate::error::ReflError;
use crate::repl::completion;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::{Hinter, HistoryHinter};
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};
use std::path::PathBuf;
use tracing::{debug, warn};

/// Source of input lines for a REPL session
pub trait LineEditor {
    /// Read one line; `None` at end of input
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, ReflError>;

    /// Remember a line the user entered
    fn add_history(&mut self, line: &str) -> Result<(), ReflError>;
}

/// Completion and history hints for the rustyline editor
pub struct ReplHelper {
    words: Vec<String>,
    hinter: HistoryHinter,
}

impl ReplHelper {
    pub fn new(words: Vec<String>) -> Self {
        Self {
            words,
            hinter: HistoryHinter {},
        }
    }
}

impl Completer for ReplHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let start = completion::word_start(line, pos);
        let candidates = completion::complete(&self.words, &line[start..pos])
            .into_iter()
            .map(|word| Pair {
                display: word.to_string(),
                replacement: word.to_string(),
            })
            .collect();
        Ok((start, candidates))
    }
}

impl Hinter for ReplHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, ctx: &Context<'_>) -> Option<String> {
        self.hinter.hint(line, pos, ctx)
    }
}

impl Highlighter for ReplHelper {}

impl Validator for ReplHelper {}

impl Helper for ReplHelper {}

/// Terminal line editor with a persistent history file
pub struct RustylineEditor {
    editor: Editor<ReplHelper, DefaultHistory>,
    history_file: PathBuf,
}

impl RustylineEditor {
    /// Open the editor, creating `history_file` when it does not exist yet
    pub fn new(history_file: PathBuf, words: Vec<String>) -> Result<Self, ReflError> {
        let mut editor: Editor<ReplHelper, DefaultHistory> = Editor::new()?;
        editor.set_helper(Some(ReplHelper::new(words)));

        if !history_file.exists() {
            if let Some(parent) = history_file.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::File::create(&history_file)?;
        }
        if let Err(e) = editor.load_history(&history_file) {
            warn!(path = %history_file.display(), error = %e, "Could not load REPL history");
        }
        debug!(path = %history_file.display(), "REPL history loaded");

        Ok(Self {
            editor,
            history_file,
        })
    }
}

impl LineEditor for RustylineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, ReflError> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(Some(line)),
            // Ctrl-C abandons the current line only
            Err(ReadlineError::Interrupted) => Ok(Some(String::new())),
            Err(ReadlineError::Eof) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn add_history(&mut self, line: &str) -> Result<(), ReflError> {
        self.editor.add_history_entry(line)?;
        self.editor.append_history(&self.history_file)?;
        Ok(())
    }
}
