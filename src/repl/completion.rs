//! Word completion for the REPL prompt.

use crate::protocol::vocabulary;
use crate::protocol::CommandKind;
use std::path::Path;
use tracing::warn;

/// Command names, vocabulary tokens and the names of files in `dir`
pub fn repl_words(dir: &Path) -> Vec<String> {
    let mut words: Vec<String> = CommandKind::ALL
        .iter()
        .map(|kind| kind.name().to_string())
        .chain(vocabulary::all_tokens().map(str::to_string))
        .collect();

    match std::fs::read_dir(dir) {
        Ok(entries) => {
            let mut files: Vec<String> = entries
                .filter_map(|entry| entry.ok())
                .map(|entry| entry.file_name().to_string_lossy().into_owned())
                .collect();
            files.sort();
            words.extend(files);
        }
        Err(e) => warn!(dir = %dir.display(), error = %e, "Cannot list directory for completion"),
    }

    words
}

/// Words starting with `prefix`, ignoring case
pub fn complete<'a>(words: &'a [String], prefix: &str) -> Vec<&'a str> {
    let prefix = prefix.to_lowercase();
    words
        .iter()
        .filter(|word| word.to_lowercase().starts_with(&prefix))
        .map(String::as_str)
        .collect()
}

/// Byte offset where the word under the cursor starts
///
/// A leading `:` is not part of the word, so `:giv` completes to `:give`.
pub fn word_start(line: &str, pos: usize) -> usize {
    let before = &line[..pos];
    let start = before.rfind(' ').map(|i| i + 1).unwrap_or(0);
    if before[start..].starts_with(':') || before[start..].starts_with('!') {
        start + 1
    } else {
        start
    }
}
