//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::ReflError;

/// Map domain/service errors to a string for CLI output.
pub fn map_error(e: &ReflError) -> String {
    match e {
        ReflError::Process { .. } => format!(
            "{}\nSet repl.agda_binary in refl.toml or pass --agda if Agda is not on PATH.",
            e
        ),
        _ => e.to_string(),
    }
}
