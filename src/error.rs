//! Error types for the Refl command builder and REPL.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building interactive commands
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Invalid location: source file {} does not exist", path.display())]
    InvalidLocation { path: PathBuf },

    #[error("Invalid argument: {value} should be one of {}", allowed.join(", "))]
    InvalidArgument {
        value: String,
        allowed: Vec<&'static str>,
    },

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Missing argument for {command}: expected {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("Unexpected argument for {command}: {value}")]
    UnexpectedArgument { command: &'static str, value: String },
}

impl CommandError {
    /// Build an `InvalidArgument` error for `value` against a fixed option set
    pub fn invalid_argument(value: impl Into<String>, allowed: &[&'static str]) -> Self {
        CommandError::InvalidArgument {
            value: value.into(),
            allowed: allowed.to_vec(),
        }
    }
}

/// Application-level errors for the CLI and REPL
#[derive(Debug, Error)]
pub enum ReflError {
    #[error("{0}")]
    Command(#[from] CommandError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Line editor error: {0}")]
    Editor(String),

    #[error("Failed to run {program}: {reason}")]
    Process { program: String, reason: String },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<config::ConfigError> for ReflError {
    fn from(err: config::ConfigError) -> Self {
        ReflError::Config(err.to_string())
    }
}

impl From<rustyline::error::ReadlineError> for ReflError {
    fn from(err: rustyline::error::ReadlineError) -> Self {
        ReflError::Editor(err.to_string())
    }
}
