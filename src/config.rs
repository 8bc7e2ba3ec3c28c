//! Configuration System
//!
//! Layered configuration for the REPL and logging: built-in defaults, the
//! global config file, the workspace config file and `REFL__*` environment
//! variables, in increasing order of precedence. The loaded value is passed
//! explicitly to each component that needs it.

use crate::logging::{self, LoggingConfig};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

mod facade;
mod merge;
pub mod paths;
mod sources;

pub use facade::ConfigLoader;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReflConfig {
    /// REPL behaviour and external binary
    #[serde(default)]
    pub repl: ReplConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// REPL configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplConfig {
    /// Line-editor history file (default: ~/.refl_history)
    #[serde(default)]
    pub history_file: Option<PathBuf>,

    /// Directory for the scratch `.agda` file (default: system temp dir)
    #[serde(default)]
    pub scratch_dir: Option<PathBuf>,

    /// Working directory for Agda (default: the scratch file's directory)
    #[serde(default)]
    pub working_dir: Option<PathBuf>,

    /// Agda executable
    #[serde(default = "default_agda_binary")]
    pub agda_binary: String,

    /// Arguments placed before the scratch file path
    #[serde(default = "default_agda_args")]
    pub agda_args: Vec<String>,

    /// Colored prompt and messages
    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_agda_binary() -> String {
    "agda".to_string()
}

fn default_agda_args() -> Vec<String> {
    vec!["--compile".to_string()]
}

fn default_true() -> bool {
    true
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            history_file: None,
            scratch_dir: None,
            working_dir: None,
            agda_binary: default_agda_binary(),
            agda_args: default_agda_args(),
            color: default_true(),
        }
    }
}

impl ReplConfig {
    /// History file in effect for this configuration
    pub fn resolved_history_file(&self) -> PathBuf {
        self.history_file
            .clone()
            .unwrap_or_else(paths::default_history_file)
    }

    /// Scratch directory in effect for this configuration
    pub fn resolved_scratch_dir(&self) -> PathBuf {
        self.scratch_dir.clone().unwrap_or_else(std::env::temp_dir)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.agda_binary.trim().is_empty() {
            return Err("Agda binary cannot be empty".to_string());
        }
        Ok(())
    }
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    Repl(String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Repl(msg) => write!(f, "Repl: {}", msg),
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl ReflConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = self.repl.validate() {
            errors.push(ValidationError::Repl(e));
        }
        if let Err(e) = logging::validate_format(&self.logging.format) {
            errors.push(ValidationError::Logging(e.to_string()));
        }
        if let Err(e) = logging::validate_output(&self.logging.output) {
            errors.push(ValidationError::Logging(e.to_string()));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
