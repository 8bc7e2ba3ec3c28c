//! CLI parse: clap types for Refl. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Refl - the Agda REPL
#[derive(Parser)]
#[command(name = "refl")]
#[command(version)]
#[command(about = "Interactive-command builder and REPL for the Agda proof assistant")]
pub struct Cli {
    /// Subcommand; starts the REPL when omitted
    #[command(subcommand)]
    pub command: Option<CliCommand>,

    /// Workspace root directory (looked up for refl.toml)
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Debug logging, mirrored to stderr
    #[arg(long)]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long)]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Start an interactive session
    Repl {
        /// Line-editor history file
        #[arg(long)]
        history: Option<PathBuf>,
        /// Directory for a new scratch buffer
        #[arg(long)]
        scratch_dir: Option<PathBuf>,
        /// Reuse an existing scratch file instead of creating one
        #[arg(long, conflicts_with = "scratch_dir")]
        scratch: Option<PathBuf>,
        /// Agda executable
        #[arg(long)]
        agda: Option<String>,
    },
    /// Print the IOTCM line for one interactive command
    Emit {
        /// Target source file
        #[arg(long)]
        file: PathBuf,
        /// Output format
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
        /// Command name followed by its arguments
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },
    /// List supported interactive commands
    List {
        /// Output format
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },
    /// Print the effective configuration as TOML
    Config,
}
