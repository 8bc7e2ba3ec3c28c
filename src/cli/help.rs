//! CLI command-name contract for logging.

use crate::cli::parse::CliCommand;

/// Command name string for log records (e.g. "repl", "emit").
pub fn command_name(command: Option<&CliCommand>) -> &'static str {
    match command {
        None | Some(CliCommand::Repl { .. }) => "repl",
        Some(CliCommand::Emit { .. }) => "emit",
        Some(CliCommand::List { .. }) => "list",
        Some(CliCommand::Config) => "config",
    }
}
