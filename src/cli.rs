//! CLI domain: parse, route, help, output, and presentation only.
//! No protocol logic; the single route table dispatches to the builder and the REPL.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::command_name;
pub use output::map_error;
pub use parse::{Cli, CliCommand};
pub use presentation::{format_command_list, format_emit_result, EmitResult};
pub use route::RunContext;
