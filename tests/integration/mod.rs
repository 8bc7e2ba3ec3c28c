//! Integration tests for the Refl command builder and REPL

mod cli_emit;
mod range_serialization;
mod repl_session;
mod test_utils;
