//! Refl: an Agda REPL and interactive-command builder
//!
//! Builds the `IOTCM` lines that drive Agda's interaction mode, models source
//! ranges in the shape Agda expects, and wraps both in a line-edited REPL that
//! accumulates definitions in a scratch module.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod protocol;
pub mod repl;

#[cfg(test)]
mod test_support;
