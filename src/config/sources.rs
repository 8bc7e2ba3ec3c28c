//! Config file sources.

pub mod global_file;
pub mod workspace_file;
