//! Agda interaction protocol: command vocabulary, source ranges, and the
//! per-file command builder that produces IOTCM lines.

pub mod builder;
pub mod command;
pub mod range;
pub mod vocabulary;

pub use builder::{Commands, Scope};
pub use command::{Command, CommandKind, InteractionId};
pub use range::{range_builder, Interval, Position, Range, RangeSpec};
pub use vocabulary::{Backend, ComputeMode, RemoveOrKeep, Rewrite, UseForce};
