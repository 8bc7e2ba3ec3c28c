//! Interactive REPL
//!
//! The session is assembled from three collaborators, each injected:
//! a [`LineEditor`] for input, a [`ScratchBuffer`] that accumulates Agda
//! source, and a [`ProcessRunner`] that invokes Agda and shell commands.

pub mod completion;
pub mod editor;
pub mod process;
pub mod prompt;
pub mod scratch;
pub mod session;

pub use editor::{LineEditor, RustylineEditor};
pub use process::{Invocation, ProcessRunner, RunStatus, SystemRunner};
pub use scratch::ScratchBuffer;
pub use session::{Input, Repl, ReplControl};
