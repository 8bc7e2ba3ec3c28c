//! Process invocation for the REPL.
//!
//! The session only describes what to run as an [`Invocation`]; a
//! [`ProcessRunner`] decides how. [`SystemRunner`] spawns real processes with
//! inherited stdio, so Agda's output goes straight to the terminal.

use crate::error::ReflError;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, info};

/// A one-shot external command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: Option<PathBuf>,
}

impl Invocation {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn current_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.cwd = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Run `command_line` through the platform shell
    pub fn shell(command_line: &str) -> Self {
        if cfg!(windows) {
            Invocation::new("cmd").arg("/C").arg(command_line)
        } else {
            Invocation::new("sh").arg("-c").arg(command_line)
        }
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// How a finished process exited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunStatus {
    /// Exit code; `None` when terminated by a signal
    pub code: Option<i32>,
}

impl RunStatus {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Runs external commands on behalf of the REPL
pub trait ProcessRunner {
    fn run(&mut self, invocation: &Invocation) -> Result<RunStatus, ReflError>;
}

/// Spawns real processes and waits for them
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&mut self, invocation: &Invocation) -> Result<RunStatus, ReflError> {
        let mut command = Command::new(&invocation.program);
        command.args(&invocation.args);
        if let Some(cwd) = &invocation.cwd {
            command.current_dir(cwd);
        }

        debug!(command = %invocation, cwd = ?invocation.cwd, "Spawning process");
        let status = command.status().map_err(|e| ReflError::Process {
            program: invocation.program.clone(),
            reason: e.to_string(),
        })?;

        info!(command = %invocation, code = ?status.code(), "Process finished");
        Ok(RunStatus {
            code: status.code(),
        })
    }
}
