//! REPL session loop.
//!
//! Each line is classified, then either turned into an IOTCM line by the
//! session's [`Commands`] builder, run through the shell, echoed, or appended
//! to the scratch buffer and handed to Agda.

use crate::config::ReplConfig;
use crate::error::ReflError;
use crate::protocol::{CommandKind, Commands};
use crate::repl::editor::LineEditor;
use crate::repl::process::{Invocation, ProcessRunner};
use crate::repl::prompt;
use crate::repl::scratch::ScratchBuffer;
use comfy_table::Table;
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// What a line of REPL input asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input<'a> {
    Empty,
    Quit,
    History,
    /// `:NAME ARGS` for a known interactive command
    Interactive(CommandKind, &'a str),
    /// `:TEXT` for anything else
    Echo(&'a str),
    /// `!CMD`
    Shell(&'a str),
    /// Agda source for the scratch buffer
    Source(&'a str),
}

impl<'a> Input<'a> {
    pub fn classify(line: &'a str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Input::Empty;
        }

        if let Some(meta) = line.strip_prefix(':') {
            let (name, args) = meta.split_once(char::is_whitespace).unwrap_or((meta, ""));
            return match name {
                "q" | "quit" => Input::Quit,
                "history" => Input::History,
                _ => match name.parse::<CommandKind>() {
                    Ok(kind) => Input::Interactive(kind, args.trim()),
                    Err(_) => Input::Echo(meta),
                },
            };
        }

        match line.strip_prefix('!') {
            Some(command) => Input::Shell(command.trim()),
            None => Input::Source(line),
        }
    }
}

/// Whether the loop keeps going after a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplControl {
    Continue,
    Exit,
}

/// An interactive session over one scratch buffer
pub struct Repl<E, R, W> {
    config: ReplConfig,
    editor: E,
    runner: R,
    scratch: ScratchBuffer,
    commands: Commands,
    out: W,
}

impl<E, R, W> Repl<E, R, W>
where
    E: LineEditor,
    R: ProcessRunner,
    W: Write,
{
    pub fn new(config: ReplConfig, editor: E, runner: R, scratch: ScratchBuffer, out: W) -> Self {
        let commands = Commands::new(scratch.path());
        Self {
            config,
            editor,
            runner,
            scratch,
            commands,
            out,
        }
    }

    pub fn scratch(&self) -> &ScratchBuffer {
        &self.scratch
    }

    pub fn commands(&self) -> &Commands {
        &self.commands
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    /// Read and handle lines until end of input or `:quit`
    pub fn run(&mut self) -> Result<(), ReflError> {
        info!(scratch = %self.scratch.path().display(), "REPL session started");
        writeln!(self.out, "{}", prompt::banner(self.config.color))?;

        loop {
            let prompt = prompt::current(self.config.color);
            let Some(line) = self.editor.read_line(&prompt)? else {
                break;
            };
            if !line.trim().is_empty() {
                self.editor.add_history(line.trim())?;
            }

            match self.handle_line(&line) {
                Ok(ReplControl::Continue) => {}
                Ok(ReplControl::Exit) => break,
                Err(e) => {
                    warn!(error = %e, "REPL input failed");
                    writeln!(self.out, "{} {}", prompt::error_label(self.config.color), e)?;
                }
            }
        }

        info!(
            commands = self.commands.history().len(),
            "REPL session ended"
        );
        Ok(())
    }

    /// Handle one line of input
    pub fn handle_line(&mut self, line: &str) -> Result<ReplControl, ReflError> {
        match Input::classify(line) {
            Input::Empty => {}
            Input::Quit => return Ok(ReplControl::Exit),
            Input::History => self.print_history()?,
            Input::Interactive(kind, args) => {
                let iotcm = self.commands.issue_kind(kind, args)?;
                writeln!(self.out, "{}", iotcm)?;
            }
            Input::Echo(text) => {
                if let Some(name) = mistyped_command(text) {
                    debug!(name, "Unknown interactive command");
                    writeln!(self.out, "unknown command '{}'; echoing", name)?;
                }
                writeln!(self.out, "{}", text)?;
            }
            Input::Shell(command) => {
                debug!(command, "Running shell command");
                let status = self.runner.run(&Invocation::shell(command))?;
                if !status.success() {
                    writeln!(self.out, "{}", exit_message("command", status.code))?;
                }
            }
            Input::Source(source) => self.check_source(source)?,
        }
        Ok(ReplControl::Continue)
    }

    fn check_source(&mut self, source: &str) -> Result<(), ReflError> {
        self.scratch.append(source)?;

        let invocation = Invocation::new(self.config.agda_binary.as_str())
            .args(self.config.agda_args.iter().cloned())
            .arg(self.scratch.path().display().to_string())
            .current_dir(self.working_dir());
        info!(command = %invocation, "Checking scratch buffer");

        let status = self.runner.run(&invocation)?;
        if !status.success() {
            writeln!(
                self.out,
                "{}",
                exit_message(&self.config.agda_binary, status.code)
            )?;
        }
        Ok(())
    }

    fn working_dir(&self) -> PathBuf {
        self.config
            .working_dir
            .clone()
            .or_else(|| {
                self.scratch
                    .path()
                    .parent()
                    .filter(|p| !p.as_os_str().is_empty())
                    .map(|p| p.to_path_buf())
            })
            .unwrap_or_else(std::env::temp_dir)
    }

    fn print_history(&mut self) -> Result<(), ReflError> {
        if self.commands.history().is_empty() {
            writeln!(self.out, "No interactive commands issued yet.")?;
            return Ok(());
        }

        let mut table = Table::new();
        table.load_preset(comfy_table::presets::UTF8_FULL);
        table.set_header(vec!["#", "Command"]);
        for (i, inner) in self.commands.history().iter().enumerate() {
            table.add_row(vec![(i + 1).to_string(), inner.clone()]);
        }
        writeln!(self.out, "{}", table)?;
        Ok(())
    }
}

/// First word of echoed text when it reads like a command name
fn mistyped_command(text: &str) -> Option<&str> {
    let name = text.split_whitespace().next()?;
    let is_identifier = name.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    is_identifier.then_some(name)
}

fn exit_message(program: &str, code: Option<i32>) -> String {
    match code {
        Some(code) => format!("{} exited with status {}", program, code),
        None => format!("{} was terminated by a signal", program),
    }
}
