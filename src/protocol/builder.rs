//! Command builder
//!
//! A [`Commands`] instance is scoped to one target source file. Every call
//! formats the inner command, appends it to the instance's history and
//! returns the full IOTCM line ready for Agda's standard input.

use crate::error::CommandError;
use crate::protocol::command::{Command, CommandKind, InteractionId};
use crate::protocol::range::Range;
use crate::protocol::vocabulary::{Backend, ComputeMode, RemoveOrKeep, Rewrite, UseForce};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Target scope of an IOTCM envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// This file, non-interactive highlighting, indirect output
    File,
    /// No particular file: the command applies to the loaded program
    Global,
}

impl Scope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::File => "file",
            Scope::Global => "global",
        }
    }

    fn highlighting_level(&self) -> &'static str {
        match self {
            Scope::File => "NonInteractive",
            Scope::Global => "None",
        }
    }

    /// Wrap an inner command for Agda's standard input
    pub fn wrap(&self, src_file: &Path, inner: &str) -> String {
        format!(
            "IOTCM \"{}\" {} Indirect ({})",
            src_file.display(),
            self.highlighting_level(),
            inner
        )
    }
}

/// Builds IOTCM lines for one source file and keeps an audit trail of them
#[derive(Debug, Clone)]
pub struct Commands {
    src_file: PathBuf,
    history: Vec<String>,
}

impl Commands {
    pub fn new(src_file: impl Into<PathBuf>) -> Self {
        Self {
            src_file: src_file.into(),
            history: Vec::new(),
        }
    }

    pub fn src_file(&self) -> &Path {
        &self.src_file
    }

    /// Inner commands issued so far, oldest first
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Format, record and wrap one command
    pub fn issue(&mut self, command: &Command) -> String {
        let kind = command.kind();
        let inner = command.render(&self.src_file);
        debug!(command = kind.name(), inner = %inner, "Issuing interactive command");

        let line = kind.scope().wrap(&self.src_file, &inner);
        self.history.push(inner);
        line
    }

    /// Parse `NAME ARGS...` and issue it; nothing is recorded on failure
    pub fn issue_line(&mut self, line: &str) -> Result<String, CommandError> {
        let command = Command::parse_line(line, &self.src_file)?;
        Ok(self.issue(&command))
    }

    /// Parse the arguments of a known command and issue it
    pub fn issue_kind(&mut self, kind: CommandKind, args: &str) -> Result<String, CommandError> {
        let command = Command::parse(kind, args, &self.src_file)?;
        Ok(self.issue(&command))
    }

    pub fn compile<S: AsRef<str>>(&mut self, backend: Backend, flags: &[S]) -> String {
        let flags = flags.iter().map(|f| f.as_ref().to_string()).collect();
        self.issue(&Command::Compile { backend, flags })
    }

    pub fn load<S: AsRef<str>>(&mut self, flags: &[S]) -> String {
        let flags = flags.iter().map(|f| f.as_ref().to_string()).collect();
        self.issue(&Command::Load { flags })
    }

    pub fn constraints(&mut self) -> String {
        self.issue(&Command::Constraints)
    }

    pub fn metas(&mut self) -> String {
        self.issue(&Command::Metas)
    }

    pub fn show_module_contents_toplevel(&mut self, rewrite: Rewrite, expr: &str) -> String {
        self.issue(&Command::ShowModuleContentsToplevel {
            rewrite,
            expr: expr.to_string(),
        })
    }

    pub fn search_about_toplevel(&mut self, rewrite: Rewrite, expr: &str) -> String {
        self.issue(&Command::SearchAboutToplevel {
            rewrite,
            expr: expr.to_string(),
        })
    }

    pub fn solve_all(&mut self, rewrite: Rewrite) -> String {
        self.issue(&Command::SolveAll { rewrite })
    }

    pub fn solve_one(
        &mut self,
        rewrite: Rewrite,
        interaction_id: InteractionId,
        range: Range,
        expr: &str,
    ) -> String {
        self.issue(&Command::SolveOne {
            rewrite,
            interaction_id,
            range,
            expr: expr.to_string(),
        })
    }

    pub fn auto_all(&mut self) -> String {
        self.issue(&Command::AutoAll)
    }

    pub fn auto_one(&mut self, interaction_id: InteractionId, range: Range, expr: &str) -> String {
        self.issue(&Command::AutoOne {
            interaction_id,
            range,
            expr: expr.to_string(),
        })
    }

    pub fn auto(&mut self, interaction_id: InteractionId, range: Range, expr: &str) -> String {
        self.issue(&Command::Auto {
            interaction_id,
            range,
            expr: expr.to_string(),
        })
    }

    pub fn infer_toplevel(&mut self, rewrite: Rewrite, expr: &str) -> String {
        self.issue(&Command::InferToplevel {
            rewrite,
            expr: expr.to_string(),
        })
    }

    pub fn compute_toplevel(&mut self, mode: ComputeMode, expr: &str) -> String {
        self.issue(&Command::ComputeToplevel {
            mode,
            expr: expr.to_string(),
        })
    }

    pub fn load_highlighting_info(&mut self) -> String {
        self.issue(&Command::LoadHighlightingInfo)
    }

    pub fn token_highlighting(&mut self, remove: RemoveOrKeep) -> String {
        self.issue(&Command::TokenHighlighting { remove })
    }

    pub fn highlight(&mut self, interaction_id: InteractionId, range: Range) -> String {
        self.issue(&Command::Highlight {
            interaction_id,
            range,
        })
    }

    pub fn give(&mut self, force: UseForce, interaction_id: InteractionId, range: Range) -> String {
        self.issue(&Command::Give {
            force,
            interaction_id,
            range,
        })
    }

    pub fn refine(&mut self, interaction_id: InteractionId, range: Range) -> String {
        self.issue(&Command::Refine {
            interaction_id,
            range,
        })
    }

    /// `whether` is not part of the emitted line; see [`Command::Intro`]
    pub fn intro(&mut self, whether: bool, interaction_id: InteractionId, range: Range) -> String {
        self.issue(&Command::Intro {
            whether,
            interaction_id,
            range,
        })
    }

    pub fn refine_or_intro(
        &mut self,
        whether: bool,
        interaction_id: InteractionId,
        range: Range,
    ) -> String {
        self.issue(&Command::RefineOrIntro {
            whether,
            interaction_id,
            range,
        })
    }

    pub fn context(&mut self, rewrite: Rewrite, interaction_id: InteractionId, range: Range) -> String {
        self.issue(&Command::Context {
            rewrite,
            interaction_id,
            range,
        })
    }

    pub fn helper_function(
        &mut self,
        rewrite: Rewrite,
        interaction_id: InteractionId,
        range: Range,
    ) -> String {
        self.issue(&Command::HelperFunction {
            rewrite,
            interaction_id,
            range,
        })
    }

    pub fn infer(&mut self, rewrite: Rewrite, interaction_id: InteractionId, range: Range) -> String {
        self.issue(&Command::Infer {
            rewrite,
            interaction_id,
            range,
        })
    }

    pub fn goal_type(
        &mut self,
        rewrite: Rewrite,
        interaction_id: InteractionId,
        range: Range,
    ) -> String {
        self.issue(&Command::GoalType {
            rewrite,
            interaction_id,
            range,
        })
    }

    pub fn elaborate_give(&mut self) -> String {
        self.issue(&Command::ElaborateGive)
    }

    pub fn goal_type_context(
        &mut self,
        rewrite: Rewrite,
        interaction_id: InteractionId,
        range: Range,
    ) -> String {
        self.issue(&Command::GoalTypeContext {
            rewrite,
            interaction_id,
            range,
        })
    }

    pub fn goal_type_context_infer(&mut self) -> String {
        self.issue(&Command::GoalTypeContextInfer)
    }

    pub fn goal_type_context_check(&mut self) -> String {
        self.issue(&Command::GoalTypeContextCheck)
    }

    pub fn show_module_contents(&mut self) -> String {
        self.issue(&Command::ShowModuleContents)
    }

    pub fn make_case(&mut self, interaction_id: InteractionId, range: Range) -> String {
        self.issue(&Command::MakeCase {
            interaction_id,
            range,
        })
    }

    pub fn why_in_scope(&mut self, interaction_id: InteractionId, range: Range) -> String {
        self.issue(&Command::WhyInScope {
            interaction_id,
            range,
        })
    }

    pub fn compute(&mut self, mode: ComputeMode) -> String {
        self.issue(&Command::Compute { mode })
    }

    pub fn why_in_scope_toplevel(&mut self) -> String {
        self.issue(&Command::WhyInScopeToplevel)
    }

    pub fn show_version(&mut self) -> String {
        self.issue(&Command::ShowVersion)
    }

    pub fn abort(&mut self) -> String {
        self.issue(&Command::Abort)
    }
}
