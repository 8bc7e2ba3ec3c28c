//! Interactive command model
//!
//! [`CommandKind`] is the closed set of command-name tokens the builder
//! understands; [`Command`] carries one command together with its typed
//! arguments. Rendering a command yields the inner text of an IOTCM line,
//! before any envelope is applied.

use crate::error::CommandError;
use crate::protocol::builder::Scope;
use crate::protocol::range::{Range, RangeSpec};
use crate::protocol::vocabulary::{Backend, ComputeMode, RemoveOrKeep, Rewrite, UseForce};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Agda's per-file goal number
pub type InteractionId = u32;

/// Name of every supported interactive command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Compile,
    Load,
    Constraints,
    Metas,
    ShowModuleContentsToplevel,
    SearchAboutToplevel,
    SolveAll,
    SolveOne,
    AutoAll,
    AutoOne,
    Auto,
    InferToplevel,
    ComputeToplevel,
    LoadHighlightingInfo,
    TokenHighlighting,
    Highlight,
    Give,
    Refine,
    Intro,
    RefineOrIntro,
    Context,
    HelperFunction,
    Infer,
    GoalType,
    ElaborateGive,
    GoalTypeContext,
    GoalTypeContextInfer,
    GoalTypeContextCheck,
    ShowModuleContents,
    MakeCase,
    WhyInScope,
    Compute,
    WhyInScopeToplevel,
    ShowVersion,
    Abort,
}

impl CommandKind {
    pub const ALL: &'static [CommandKind] = &[
        CommandKind::Compile,
        CommandKind::Load,
        CommandKind::Constraints,
        CommandKind::Metas,
        CommandKind::ShowModuleContentsToplevel,
        CommandKind::SearchAboutToplevel,
        CommandKind::SolveAll,
        CommandKind::SolveOne,
        CommandKind::AutoAll,
        CommandKind::AutoOne,
        CommandKind::Auto,
        CommandKind::InferToplevel,
        CommandKind::ComputeToplevel,
        CommandKind::LoadHighlightingInfo,
        CommandKind::TokenHighlighting,
        CommandKind::Highlight,
        CommandKind::Give,
        CommandKind::Refine,
        CommandKind::Intro,
        CommandKind::RefineOrIntro,
        CommandKind::Context,
        CommandKind::HelperFunction,
        CommandKind::Infer,
        CommandKind::GoalType,
        CommandKind::ElaborateGive,
        CommandKind::GoalTypeContext,
        CommandKind::GoalTypeContextInfer,
        CommandKind::GoalTypeContextCheck,
        CommandKind::ShowModuleContents,
        CommandKind::MakeCase,
        CommandKind::WhyInScope,
        CommandKind::Compute,
        CommandKind::WhyInScopeToplevel,
        CommandKind::ShowVersion,
        CommandKind::Abort,
    ];

    /// Name token as typed by the user; the protocol name is `Cmd_` + this
    pub fn name(&self) -> &'static str {
        match self {
            CommandKind::Compile => "compile",
            CommandKind::Load => "load",
            CommandKind::Constraints => "constraints",
            CommandKind::Metas => "metas",
            CommandKind::ShowModuleContentsToplevel => "show_module_contents_toplevel",
            CommandKind::SearchAboutToplevel => "search_about_toplevel",
            CommandKind::SolveAll => "solveAll",
            CommandKind::SolveOne => "solveOne",
            CommandKind::AutoAll => "autoAll",
            CommandKind::AutoOne => "autoOne",
            CommandKind::Auto => "auto",
            CommandKind::InferToplevel => "infer_toplevel",
            CommandKind::ComputeToplevel => "compute_toplevel",
            CommandKind::LoadHighlightingInfo => "load_highlighting_info",
            CommandKind::TokenHighlighting => "tokenHighlighting",
            CommandKind::Highlight => "highlight",
            CommandKind::Give => "give",
            CommandKind::Refine => "refine",
            CommandKind::Intro => "intro",
            CommandKind::RefineOrIntro => "refine_or_intro",
            CommandKind::Context => "context",
            CommandKind::HelperFunction => "helper_function",
            CommandKind::Infer => "infer",
            CommandKind::GoalType => "goal_type",
            CommandKind::ElaborateGive => "elaborate_give",
            CommandKind::GoalTypeContext => "goal_type_context",
            CommandKind::GoalTypeContextInfer => "goal_type_context_infer",
            CommandKind::GoalTypeContextCheck => "goal_type_context_check",
            CommandKind::ShowModuleContents => "show_module_contents",
            CommandKind::MakeCase => "make_case",
            CommandKind::WhyInScope => "why_in_scope",
            CommandKind::Compute => "compute",
            CommandKind::WhyInScopeToplevel => "why_in_scope_toplevel",
            CommandKind::ShowVersion => "show_version",
            CommandKind::Abort => "abort",
        }
    }

    /// Commands acting on the whole loaded program rather than one buffer
    pub fn scope(&self) -> Scope {
        match self {
            CommandKind::Compile
            | CommandKind::Load
            | CommandKind::ShowModuleContentsToplevel
            | CommandKind::ComputeToplevel
            | CommandKind::WhyInScopeToplevel => Scope::Global,
            _ => Scope::File,
        }
    }

    /// Argument synopsis in textual order, for help output
    pub fn synopsis(&self) -> &'static str {
        match self {
            CommandKind::Compile => "BACKEND [FLAG...]",
            CommandKind::Load => "[FLAG...]",
            CommandKind::ShowModuleContentsToplevel
            | CommandKind::SearchAboutToplevel
            | CommandKind::InferToplevel => "REWRITE EXPR",
            CommandKind::SolveAll => "REWRITE",
            CommandKind::SolveOne => "REWRITE ID RANGE EXPR",
            CommandKind::AutoOne | CommandKind::Auto => "ID RANGE EXPR",
            CommandKind::ComputeToplevel => "COMPUTE_MODE EXPR",
            CommandKind::TokenHighlighting => "REMOVE_OR_KEEP",
            CommandKind::Highlight
            | CommandKind::Refine
            | CommandKind::MakeCase
            | CommandKind::WhyInScope => "ID RANGE",
            CommandKind::Give => "FORCE ID RANGE",
            CommandKind::Intro | CommandKind::RefineOrIntro => "BOOL ID RANGE",
            CommandKind::Context
            | CommandKind::HelperFunction
            | CommandKind::Infer
            | CommandKind::GoalType
            | CommandKind::GoalTypeContext => "REWRITE ID RANGE",
            CommandKind::Compute => "COMPUTE_MODE",
            CommandKind::Constraints
            | CommandKind::Metas
            | CommandKind::AutoAll
            | CommandKind::LoadHighlightingInfo
            | CommandKind::ElaborateGive
            | CommandKind::GoalTypeContextInfer
            | CommandKind::GoalTypeContextCheck
            | CommandKind::ShowModuleContents
            | CommandKind::WhyInScopeToplevel
            | CommandKind::ShowVersion
            | CommandKind::Abort => "",
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CommandKind {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CommandKind::ALL
            .iter()
            .find(|kind| kind.name() == s)
            .copied()
            .ok_or_else(|| CommandError::UnknownCommand(s.to_string()))
    }
}

/// One interactive command with its arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Compile {
        backend: Backend,
        flags: Vec<String>,
    },
    Load {
        flags: Vec<String>,
    },
    Constraints,
    Metas,
    ShowModuleContentsToplevel {
        rewrite: Rewrite,
        expr: String,
    },
    SearchAboutToplevel {
        rewrite: Rewrite,
        expr: String,
    },
    SolveAll {
        rewrite: Rewrite,
    },
    SolveOne {
        rewrite: Rewrite,
        interaction_id: InteractionId,
        range: Range,
        expr: String,
    },
    AutoAll,
    AutoOne {
        interaction_id: InteractionId,
        range: Range,
        expr: String,
    },
    Auto {
        interaction_id: InteractionId,
        range: Range,
        expr: String,
    },
    InferToplevel {
        rewrite: Rewrite,
        expr: String,
    },
    ComputeToplevel {
        mode: ComputeMode,
        expr: String,
    },
    LoadHighlightingInfo,
    TokenHighlighting {
        remove: RemoveOrKeep,
    },
    Highlight {
        interaction_id: InteractionId,
        range: Range,
    },
    Give {
        force: UseForce,
        interaction_id: InteractionId,
        range: Range,
    },
    Refine {
        interaction_id: InteractionId,
        range: Range,
    },
    /// `whether` is accepted for parity with `RefineOrIntro` but Agda's
    /// `Cmd_intro` line as built here does not carry it.
    Intro {
        whether: bool,
        interaction_id: InteractionId,
        range: Range,
    },
    RefineOrIntro {
        whether: bool,
        interaction_id: InteractionId,
        range: Range,
    },
    Context {
        rewrite: Rewrite,
        interaction_id: InteractionId,
        range: Range,
    },
    HelperFunction {
        rewrite: Rewrite,
        interaction_id: InteractionId,
        range: Range,
    },
    Infer {
        rewrite: Rewrite,
        interaction_id: InteractionId,
        range: Range,
    },
    GoalType {
        rewrite: Rewrite,
        interaction_id: InteractionId,
        range: Range,
    },
    ElaborateGive,
    GoalTypeContext {
        rewrite: Rewrite,
        interaction_id: InteractionId,
        range: Range,
    },
    GoalTypeContextInfer,
    GoalTypeContextCheck,
    ShowModuleContents,
    MakeCase {
        interaction_id: InteractionId,
        range: Range,
    },
    WhyInScope {
        interaction_id: InteractionId,
        range: Range,
    },
    Compute {
        mode: ComputeMode,
    },
    WhyInScopeToplevel,
    ShowVersion,
    Abort,
}

fn quoted_list(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("\"{}\"", item))
        .collect::<Vec<_>>()
        .join(",")
}

fn goal_args(interaction_id: InteractionId, range: &Range, src: &str) -> String {
    format!("{} {} \"{}\"", interaction_id, range, src)
}

impl Command {
    pub fn kind(&self) -> CommandKind {
        match self {
            Command::Compile { .. } => CommandKind::Compile,
            Command::Load { .. } => CommandKind::Load,
            Command::Constraints => CommandKind::Constraints,
            Command::Metas => CommandKind::Metas,
            Command::ShowModuleContentsToplevel { .. } => CommandKind::ShowModuleContentsToplevel,
            Command::SearchAboutToplevel { .. } => CommandKind::SearchAboutToplevel,
            Command::SolveAll { .. } => CommandKind::SolveAll,
            Command::SolveOne { .. } => CommandKind::SolveOne,
            Command::AutoAll => CommandKind::AutoAll,
            Command::AutoOne { .. } => CommandKind::AutoOne,
            Command::Auto { .. } => CommandKind::Auto,
            Command::InferToplevel { .. } => CommandKind::InferToplevel,
            Command::ComputeToplevel { .. } => CommandKind::ComputeToplevel,
            Command::LoadHighlightingInfo => CommandKind::LoadHighlightingInfo,
            Command::TokenHighlighting { .. } => CommandKind::TokenHighlighting,
            Command::Highlight { .. } => CommandKind::Highlight,
            Command::Give { .. } => CommandKind::Give,
            Command::Refine { .. } => CommandKind::Refine,
            Command::Intro { .. } => CommandKind::Intro,
            Command::RefineOrIntro { .. } => CommandKind::RefineOrIntro,
            Command::Context { .. } => CommandKind::Context,
            Command::HelperFunction { .. } => CommandKind::HelperFunction,
            Command::Infer { .. } => CommandKind::Infer,
            Command::GoalType { .. } => CommandKind::GoalType,
            Command::ElaborateGive => CommandKind::ElaborateGive,
            Command::GoalTypeContext { .. } => CommandKind::GoalTypeContext,
            Command::GoalTypeContextInfer => CommandKind::GoalTypeContextInfer,
            Command::GoalTypeContextCheck => CommandKind::GoalTypeContextCheck,
            Command::ShowModuleContents => CommandKind::ShowModuleContents,
            Command::MakeCase { .. } => CommandKind::MakeCase,
            Command::WhyInScope { .. } => CommandKind::WhyInScope,
            Command::Compute { .. } => CommandKind::Compute,
            Command::WhyInScopeToplevel => CommandKind::WhyInScopeToplevel,
            Command::ShowVersion => CommandKind::ShowVersion,
            Command::Abort => CommandKind::Abort,
        }
    }

    /// Inner command text for a builder scoped to `src_file`
    pub fn render(&self, src_file: &Path) -> String {
        let src = src_file.display().to_string();
        let name = format!("Cmd_{}", self.kind().name());

        let args = match self {
            Command::Compile { backend, flags } => {
                format!("{} \"{}\" [{}]", backend, src, quoted_list(flags))
            }
            Command::Load { flags } => format!("\"{}\" [{}]", src, quoted_list(flags)),
            Command::ShowModuleContentsToplevel { rewrite, expr }
            | Command::SearchAboutToplevel { rewrite, expr }
            | Command::InferToplevel { rewrite, expr } => format!("{} \"{}\"", rewrite, expr),
            Command::SolveAll { rewrite } => rewrite.to_string(),
            Command::SolveOne {
                rewrite,
                interaction_id,
                range,
                expr,
            } => format!("{} {} {} \"{}\"", rewrite, interaction_id, range, expr),
            Command::AutoOne {
                interaction_id,
                range,
                expr,
            }
            | Command::Auto {
                interaction_id,
                range,
                expr,
            } => format!("{} {} \"{}\"", interaction_id, range, expr),
            Command::ComputeToplevel { mode, expr } => format!("{} \"{}\"", mode, expr),
            Command::LoadHighlightingInfo | Command::WhyInScopeToplevel => {
                format!("\"{}\"", src)
            }
            Command::TokenHighlighting { remove } => format!("\"{}\" {}", src, remove),
            Command::Highlight {
                interaction_id,
                range,
            }
            | Command::Refine {
                interaction_id,
                range,
            }
            | Command::Intro {
                interaction_id,
                range,
                ..
            }
            | Command::MakeCase {
                interaction_id,
                range,
            }
            | Command::WhyInScope {
                interaction_id,
                range,
            } => goal_args(*interaction_id, range, &src),
            Command::Give {
                force,
                interaction_id,
                range,
            } => format!("{} {}", force, goal_args(*interaction_id, range, &src)),
            Command::RefineOrIntro {
                whether,
                interaction_id,
                range,
            } => {
                let whether = if *whether { "True" } else { "False" };
                format!("{} {}", whether, goal_args(*interaction_id, range, &src))
            }
            Command::Context {
                rewrite,
                interaction_id,
                range,
            }
            | Command::HelperFunction {
                rewrite,
                interaction_id,
                range,
            }
            | Command::Infer {
                rewrite,
                interaction_id,
                range,
            }
            | Command::GoalType {
                rewrite,
                interaction_id,
                range,
            }
            | Command::GoalTypeContext {
                rewrite,
                interaction_id,
                range,
            } => format!("{} {}", rewrite, goal_args(*interaction_id, range, &src)),
            Command::Compute { mode } => mode.to_string(),
            Command::Constraints
            | Command::Metas
            | Command::AutoAll
            | Command::ElaborateGive
            | Command::GoalTypeContextInfer
            | Command::GoalTypeContextCheck
            | Command::ShowModuleContents
            | Command::ShowVersion
            | Command::Abort => String::new(),
        };

        if args.is_empty() {
            name
        } else {
            format!("{} {}", name, args)
        }
    }

    /// Parse the arguments of `kind` from their textual form
    ///
    /// Ranges are resolved against `src_file`, which must exist when a
    /// non-empty range is given.
    pub fn parse(kind: CommandKind, args: &str, src_file: &Path) -> Result<Command, CommandError> {
        let mut args = ArgCursor::new(kind.name(), args);

        let command = match kind {
            CommandKind::Compile => Command::Compile {
                backend: args.vocabulary("BACKEND")?,
                flags: args.rest_tokens(),
            },
            CommandKind::Load => Command::Load {
                flags: args.rest_tokens(),
            },
            CommandKind::Constraints => Command::Constraints,
            CommandKind::Metas => Command::Metas,
            CommandKind::ShowModuleContentsToplevel => Command::ShowModuleContentsToplevel {
                rewrite: args.vocabulary("REWRITE")?,
                expr: args.expression()?,
            },
            CommandKind::SearchAboutToplevel => Command::SearchAboutToplevel {
                rewrite: args.vocabulary("REWRITE")?,
                expr: args.expression()?,
            },
            CommandKind::SolveAll => Command::SolveAll {
                rewrite: args.vocabulary("REWRITE")?,
            },
            CommandKind::SolveOne => Command::SolveOne {
                rewrite: args.vocabulary("REWRITE")?,
                interaction_id: args.interaction_id()?,
                range: args.range(src_file)?,
                expr: args.expression()?,
            },
            CommandKind::AutoAll => Command::AutoAll,
            CommandKind::AutoOne => Command::AutoOne {
                interaction_id: args.interaction_id()?,
                range: args.range(src_file)?,
                expr: args.expression()?,
            },
            CommandKind::Auto => Command::Auto {
                interaction_id: args.interaction_id()?,
                range: args.range(src_file)?,
                expr: args.expression()?,
            },
            CommandKind::InferToplevel => Command::InferToplevel {
                rewrite: args.vocabulary("REWRITE")?,
                expr: args.expression()?,
            },
            CommandKind::ComputeToplevel => Command::ComputeToplevel {
                mode: args.vocabulary("COMPUTE_MODE")?,
                expr: args.expression()?,
            },
            CommandKind::LoadHighlightingInfo => Command::LoadHighlightingInfo,
            CommandKind::TokenHighlighting => Command::TokenHighlighting {
                remove: args.vocabulary("REMOVE_OR_KEEP")?,
            },
            CommandKind::Highlight => Command::Highlight {
                interaction_id: args.interaction_id()?,
                range: args.range(src_file)?,
            },
            CommandKind::Give => Command::Give {
                force: args.vocabulary("FORCE")?,
                interaction_id: args.interaction_id()?,
                range: args.range(src_file)?,
            },
            CommandKind::Refine => Command::Refine {
                interaction_id: args.interaction_id()?,
                range: args.range(src_file)?,
            },
            CommandKind::Intro => Command::Intro {
                whether: args.boolean()?,
                interaction_id: args.interaction_id()?,
                range: args.range(src_file)?,
            },
            CommandKind::RefineOrIntro => Command::RefineOrIntro {
                whether: args.boolean()?,
                interaction_id: args.interaction_id()?,
                range: args.range(src_file)?,
            },
            CommandKind::Context => Command::Context {
                rewrite: args.vocabulary("REWRITE")?,
                interaction_id: args.interaction_id()?,
                range: args.range(src_file)?,
            },
            CommandKind::HelperFunction => Command::HelperFunction {
                rewrite: args.vocabulary("REWRITE")?,
                interaction_id: args.interaction_id()?,
                range: args.range(src_file)?,
            },
            CommandKind::Infer => Command::Infer {
                rewrite: args.vocabulary("REWRITE")?,
                interaction_id: args.interaction_id()?,
                range: args.range(src_file)?,
            },
            CommandKind::GoalType => Command::GoalType {
                rewrite: args.vocabulary("REWRITE")?,
                interaction_id: args.interaction_id()?,
                range: args.range(src_file)?,
            },
            CommandKind::ElaborateGive => Command::ElaborateGive,
            CommandKind::GoalTypeContext => Command::GoalTypeContext {
                rewrite: args.vocabulary("REWRITE")?,
                interaction_id: args.interaction_id()?,
                range: args.range(src_file)?,
            },
            CommandKind::GoalTypeContextInfer => Command::GoalTypeContextInfer,
            CommandKind::GoalTypeContextCheck => Command::GoalTypeContextCheck,
            CommandKind::ShowModuleContents => Command::ShowModuleContents,
            CommandKind::MakeCase => Command::MakeCase {
                interaction_id: args.interaction_id()?,
                range: args.range(src_file)?,
            },
            CommandKind::WhyInScope => Command::WhyInScope {
                interaction_id: args.interaction_id()?,
                range: args.range(src_file)?,
            },
            CommandKind::Compute => Command::Compute {
                mode: args.vocabulary("COMPUTE_MODE")?,
            },
            CommandKind::WhyInScopeToplevel => Command::WhyInScopeToplevel,
            CommandKind::ShowVersion => Command::ShowVersion,
            CommandKind::Abort => Command::Abort,
        };

        args.finish()?;
        Ok(command)
    }

    /// Parse `NAME ARGS...`
    pub fn parse_line(line: &str, src_file: &Path) -> Result<Command, CommandError> {
        let line = line.trim();
        let (name, args) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        Command::parse(name.parse()?, args, src_file)
    }
}

/// Walks the whitespace-separated arguments of one command
struct ArgCursor<'a> {
    command: &'static str,
    remaining: &'a str,
}

impl<'a> ArgCursor<'a> {
    fn new(command: &'static str, args: &'a str) -> Self {
        Self {
            command,
            remaining: args.trim(),
        }
    }

    fn missing(&self, argument: &'static str) -> CommandError {
        CommandError::MissingArgument {
            command: self.command,
            argument,
        }
    }

    fn token(&mut self, argument: &'static str) -> Result<&'a str, CommandError> {
        if self.remaining.is_empty() {
            return Err(self.missing(argument));
        }
        let (token, rest) = self
            .remaining
            .split_once(char::is_whitespace)
            .unwrap_or((self.remaining, ""));
        self.remaining = rest.trim_start();
        Ok(token)
    }

    fn vocabulary<T>(&mut self, argument: &'static str) -> Result<T, CommandError>
    where
        T: FromStr<Err = CommandError>,
    {
        self.token(argument)?.parse()
    }

    fn interaction_id(&mut self) -> Result<InteractionId, CommandError> {
        let token = self.token("ID")?;
        token
            .parse()
            .map_err(|_| CommandError::invalid_argument(token, &["<interaction id>"]))
    }

    fn range(&mut self, src_file: &Path) -> Result<Range, CommandError> {
        self.token("RANGE")?.parse::<RangeSpec>()?.resolve(src_file)
    }

    fn boolean(&mut self) -> Result<bool, CommandError> {
        match self.token("BOOL")? {
            "True" | "true" => Ok(true),
            "False" | "false" => Ok(false),
            other => Err(CommandError::invalid_argument(other, &["True", "False"])),
        }
    }

    /// The rest of the line, minus one pair of surrounding double quotes
    fn expression(&mut self) -> Result<String, CommandError> {
        if self.remaining.is_empty() {
            return Err(self.missing("EXPR"));
        }
        let expr = std::mem::take(&mut self.remaining).trim_end();
        let unquoted = expr
            .strip_prefix('"')
            .and_then(|e| e.strip_suffix('"'))
            .unwrap_or(expr);
        Ok(unquoted.to_string())
    }

    fn rest_tokens(&mut self) -> Vec<String> {
        std::mem::take(&mut self.remaining)
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }

    fn finish(self) -> Result<(), CommandError> {
        match self.remaining.split_whitespace().next() {
            Some(extra) => Err(CommandError::UnexpectedArgument {
                command: self.command,
                value: extra.to_string(),
            }),
            None => Ok(()),
        }
    }
}
