//! CLI route: single route table and run context. Dispatches to the protocol
//! builder, the REPL and presentation.

use crate::cli::help::command_name;
use crate::cli::parse::CliCommand;
use crate::cli::presentation::{format_command_list, format_emit_result, EmitResult};
use crate::config::{ConfigLoader, ReflConfig};
use crate::error::{CommandError, ReflError};
use crate::protocol::{CommandKind, Commands};
use crate::repl::completion::repl_words;
use crate::repl::{Repl, RustylineEditor, ScratchBuffer, SystemRunner};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Runtime context for CLI execution: workspace and the loaded configuration.
/// Built from workspace path and optional config path using ConfigLoader only.
pub struct RunContext {
    config: ReflConfig,
    workspace_root: PathBuf,
}

impl RunContext {
    /// Create run context from workspace root and optional config path.
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, ReflError> {
        let config = match config_path {
            Some(ref path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load(&workspace_root)?,
        };

        if let Err(errors) = config.validate() {
            let joined = errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(ReflError::Config(joined));
        }

        debug!(workspace = %workspace_root.display(), "Configuration loaded");
        Ok(Self {
            config,
            workspace_root,
        })
    }

    pub fn config(&self) -> &ReflConfig {
        &self.config
    }

    pub fn workspace_root(&self) -> &Path {
        &self.workspace_root
    }

    /// Execute a CLI command via the single route table. `None` starts the REPL.
    pub fn execute(&self, command: Option<&CliCommand>) -> Result<String, ReflError> {
        let started = Instant::now();
        let name = command_name(command);
        let result = self.execute_inner(command);
        let duration_ms = started.elapsed().as_millis() as u64;
        match &result {
            Ok(_) => info!(command = name, duration_ms, "Command finished"),
            Err(e) => warn!(command = name, duration_ms, error = %e, "Command failed"),
        }
        result
    }

    fn execute_inner(&self, command: Option<&CliCommand>) -> Result<String, ReflError> {
        match command {
            None => self.handle_repl(None, None, None, None),
            Some(CliCommand::Repl {
                history,
                scratch_dir,
                scratch,
                agda,
            }) => self.handle_repl(
                history.as_deref(),
                scratch_dir.as_deref(),
                scratch.as_deref(),
                agda.as_deref(),
            ),
            Some(CliCommand::Emit {
                file,
                format,
                command,
            }) => self.handle_emit(file, format, command),
            Some(CliCommand::List { format }) => format_command_list(format),
            Some(CliCommand::Config) => toml::to_string_pretty(&self.config)
                .map_err(|e| ReflError::Serialization(e.to_string())),
        }
    }

    fn handle_repl(
        &self,
        history: Option<&Path>,
        scratch_dir: Option<&Path>,
        scratch: Option<&Path>,
        agda: Option<&str>,
    ) -> Result<String, ReflError> {
        let mut repl_config = self.config.repl.clone();
        if let Some(history) = history {
            repl_config.history_file = Some(history.to_path_buf());
        }
        if let Some(agda) = agda {
            repl_config.agda_binary = agda.to_string();
        }

        let scratch = match scratch {
            Some(path) => ScratchBuffer::open(path)?,
            None => {
                let dir = scratch_dir
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| repl_config.resolved_scratch_dir());
                ScratchBuffer::create_in(&dir)?
            }
        };

        let cwd = std::env::current_dir()?;
        let editor = RustylineEditor::new(repl_config.resolved_history_file(), repl_words(&cwd))?;
        let scratch_path = scratch.path().to_path_buf();

        let mut repl = Repl::new(
            repl_config,
            editor,
            SystemRunner,
            scratch,
            std::io::stdout(),
        );
        repl.run()?;

        Ok(format!("Scratch buffer kept at {}", scratch_path.display()))
    }

    fn handle_emit(&self, file: &Path, format: &str, words: &[String]) -> Result<String, ReflError> {
        let (name, args) = words.split_first().ok_or(CommandError::MissingArgument {
            command: "emit",
            argument: "COMMAND",
        })?;
        let kind: CommandKind = name.parse()?;

        let mut commands = Commands::new(file);
        let iotcm = commands.issue_kind(kind, &args.join(" "))?;
        let inner = commands.history().last().cloned().unwrap_or_default();

        format_emit_result(
            &EmitResult {
                kind,
                inner,
                iotcm,
            },
            format,
        )
    }
}
