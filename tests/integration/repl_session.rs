//! Integration tests for the REPL session loop
//!
//! Uses a scripted line editor and a recording process runner so no terminal
//! or Agda installation is needed.

use refl::config::ReplConfig;
use refl::error::ReflError;
use refl::repl::{Invocation, LineEditor, ProcessRunner, Repl, RunStatus, ScratchBuffer};
use std::collections::VecDeque;
use tempfile::TempDir;

struct ScriptedEditor {
    lines: VecDeque<String>,
    history: Vec<String>,
}

impl ScriptedEditor {
    fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|l| l.to_string()).collect(),
            history: Vec::new(),
        }
    }
}

impl LineEditor for ScriptedEditor {
    fn read_line(&mut self, _prompt: &str) -> Result<Option<String>, ReflError> {
        Ok(self.lines.pop_front())
    }

    fn add_history(&mut self, line: &str) -> Result<(), ReflError> {
        self.history.push(line.to_string());
        Ok(())
    }
}

#[derive(Default)]
struct RecordingRunner {
    invocations: Vec<Invocation>,
    exit_code: i32,
}

impl ProcessRunner for &mut RecordingRunner {
    fn run(&mut self, invocation: &Invocation) -> Result<RunStatus, ReflError> {
        self.invocations.push(invocation.clone());
        Ok(RunStatus {
            code: Some(self.exit_code),
        })
    }
}

fn plain_config() -> ReplConfig {
    ReplConfig {
        color: false,
        ..ReplConfig::default()
    }
}

fn run_script(
    dir: &TempDir,
    lines: &[&str],
    runner: &mut RecordingRunner,
) -> (String, ScratchBuffer, Vec<String>) {
    let scratch = ScratchBuffer::create_in(dir.path()).unwrap();
    run_with_scratch(scratch, lines, runner)
}

fn run_with_scratch(
    scratch: ScratchBuffer,
    lines: &[&str],
    runner: &mut RecordingRunner,
) -> (String, ScratchBuffer, Vec<String>) {
    let kept = scratch.clone();
    let mut repl = Repl::new(
        plain_config(),
        ScriptedEditor::new(lines),
        runner,
        scratch,
        Vec::new(),
    );
    repl.run().unwrap();
    let history = repl.commands().history().to_vec();
    let out = String::from_utf8(repl.output().clone()).unwrap();
    (out, kept, history)
}

#[test]
fn test_interactive_command_prints_iotcm_line() {
    let dir = TempDir::new().unwrap();
    let mut runner = RecordingRunner::default();
    let (out, scratch, history) = run_script(&dir, &[":metas", ":quit"], &mut runner);

    assert!(out.contains(&format!(
        "IOTCM \"{}\" NonInteractive Indirect (Cmd_metas)",
        scratch.path().display()
    )));
    assert_eq!(history, ["Cmd_metas"]);
    assert!(runner.invocations.is_empty());
}

#[test]
fn test_source_lines_are_appended_and_checked() {
    let dir = TempDir::new().unwrap();
    let mut runner = RecordingRunner::default();
    let (_, scratch, _) = run_script(
        &dir,
        &["data Nat : Set where", "  zero : Nat"],
        &mut runner,
    );

    let contents = scratch.contents().unwrap();
    assert!(contents.starts_with(&format!("module {} where", scratch.module_name())));
    assert!(contents.contains("data Nat : Set where\n\n"));
    assert!(contents.contains("zero : Nat\n\n"));

    assert_eq!(runner.invocations.len(), 2);
    let check = &runner.invocations[0];
    assert_eq!(check.program, "agda");
    assert_eq!(
        check.args,
        ["--compile".to_string(), scratch.path().display().to_string()]
    );
    assert_eq!(check.cwd.as_deref(), scratch.path().parent());
}

#[test]
fn test_failed_check_is_reported_and_session_continues() {
    let dir = TempDir::new().unwrap();
    let mut runner = RecordingRunner {
        exit_code: 1,
        ..RecordingRunner::default()
    };
    let (out, _, history) = run_script(&dir, &["x = y", ":constraints"], &mut runner);

    assert!(out.contains("agda exited with status 1"));
    assert_eq!(history, ["Cmd_constraints"]);
}

#[test]
fn test_shell_and_echo_lines() {
    let dir = TempDir::new().unwrap();
    let mut runner = RecordingRunner::default();
    let (out, _, history) = run_script(&dir, &["!ls -la", ":hello there"], &mut runner);

    assert_eq!(runner.invocations.len(), 1);
    assert_eq!(runner.invocations[0], Invocation::shell("ls -la"));
    assert!(out.contains("unknown command 'hello'; echoing\nhello there"));
    assert!(history.is_empty());
}

#[test]
fn test_mistyped_command_is_flagged() {
    let dir = TempDir::new().unwrap();
    let mut runner = RecordingRunner::default();
    let (out, _, history) = run_script(&dir, &[":metaz", ":(not a command)"], &mut runner);

    assert!(out.contains("unknown command 'metaz'; echoing"));
    assert!(out.contains("(not a command)"));
    assert!(!out.contains("unknown command '(not"));
    assert!(history.is_empty());
}

#[test]
fn test_relative_scratch_path_is_checked_in_its_directory() {
    let dir = TempDir::new_in(".").unwrap();
    let relative = dir.path().join("Session.agda");
    assert!(relative.is_relative());

    let mut runner = RecordingRunner::default();
    let scratch = ScratchBuffer::open(&relative).unwrap();
    let (out, scratch, _) = run_with_scratch(scratch, &["x = 1", ":metas"], &mut runner);

    assert_eq!(runner.invocations.len(), 1);
    let check = &runner.invocations[0];
    let cwd = check.cwd.as_deref().unwrap();
    assert!(!cwd.as_os_str().is_empty());
    assert!(cwd.is_absolute());

    let target = cwd.join(check.args.last().unwrap());
    assert!(target.is_file());
    assert_eq!(
        std::fs::canonicalize(&target).unwrap(),
        std::fs::canonicalize(&relative).unwrap()
    );

    // Interactive commands name the file by its absolute path
    let absolute = scratch.path().display().to_string();
    assert!(scratch.path().is_absolute());
    assert!(out.contains(&format!("IOTCM \"{}\" NonInteractive Indirect (Cmd_metas)", absolute)));
}

#[test]
fn test_bad_arguments_print_an_error_and_continue() {
    let dir = TempDir::new().unwrap();
    let mut runner = RecordingRunner::default();
    let (out, _, history) = run_script(
        &dir,
        &[":solveAll Fast", ":solveAll Simplified"],
        &mut runner,
    );

    assert!(out.contains("error: Invalid argument: Fast should be one of AsIs, Instantiated, HeadNormal, Simplified, Normalised"));
    assert_eq!(history, ["Cmd_solveAll Simplified"]);
}

#[test]
fn test_history_command_lists_issued_commands() {
    let dir = TempDir::new().unwrap();
    let mut runner = RecordingRunner::default();
    let (out, _, _) = run_script(
        &dir,
        &[":history", ":show_version", ":history"],
        &mut runner,
    );

    assert!(out.contains("No interactive commands issued yet."));
    assert!(out.contains("Cmd_show_version"));
}

#[test]
fn test_quit_stops_reading() {
    let dir = TempDir::new().unwrap();
    let mut runner = RecordingRunner::default();
    let (_, _, history) = run_script(&dir, &[":q", ":metas"], &mut runner);
    assert!(history.is_empty());
}
