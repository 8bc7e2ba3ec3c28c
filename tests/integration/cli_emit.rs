//! Integration tests for the `refl` binary's non-interactive subcommands.

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn refl(home: &Path, args: &[&str]) -> Output {
    let bin = env!("CARGO_BIN_EXE_refl");
    let mut command = Command::new(bin);
    for (key, _) in std::env::vars().filter(|(key, _)| key.starts_with("REFL__")) {
        command.env_remove(key);
    }
    command
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join("config"))
        .env("XDG_STATE_HOME", home.join("state"))
        .env_remove("REFL_LOG")
        .arg("--quiet")
        .arg("--workspace")
        .arg(home)
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn test_emit_prints_iotcm_line() {
    let temp = TempDir::new().unwrap();
    let output = refl(
        temp.path(),
        &["emit", "--file", "Foo.agda", "compile", "GHC", "-v2"],
    );

    assert!(
        output.status.success(),
        "refl emit should succeed: stderr={:?}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim_end(),
        "IOTCM \"Foo.agda\" None Indirect (Cmd_compile GHC \"Foo.agda\" [\"-v2\"])"
    );
}

#[test]
fn test_emit_json_output() {
    let temp = TempDir::new().unwrap();
    let output = refl(
        temp.path(),
        &[
            "emit",
            "--file",
            "Foo.agda",
            "--format",
            "json",
            "infer_toplevel",
            "Normalised",
            "suc zero",
        ],
    );
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["command"], "infer_toplevel");
    assert_eq!(parsed["scope"], "file");
    assert_eq!(parsed["inner"], "Cmd_infer_toplevel Normalised \"suc zero\"");
}

#[test]
fn test_emit_invalid_argument_fails() {
    let temp = TempDir::new().unwrap();
    let output = refl(
        temp.path(),
        &["emit", "--file", "Foo.agda", "give", "Maybe", "0", "-"],
    );

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Invalid argument: Maybe should be one of WithForce, WithoutForce"),
        "stderr={stderr:?}"
    );
    assert!(output.stdout.is_empty());
}

#[test]
fn test_list_shows_every_command() {
    let temp = TempDir::new().unwrap();
    let output = refl(temp.path(), &["list", "--format", "json"]);
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let names: Vec<&str> = parsed
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["name"].as_str().unwrap())
        .collect();
    assert_eq!(names.len(), 35);
    assert!(names.contains(&"tokenHighlighting"));
    assert!(names.contains(&"abort"));
}

#[test]
fn test_config_reflects_workspace_file() {
    let temp = TempDir::new().unwrap();
    std::fs::write(
        temp.path().join("refl.toml"),
        "[repl]\nagda_args = [\"--safe\"]\n",
    )
    .unwrap();

    let output = refl(temp.path(), &["config"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let parsed: toml::Value = toml::from_str(&stdout).unwrap();
    assert_eq!(
        parsed["repl"]["agda_args"].as_array().unwrap()[0].as_str(),
        Some("--safe")
    );
}
