//! Shared test utilities for integration tests
//!
//! Provides source-file fixtures and serialized access to the environment
//! variables that configuration loading reads.

use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::TempDir;

/// Global mutex to serialize environment variable access across all tests
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// A temporary directory holding one empty Agda source file
pub struct SourceFixture {
    _dir: TempDir,
    pub path: PathBuf,
}

impl SourceFixture {
    pub fn new(name: &str) -> Self {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(name);
        std::fs::write(&path, "module Foo where\n").unwrap();
        Self { _dir: dir, path }
    }

    pub fn display(&self) -> String {
        self.path.display().to_string()
    }
}

/// Run `f` with `vars` set, `REFL__*` overrides cleared and
/// `XDG_CONFIG_HOME` pointing at `config_home` unless `vars` sets it.
/// The previous environment is restored afterwards.
pub fn with_env<F: FnOnce()>(config_home: &Path, vars: &[(&str, &str)], f: F) {
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());

    let mut touched: Vec<String> = std::env::vars()
        .map(|(key, _)| key)
        .filter(|key| key.starts_with("REFL__"))
        .collect();
    touched.push("XDG_CONFIG_HOME".to_string());
    touched.extend(vars.iter().map(|(key, _)| key.to_string()));
    let previous: Vec<(String, Option<String>)> = touched
        .into_iter()
        .map(|key| {
            let value = std::env::var(&key).ok();
            (key, value)
        })
        .collect();

    for (key, _) in &previous {
        if key.starts_with("REFL__") {
            std::env::remove_var(key);
        }
    }
    std::env::set_var("XDG_CONFIG_HOME", config_home);
    for (key, value) in vars {
        std::env::set_var(key, value);
    }

    f();

    for (key, value) in previous {
        match value {
            Some(v) => std::env::set_var(&key, v),
            None => std::env::remove_var(&key),
        }
    }
}
