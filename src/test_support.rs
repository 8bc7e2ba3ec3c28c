//! Unit-test helpers for code that reads configuration from the environment.

use std::sync::{Mutex, MutexGuard};
use tempfile::TempDir;

static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Points `XDG_CONFIG_HOME` at an empty directory and clears `REFL__*`
/// overrides until dropped, holding a process-wide lock meanwhile.
pub(crate) struct IsolatedConfigEnv {
    previous: Vec<(String, Option<String>)>,
    _config_home: TempDir,
    _guard: MutexGuard<'static, ()>,
}

impl IsolatedConfigEnv {
    pub(crate) fn new() -> Self {
        let guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let config_home = TempDir::new().unwrap();

        let mut keys: Vec<String> = std::env::vars()
            .map(|(key, _)| key)
            .filter(|key| key.starts_with("REFL__"))
            .collect();
        keys.push("XDG_CONFIG_HOME".to_string());
        let previous = keys
            .into_iter()
            .map(|key| {
                let value = std::env::var(&key).ok();
                (key, value)
            })
            .collect::<Vec<_>>();

        for (key, _) in &previous {
            std::env::remove_var(key);
        }
        std::env::set_var("XDG_CONFIG_HOME", config_home.path());

        Self {
            previous,
            _config_home: config_home,
            _guard: guard,
        }
    }
}

impl Drop for IsolatedConfigEnv {
    fn drop(&mut self) {
        for (key, value) in self.previous.drain(..) {
            match value {
                Some(v) => std::env::set_var(&key, v),
                None => std::env::remove_var(&key),
            }
        }
    }
}
