//! Well-known file locations.

use directories::{BaseDirs, ProjectDirs};
use std::path::PathBuf;

const APP_NAME: &str = "refl";

/// Path to the global config file, honouring XDG_CONFIG_HOME.
pub fn global_config_path() -> Option<PathBuf> {
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(xdg).join(APP_NAME).join("config.toml"));
    }
    BaseDirs::new().map(|dirs| {
        dirs.home_dir()
            .join(".config")
            .join(APP_NAME)
            .join("config.toml")
    })
}

/// Default log file: `<state dir>/refl/refl.log`, falling back to the data dir.
pub fn default_log_file() -> PathBuf {
    let dir = ProjectDirs::from("", "", APP_NAME).map(|dirs| {
        dirs.state_dir()
            .unwrap_or_else(|| dirs.data_local_dir())
            .to_path_buf()
    });
    dir.unwrap_or_else(|| std::env::temp_dir().join(APP_NAME))
        .join("refl.log")
}

/// Default line-editor history file: `~/.refl_history`.
pub fn default_history_file() -> PathBuf {
    BaseDirs::new()
        .map(|dirs| dirs.home_dir().join(".refl_history"))
        .unwrap_or_else(|| PathBuf::from(".refl_history"))
}
