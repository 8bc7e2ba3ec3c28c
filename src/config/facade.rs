//! Config loading facade: assembles sources in precedence order.

use super::merge::builder_with_defaults;
use super::sources::{global_file, workspace_file};
use super::ReflConfig;
use config::{ConfigError, Environment, File};
use std::path::Path;
use tracing::debug;

/// Loads [`ReflConfig`] from the layered sources
pub struct ConfigLoader;

fn environment() -> Environment {
    Environment::with_prefix("REFL").separator("__")
}

impl ConfigLoader {
    /// Defaults, global file, workspace files, then environment
    pub fn load(workspace_root: &Path) -> Result<ReflConfig, ConfigError> {
        let builder = builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, workspace_root)?;

        let config: ReflConfig = builder.add_source(environment()).build()?.try_deserialize()?;
        debug!(workspace = %workspace_root.display(), "Configuration loaded");
        Ok(config)
    }

    /// Defaults, one explicit file, then environment
    pub fn load_from_file(path: &Path) -> Result<ReflConfig, ConfigError> {
        let config: ReflConfig = builder_with_defaults()?
            .add_source(File::from(path).required(true))
            .add_source(environment())
            .build()?
            .try_deserialize()?;
        debug!(config_path = %path.display(), "Configuration loaded from file");
        Ok(config)
    }
}
