use std::path::{Path, PathBuf};

use roster_codegen::GenerateOptions;
use serde::Deserialize;

use crate::CliError;

/// Contents of `roster.toml`. Every table and key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RosterConfig {
    pub generate: GenerateOptions,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
    /// Also append logs to this file.
    pub file: Option<PathBuf>,
}

/// Load the config at `path`, falling back to defaults when it does not exist.
pub fn load_config(path: &Path) -> Result<RosterConfig, CliError> {
    if !path.exists() {
        return Ok(RosterConfig::default());
    }

    let content = std::fs::read_to_string(path)?;
    let config: RosterConfig = toml::from_str(&content)?;
    Ok(config)
}
