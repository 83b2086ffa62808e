//! Configuration defaults and user config reading.
//!
//! The user folder holds an optional `config.yml` with the handful of plain
//! numeric settings the core consumes. Unknown keys are rejected so a typo
//! does not silently fall back to a default; a missing or unreadable file
//! logs a warning and uses the defaults.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

pub const DEFAULT_NUMBER_OF_ROWS: usize = 9;
pub const DEFAULT_MAX_NUMBER_OF_DATA: usize = 50;
pub const DEFAULT_STRING_LENGTH: usize = 30;

/// Configurable values for ClipTools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Rows per page, the size of the visible window.
    pub number_of_rows: usize,
    /// Clipboard history capacity, 0 = unbounded.
    pub max_number_of_data: usize,
    /// Display truncation length for list rows.
    pub string_length: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            number_of_rows: DEFAULT_NUMBER_OF_ROWS,
            max_number_of_data: DEFAULT_MAX_NUMBER_OF_DATA,
            string_length: DEFAULT_STRING_LENGTH,
        }
    }
}

/// The file nests everything under a single `Configurations` key.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(rename = "Configurations")]
    configurations: Config,
}

/// The per-user data folder; created on demand by the caller.
pub fn user_folder() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("cliptools")
}

/// Read and validate a config file. Partial files are fine, absent keys keep
/// their defaults.
pub fn read_config(path: &Path) -> anyhow::Result<Config> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read config file {}", path.display()))?;
    let file: ConfigFile = serde_yaml::from_str(&text)
        .with_context(|| format!("config YAML error in {}", path.display()))?;
    Ok(file.configurations)
}

/// Load `config.yml` from the user folder, falling back to defaults.
pub fn load_config(user_folder: &Path) -> Config {
    let path = user_folder.join("config.yml");
    if !path.is_file() {
        info!(path = %path.display(), "Config file not found, using defaults");
        return Config::default();
    }
    match read_config(&path) {
        Ok(config) => {
            info!(path = %path.display(), "Loaded user config");
            config
        }
        Err(err) => {
            warn!(error = %err, "Failed to read config, using defaults");
            Config::default()
        }
    }
}
