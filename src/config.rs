//! Configuration loading
//!
//! Reads `chipin/config.toml` from the platform config directory. A missing
//! file means defaults; an unreadable or invalid file also means defaults,
//! with a warning for the caller to surface.

mod types;

use std::fs;
use std::path::{Path, PathBuf};

pub use types::{AutocompleteConfig, Config};

use crate::error::ChipInputError;

/// Loaded configuration plus an optional warning about why defaults were used
#[derive(Debug, Clone, Default)]
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

/// Default config location, if the platform has a config directory
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("chipin").join("config.toml"))
}

/// Parse a config file strictly
pub fn read_config(path: &Path) -> Result<Config, ChipInputError> {
    let content = fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| ChipInputError::Config(e.to_string()))
}

/// Load config from `path`, or from the default location when `None`
pub fn load_config(path: Option<&Path>) -> ConfigResult {
    let path = match path.map(Path::to_path_buf).or_else(default_config_path) {
        Some(path) => path,
        None => return ConfigResult::default(),
    };

    if !path.exists() {
        log::debug!("No config file at {}", path.display());
        return ConfigResult::default();
    }

    match read_config(&path) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(e) => {
            log::warn!("Ignoring config {}: {}", path.display(), e);
            ConfigResult {
                config: Config::default(),
                warning: Some(format!("{}: {}", path.display(), e)),
            }
        }
    }
}
