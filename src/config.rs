//! User configuration
//!
//! Optional file at `$LBRANCH_CONFIG`, or `lbranch/config.toml` under the
//! platform config directory. A missing file means defaults.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Branches listed when neither `-n` nor the config file says otherwise.
pub const DEFAULT_COUNT: u32 = 5;

/// Environment variable pointing at an explicit config file.
pub const CONFIG_ENV: &str = "LBRANCH_CONFIG";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot read config {}: {}", path.display(), source)]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config {}: {}", path.display(), source.message())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid config {}: {}", path.display(), message)]
    Invalid { path: PathBuf, message: String },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Default number of branches to list
    #[serde(default)]
    pub count: Option<u32>,

    /// Color handling when no flag or environment variable decides
    #[serde(default)]
    pub color: ColorMode,
}

impl Settings {
    /// Load settings from the configured location.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// `$LBRANCH_CONFIG`, else `<config dir>/lbranch/config.toml`.
    pub fn config_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|dir| dir.join("lbranch").join("config.toml"))
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        log::debug!("reading config from {}", path.display());
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings: Settings = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        settings.validate(path)?;
        Ok(settings)
    }

    fn validate(&self, path: &Path) -> Result<(), ConfigError> {
        if self.count == Some(0) {
            return Err(ConfigError::Invalid {
                path: path.to_path_buf(),
                message: "count must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// The display count, letting the command line win.
    pub fn count(&self, cli_count: Option<u32>) -> u32 {
        cli_count.or(self.count).unwrap_or(DEFAULT_COUNT)
    }
}
