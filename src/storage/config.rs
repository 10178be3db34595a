//! Configuration management
//!
//! Optional settings stored in `~/.config/fipe-explorer/config.toml`.
//! Priority for the base URL: config.toml > FIPE_URL environment variable >
//! the public FIPE API.

use super::Result;
use crate::api::client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::error::StorageError;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

pub const URL_ENV_VAR: &str = "FIPE_URL";

/// Application configuration
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// FIPE API base URL
    pub base_url: Option<String>,
    /// HTTP request timeout
    pub timeout_seconds: Option<u64>,
    /// Log level written to the log file
    pub log_level: Option<String>,
}

impl Config {
    /// Load configuration from file
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path()?,
        };

        if !config_path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|source| StorageError::FileIo {
            path: config_path.to_string_lossy().to_string(),
            source,
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|e| StorageError::ConfigParseError {
                message: format!("Failed to parse config file: {}", e),
            })?;

        Ok(config)
    }

    pub fn config_file_path() -> Result<PathBuf> {
        let home_dir = dirs::home_dir().ok_or(StorageError::ConfigDirNotFound)?;

        let app_config_dir = home_dir.join(".config").join("fipe-explorer");
        let config_file = app_config_dir.join("config.toml");

        Ok(config_file)
    }

    /// Get base URL with fallback to environment variable, then the default
    pub fn base_url(&self) -> String {
        self.base_url
            .clone()
            .filter(|s| !s.is_empty())
            .or_else(|| std::env::var(URL_ENV_VAR).ok().filter(|s| !s.is_empty()))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }

    pub fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS)
    }
}
