use std::fs;
use std::path::{Path, PathBuf};

use reqwest::Url;
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/ghrepos/config.toml` on Linux, or the equivalent on
    /// other platforms via `dirs::config_dir()`. Falls back to the current
    /// directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("ghrepos").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - Otherwise parses it as TOML and validates it.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - `github.api_url` is an absolute http(s) URL
    /// - `github.user_agent` is not blank
    /// - `github.timeout_seconds`, when set, is positive
    /// - `ui.tick_rate_ms` is positive
    pub fn validate(&self) -> Result<(), ConfigError> {
        let api_url = &self.github.api_url;
        let parsed = Url::parse(api_url).map_err(|e| ConfigError::ValidationError {
            message: format!("github.api_url '{}' is not a valid URL: {}", api_url, e),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::ValidationError {
                message: format!("github.api_url '{}' must use http or https", api_url),
            });
        }

        if self.github.user_agent.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "github.user_agent must not be empty".to_string(),
            });
        }

        if self.github.timeout_seconds == Some(0) {
            return Err(ConfigError::ValidationError {
                message: "github.timeout_seconds must be greater than zero".to_string(),
            });
        }

        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "ui.tick_rate_ms must be greater than zero".to_string(),
            });
        }

        Ok(())
    }

    /// State file for the username store: the configured one, else
    /// `<data_dir>/ghrepos/state.toml`.
    pub fn state_file(&self) -> PathBuf {
        if let Some(path) = &self.storage.state_file {
            return path.clone();
        }
        let data_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        data_dir.join("ghrepos").join("state.toml")
    }
}
