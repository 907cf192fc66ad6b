use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::github::DEFAULT_API_URL;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub github: GitHubConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// GitHub API settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GitHubConfig {
    /// Base URL of the REST API (default: "https://api.github.com/").
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// User-Agent header; GitHub rejects requests without one.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Whole-request timeout. Unset means the HTTP client's defaults.
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
}

/// Where the saved username lives.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Overrides the default state file under the platform data dir.
    #[serde(default)]
    pub state_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw tick in milliseconds (default: 250). Drives the spinner.
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_user_agent() -> String {
    format!("ghrepos/{}", env!("CARGO_PKG_VERSION"))
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            user_agent: default_user_agent(),
            timeout_seconds: None,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}
