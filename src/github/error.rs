use reqwest::StatusCode;
use thiserror::Error;

/// Errors returned by [`GitHubClient`](super::GitHubClient).
#[derive(Debug, Error)]
pub enum FetchError {
    /// GitHub answered 404 for the user.
    #[error("GitHub user '{user}' not found")]
    UserNotFound { user: String },

    /// Any non-2xx status other than 404.
    #[error("GitHub API request failed with status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Failed to decode repository list: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
    },

    /// Connection, TLS, timeout or body read failure.
    #[error("Network error: {source}")]
    Network {
        #[source]
        source: reqwest::Error,
    },

    #[error("Invalid API URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}

impl FetchError {
    pub fn is_user_not_found(&self) -> bool {
        matches!(self, Self::UserNotFound { .. })
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(source: reqwest::Error) -> Self {
        Self::Network { source }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(source: serde_json::Error) -> Self {
        Self::Decode { source }
    }
}
