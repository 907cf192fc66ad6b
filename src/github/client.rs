use std::time::Duration;

use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode, Url};
use tracing::debug;

use crate::config::GitHubConfig;
use crate::github::error::FetchError;
use crate::github::types::Repository;

pub const DEFAULT_API_URL: &str = "https://api.github.com/";

const ACCEPT_GITHUB_JSON: &str = "application/vnd.github+json";

/// Thin client over the one GitHub endpoint the app needs.
///
/// Single attempt per call, no caching.
pub struct GitHubClient {
    client: Client,
    base_url: Url,
}

impl GitHubClient {
    pub fn new(config: &GitHubConfig) -> Result<Self, FetchError> {
        let base_url = parse_base_url(&config.api_url)?;

        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(seconds) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }
        let client = builder.build()?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// URL of the repository listing for `user`. The name is pushed as a
    /// single percent-encoded path segment and is not validated.
    pub fn repositories_url(&self, user: &str) -> Url {
        let mut url = self.base_url.clone();
        // `parse_base_url` rejects URLs that cannot be a base.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("users").push(user).push("repos");
        }
        url
    }

    pub async fn fetch_repositories(&self, user: &str) -> Result<Vec<Repository>, FetchError> {
        let url = self.repositories_url(user);
        debug!(%url, "Fetching repositories");

        let response = self
            .client
            .get(url)
            .header(ACCEPT, ACCEPT_GITHUB_JSON)
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => {
                let body = response.bytes().await?;
                let repos: Option<Vec<Repository>> = serde_json::from_slice(&body)?;
                Ok(repos.unwrap_or_default())
            }
            StatusCode::NOT_FOUND => Err(FetchError::UserNotFound {
                user: user.to_string(),
            }),
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(FetchError::Status { status, body })
            }
        }
    }
}

fn parse_base_url(raw: &str) -> Result<Url, FetchError> {
    let url = Url::parse(raw).map_err(|e| FetchError::InvalidUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(FetchError::InvalidUrl {
            url: raw.to_string(),
            reason: format!("unsupported scheme '{}'", url.scheme()),
        });
    }
    if url.cannot_be_a_base() {
        return Err(FetchError::InvalidUrl {
            url: raw.to_string(),
            reason: "URL cannot be used as a base".to_string(),
        });
    }

    Ok(url)
}
