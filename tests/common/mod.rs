//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_github;

use ghrepos::config::GitHubConfig;
use ghrepos::platform::{Platform, PlatformError};
use parking_lot::Mutex;
use std::net::TcpListener;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

pub use mock_github::{CapturedRequest, MockGitHub, MockResponse};

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// GitHub settings pointing at `api_url`, with a short timeout.
pub fn github_config(api_url: &str) -> GitHubConfig {
    GitHubConfig {
        api_url: api_url.to_string(),
        timeout_seconds: Some(5),
        ..GitHubConfig::default()
    }
}

/// Temp dir plus the path of a state file inside it (not created).
pub fn temp_state_file() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("state.toml");
    (temp_dir, path)
}

/// What a `RecordingPlatform` was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformCall {
    Share(String),
    Open(String),
}

/// Platform fake that records calls and always succeeds.
#[derive(Clone, Default)]
pub struct RecordingPlatform {
    calls: Arc<Mutex<Vec<PlatformCall>>>,
}

impl RecordingPlatform {
    pub fn calls(&self) -> Vec<PlatformCall> {
        self.calls.lock().clone()
    }
}

impl Platform for RecordingPlatform {
    fn share(&mut self, url: &str) -> Result<(), PlatformError> {
        self.calls.lock().push(PlatformCall::Share(url.to_string()));
        Ok(())
    }

    fn open(&mut self, url: &str) -> Result<(), PlatformError> {
        self.calls.lock().push(PlatformCall::Open(url.to_string()));
        Ok(())
    }
}

pub const HELLO_WORLD_JSON: &str =
    r#"[{"name":"Hello-World","html_url":"https://github.com/octocat/Hello-World"}]"#;
