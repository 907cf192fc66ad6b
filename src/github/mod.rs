//! GitHub REST access: one endpoint, `users/{user}/repos`.

pub mod client;
pub mod error;
pub mod types;

pub use client::{GitHubClient, DEFAULT_API_URL};
pub use error::FetchError;
pub use types::Repository;
