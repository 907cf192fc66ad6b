//! Persistence of the last confirmed username.
//!
//! One key (`user`) in a small TOML state file. The value survives restarts
//! and is only cleared by deleting the file.

mod file;
mod memory;

pub use file::FileUsernameStore;
pub use memory::MemoryUsernameStore;

use std::path::PathBuf;
use thiserror::Error;

/// Key under which the username is stored.
pub const USER_KEY: &str = "user";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to access state file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse state file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize state: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Get/set of the single persisted username.
pub trait UsernameStore: Send {
    /// The stored username, or an empty string if none was ever saved.
    fn get(&self) -> String;

    /// Persist `user`. The value is durable once this returns `Ok`.
    fn set(&mut self, user: &str) -> Result<(), StoreError>;
}
