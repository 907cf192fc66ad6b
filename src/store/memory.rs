use super::{StoreError, UsernameStore};

/// Process-local store. Nothing outlives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryUsernameStore {
    user: String,
}

impl MemoryUsernameStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(user: impl Into<String>) -> Self {
        Self { user: user.into() }
    }
}

impl UsernameStore for MemoryUsernameStore {
    fn get(&self) -> String {
        self.user.clone()
    }

    fn set(&mut self, user: &str) -> Result<(), StoreError> {
        self.user = user.to_string();
        Ok(())
    }
}
