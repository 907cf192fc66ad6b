use serde::Deserialize;

/// One repository as listed by `GET /users/{user}/repos`.
///
/// Only the fields the list needs are decoded; the rest of the payload is
/// ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Repository {
    pub name: String,
    pub html_url: String,
}

impl Repository {
    pub fn new(name: impl Into<String>, html_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            html_url: html_url.into(),
        }
    }
}
