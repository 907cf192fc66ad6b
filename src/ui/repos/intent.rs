use crate::github::{FetchError, Repository};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEdit {
    Insert(char),
    Backspace,
    Clear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Share,
    Open,
}

/// Why a fetch failed, as far as the screen cares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchFailure {
    UserNotFound,
    /// Decode, network or unexpected status. `cause` is for the log only.
    Other { cause: String },
}

impl From<&FetchError> for FetchFailure {
    fn from(err: &FetchError) -> Self {
        if err.is_user_not_found() {
            Self::UserNotFound
        } else {
            Self::Other {
                cause: err.to_string(),
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RepoIntent {
    /// Screen shown. `stored_user` is whatever the username store returned.
    Activate { stored_user: String },

    /// Username field edited.
    Edit(InputEdit),

    /// Confirm button pressed.
    Confirm,

    /// Outcome of a `Persist` effect.
    Persisted {
        user: String,
        result: Result<(), String>,
    },

    /// Fetch the saved user's repositories again.
    Refresh,

    /// Outcome of a `Fetch` effect.
    FetchCompleted {
        request: u64,
        outcome: Result<Vec<Repository>, FetchFailure>,
    },

    SelectNext,
    SelectPrevious,
    SelectFirst,
    SelectLast,
    PageDown,
    PageUp,

    /// Move keyboard focus between the username field and the list.
    FocusNext,

    /// Share the URL of row `index`.
    Share { index: usize },

    /// Open the URL of row `index`.
    Open { index: usize },

    /// Outcome of a `Share` or `Open` effect.
    ActionFinished {
        action: RowAction,
        url: String,
        result: Result<(), String>,
    },
}

impl RepoIntent {
    /// Whether the intent comes straight from the user rather than from an
    /// effect outcome or activation.
    pub fn is_user_input(&self) -> bool {
        !matches!(
            self,
            Self::Activate { .. }
                | Self::Persisted { .. }
                | Self::FetchCompleted { .. }
                | Self::ActionFinished { .. }
        )
    }
}

impl Intent for RepoIntent {}
