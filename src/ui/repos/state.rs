use crate::github::Repository;
use crate::ui::mvi::UiState;

/// Message shown when the user exists but has no repositories.
///
/// Rendered through the same label as the error messages.
pub const EMPTY_MESSAGE: &str = "This user has no public repositories.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfirmLabel {
    #[default]
    Confirm,
    Saving,
    Saved,
}

impl ConfirmLabel {
    pub fn text(&self) -> &'static str {
        match self {
            Self::Confirm => "Confirm",
            Self::Saving => "Saving…",
            Self::Saved => "Saved",
        }
    }
}

/// Confirm button. Enabled only while it reads "Confirm".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmButton {
    pub label: ConfirmLabel,
    pub enabled: bool,
}

impl ConfirmButton {
    pub fn ready() -> Self {
        Self {
            label: ConfirmLabel::Confirm,
            enabled: true,
        }
    }

    pub fn saving() -> Self {
        Self {
            label: ConfirmLabel::Saving,
            enabled: false,
        }
    }

    pub fn saved() -> Self {
        Self {
            label: ConfirmLabel::Saved,
            enabled: false,
        }
    }
}

impl Default for ConfirmButton {
    fn default() -> Self {
        Self::ready()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorMessage {
    NotFound,
    Generic,
}

impl ErrorMessage {
    pub fn text(&self) -> &'static str {
        match self {
            Self::NotFound => "User not found on GitHub.",
            Self::Generic => "Could not load repositories.",
        }
    }
}

/// Body of the screen. Exactly one of progress, list or message shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ListView {
    /// Nothing requested yet.
    #[default]
    Idle,
    Loading,
    Loaded {
        repos: Vec<Repository>,
        selected: usize,
    },
    Empty,
    Error(ErrorMessage),
}

impl ListView {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Rows currently listed; empty unless `Loaded`.
    pub fn repositories(&self) -> &[Repository] {
        match self {
            Self::Loaded { repos, .. } => repos,
            _ => &[],
        }
    }

    pub fn selected(&self) -> Option<usize> {
        match self {
            Self::Loaded { selected, .. } => Some(*selected),
            _ => None,
        }
    }

    /// Text for the message label, if this view shows it.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::Empty => Some(EMPTY_MESSAGE),
            Self::Error(message) => Some(message.text()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Input,
    List,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// One-line status shown in the footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RepoScreenState {
    /// Contents of the username field.
    pub input: String,
    pub confirm: ConfirmButton,
    pub view: ListView,
    pub focus: Focus,
    /// Username as last read from or written to the store.
    pub saved_user: String,
    /// Id of the most recent fetch. Completions with any other id are stale.
    pub latest_request: u64,
    pub notice: Option<Notice>,
}

impl UiState for RepoScreenState {}
