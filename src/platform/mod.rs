//! Hand-offs to the host desktop: "share" copies a URL to the clipboard,
//! "open" launches the default browser.

mod browser;
mod clipboard;

pub use browser::open_in_browser;
pub use clipboard::ClipboardHandler;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("Clipboard unavailable: {0}")]
    Clipboard(#[from] arboard::Error),

    #[error("Failed to open '{url}' in browser: {source}")]
    Browser {
        url: String,
        #[source]
        source: std::io::Error,
    },
}

/// Share and open collaborators used by the repository list.
pub trait Platform: Send {
    fn share(&mut self, url: &str) -> Result<(), PlatformError>;
    fn open(&mut self, url: &str) -> Result<(), PlatformError>;
}

/// Real desktop implementation.
///
/// The clipboard is opened on first use so a missing display only fails the
/// share action, not startup.
#[derive(Default)]
pub struct DesktopPlatform {
    clipboard: Option<ClipboardHandler>,
}

impl DesktopPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    fn clipboard(&mut self) -> Result<&mut ClipboardHandler, PlatformError> {
        let handler = match self.clipboard.take() {
            Some(handler) => handler,
            None => ClipboardHandler::new()?,
        };
        Ok(self.clipboard.insert(handler))
    }
}

impl Platform for DesktopPlatform {
    fn share(&mut self, url: &str) -> Result<(), PlatformError> {
        self.clipboard()?.set_text(url)
    }

    fn open(&mut self, url: &str) -> Result<(), PlatformError> {
        open_in_browser(url)
    }
}
