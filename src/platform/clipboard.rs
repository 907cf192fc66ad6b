use arboard::Clipboard;

use super::PlatformError;

/// Handler for clipboard writes.
pub struct ClipboardHandler {
    clipboard: Clipboard,
}

impl ClipboardHandler {
    pub fn new() -> Result<Self, PlatformError> {
        let clipboard = Clipboard::new()?;
        Ok(Self { clipboard })
    }

    /// Write text to the system clipboard.
    pub fn set_text(&mut self, text: &str) -> Result<(), PlatformError> {
        self.clipboard.set_text(text.to_string())?;
        Ok(())
    }
}
