use tracing::debug;

use super::PlatformError;

/// Hand `url` to the desktop's default URL handler.
pub fn open_in_browser(url: &str) -> Result<(), PlatformError> {
    debug!(url, "Opening in browser");
    open::that(url).map_err(|source| PlatformError::Browser {
        url: url.to_string(),
        source,
    })
}
