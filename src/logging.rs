use std::fs::{self, OpenOptions};
use std::path::PathBuf;

use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Env var naming a log file when `--log-file` is not given.
pub const LOG_ENV: &str = "GHREPOS_LOG";

/// Resolve the log file: the explicit path if any, else `GHREPOS_LOG`.
pub fn log_path(explicit: Option<PathBuf>) -> Option<PathBuf> {
    explicit.or_else(|| {
        std::env::var_os(LOG_ENV)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
    })
}

/// Initialize tracing with file output.
///
/// The TUI owns stdout, so without a log file nothing is installed. The
/// filter comes from `RUST_LOG` and defaults to `info`.
pub fn init_tracing(log_file: Option<PathBuf>) {
    let Some(path) = log_path(log_file) else {
        return;
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        let _ = fs::create_dir_all(parent);
    }
    let file = match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!(
                "Warning: Failed to open log file '{}': {}",
                path.display(),
                err
            );
            return;
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_timer(UtcTime::rfc_3339())
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}
