//! File logging.
//!
//! The UI owns stdout and stderr is hidden behind the alternate screen, so
//! logs only go to a file, and only when one is requested.

use crate::config::LOG_ENV;
use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Filter used when the environment variable is unset or invalid.
pub const DEFAULT_FILTER: &str = "info";

/// Build the filter from `SHELLCFG_LOG`, falling back to `info`.
#[must_use]
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install a global fmt subscriber writing plain text to `path`.
///
/// The file is created or truncated. Installing twice is not an error; the
/// first subscriber stays in place.
pub fn init_file_logging(path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .is_ok();
    if installed {
        tracing::info!(path = %path.display(), "logging initialized");
    }
    Ok(())
}
