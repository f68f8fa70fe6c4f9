//! Diagnostic log sink
//!
//! Events are emitted with the `tracing` macros throughout the crate. This
//! module opens the append-only log file and installs a `tracing_subscriber`
//! formatter that writes to it for as long as the returned [`LogGuard`] lives.

use crate::types::AtmError;
use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::EnvFilter;

/// Default diagnostic log path
pub const DEFAULT_LOG_FILE: &str = "atm.log";

/// Default log filter directive
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Keeps the log subscriber installed
///
/// Dropping the guard uninstalls the subscriber and closes the file.
#[must_use = "logging stops when the guard is dropped"]
pub struct LogGuard {
    _default: DefaultGuard,
}

/// Open `path` for appending and route diagnostic events to it
///
/// An unparseable `filter` falls back to [`DEFAULT_LOG_LEVEL`].
///
/// # Errors
///
/// Returns `AtmError::LogSink` if the file cannot be opened.
pub fn init(path: &Path, filter: &str) -> Result<LogGuard, AtmError> {
    let file = open_append(path)?;

    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));
    let subscriber = tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(filter)
        .finish();

    Ok(LogGuard {
        _default: tracing::subscriber::set_default(subscriber),
    })
}

fn open_append(path: &Path) -> Result<File, AtmError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| AtmError::LogSink {
            path: path.display().to_string(),
            message: e.to_string(),
        })
}
