//! Tracing subscriber initialization.
//!
//! The demo owns the terminal, so logs go to a file instead of stdout.
//! Run `tail -f` on the log path in another terminal to watch measurement
//! decisions; they are emitted at `debug` level.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Error type for logging initialization failures.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Failed to create log directory
    #[error("Failed to create log directory at {path:?}: {source}")]
    DirectoryCreation {
        /// The directory path that failed to be created
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Log path has no usable file name
    #[error("Invalid log file path: {0:?}")]
    InvalidPath(PathBuf),

    /// Default log level is not a valid filter directive
    #[error("Invalid log level {level:?}: {reason}")]
    InvalidLevel {
        /// The rejected directive
        level: String,
        /// Parser message
        reason: String,
    },

    /// Tracing subscriber already initialized
    #[error("Tracing subscriber already initialized")]
    SubscriberAlreadySet,
}

/// Build the event filter.
///
/// `RUST_LOG` wins when set and valid; otherwise `default_level` is used.
pub fn build_filter(default_level: &str) -> Result<EnvFilter, LoggingError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(default_level).map_err(|e| LoggingError::InvalidLevel {
        level: default_level.to_string(),
        reason: e.to_string(),
    })
}

/// Initialize the tracing subscriber with file-based logging.
///
/// Creates the log directory if it doesn't exist. A bare file name is
/// written to the current directory.
///
/// # Errors
///
/// Fails if the directory cannot be created, the path has no file name,
/// the level is not a valid directive, or a subscriber is already installed.
pub fn init(log_path: &Path, default_level: &str) -> Result<(), LoggingError> {
    let file_name = log_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| LoggingError::InvalidPath(log_path.to_path_buf()))?;

    let directory = match log_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    std::fs::create_dir_all(directory).map_err(|source| LoggingError::DirectoryCreation {
        path: directory.to_path_buf(),
        source,
    })?;

    let env_filter = build_filter(default_level)?;
    let file_appender = tracing_appender::rolling::never(directory, file_name);

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(file_appender)
        .with_ansi(false)
        .try_init()
        .map_err(|_| LoggingError::SubscriberAlreadySet)
}
