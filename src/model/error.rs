//! Error types for the scroll-when-needed application shell.
//!
//! The measurement core has no failure path: out-of-contract measurements are
//! clamped, never rejected. Every error in this module belongs to the impure
//! shell around it (configuration, logging, terminal).
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error returned from the binary's startup and run loop
//!   - [`ConfigError`] - Config file read or TOML parse failures
//!   - [`LoggingError`] - Tracing subscriber / log directory failures
//!   - `std::io::Error` - Terminal setup and rendering failures

use crate::config::ConfigError;
use crate::logging::LoggingError;
use thiserror::Error;

/// Top-level application error encompassing all shell failure modes.
///
/// Domain-specific errors convert into `AppError` via `From`, so startup code
/// can use `?` throughout.
///
/// # Examples
///
/// ```
/// use scroll_when_needed::config::ConfigError;
/// use scroll_when_needed::model::AppError;
///
/// let err: AppError = ConfigError::InvalidPath("\u{fffd}".to_string()).into();
/// assert!(err.to_string().starts_with("Configuration error"));
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// The config file exists but could not be read or parsed.
    ///
    /// **Recovery**: fatal. A broken config file is a user mistake that should
    /// be reported rather than silently replaced with defaults.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The tracing subscriber could not be installed.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// Terminal or TUI rendering error.
    ///
    /// **Recovery**: restore the terminal, then exit with the message on stderr.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}
