//! Error types for waitup operations.
//!
//! This module defines [`WaitupError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Configuration problems are detected before any probe is sent and are fatal
//! - A failed probe attempt is never an error: the poll loop logs it and retries
//! - Only [`WaitupError::TimedOut`] is produced once polling has started

use std::time::Duration;
use thiserror::Error;

/// Exit code for a target that never became ready.
pub const EXIT_TIMED_OUT: i32 = 1;

/// Exit code for invalid input (matches clap's usage error code).
pub const EXIT_CONFIG_ERROR: i32 = 2;

/// Core error type for waitup operations.
#[derive(Debug, Error)]
pub enum WaitupError {
    /// The target address is not an absolute http(s) URL.
    #[error("Invalid address '{address}': {message}")]
    InvalidAddress { address: String, message: String },

    /// The expected body pattern is not a valid regular expression.
    #[error("Invalid body pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// Invalid configuration values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// The overall deadline elapsed before the target became ready.
    #[error("Timed out after {elapsed:?} ({attempts} attempts)")]
    TimedOut { elapsed: Duration, attempts: u32 },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl WaitupError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            WaitupError::TimedOut { .. } => EXIT_TIMED_OUT,
            WaitupError::InvalidAddress { .. }
            | WaitupError::InvalidPattern { .. }
            | WaitupError::ConfigValidationError { .. } => EXIT_CONFIG_ERROR,
            WaitupError::Io(_) | WaitupError::Other(_) => 1,
        }
    }

    /// Whether this is the terminal timeout condition.
    pub fn is_timeout(&self) -> bool {
        matches!(self, WaitupError::TimedOut { .. })
    }
}

/// Result type alias for waitup operations.
pub type Result<T> = std::result::Result<T, WaitupError>;
