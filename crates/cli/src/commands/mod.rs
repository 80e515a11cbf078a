//! CLI command implementations.
//!
//! Commands write to the given output so they can be tested without
//! capturing stdout.

pub mod catalog;
pub mod i18n;

use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Unknown category or language argument.
    #[error("{0}")]
    InvalidArgument(String),

    /// JSON encoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing the output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
