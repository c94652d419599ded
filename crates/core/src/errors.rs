//! Core error types for the net worth pipeline.
//!
//! Pipeline stages are pure and mostly infallible. Errors here cover caller
//! input that cannot be interpreted, refused exports and fetch failures
//! surfaced by the snapshot adapter.

use chrono::ParseError as ChronoParseError;
use thiserror::Error;

use crate::snapshots::FetchError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the net worth pipeline.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// The export was refused; the message is meant to be shown to the user as-is.
    #[error("{0}")]
    ExportRefused(String),

    #[error("Export failed: {0}")]
    Export(String),

    #[error("Failed to fetch snapshots: {0}")]
    Fetch(#[from] FetchError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Validation errors for caller-supplied selections and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unknown timeframe '{0}'")]
    UnknownTimeframe(String),

    #[error("Unknown view mode '{0}'")]
    UnknownViewMode(String),

    #[error("Failed to parse date/time: {0}")]
    DateTimeParse(#[from] ChronoParseError),
}

// === From implementations for common error types ===

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Export(err.to_string())
    }
}

impl From<std::string::FromUtf8Error> for Error {
    fn from(err: std::string::FromUtf8Error) -> Self {
        Error::Export(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(ValidationError::InvalidInput(err.to_string()))
    }
}

impl From<ChronoParseError> for Error {
    fn from(err: ChronoParseError) -> Self {
        Error::Validation(ValidationError::DateTimeParse(err))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
