/*!
 * Error types for the subtext application.
 *
 * This module contains custom error types for the conversion pipeline and the
 * file workflow around it, using the thiserror crate for ergonomic error definitions.
 */

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during subtitle processing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubtitleError {
    /// No sniffing rule matched the document
    #[error("Unable to determine subtitle format")]
    UnrecognizedFormat,

    /// A `Dialogue:` record did not fit the expected field layout
    #[error("Malformed dialogue record at line {line}: {reason}")]
    MalformedField {
        /// 1-based line number in the source document
        line: usize,
        /// What was wrong with the record
        reason: String,
    },

    /// A junk pattern could not be compiled
    #[error("Invalid junk pattern '{pattern}': {reason}")]
    InvalidPattern {
        pattern: String,
        reason: String,
    },
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Input missing or output not writable
    #[error("Resource unavailable: {path:?} ({reason})")]
    ResourceUnavailable {
        path: PathBuf,
        reason: String,
    },

    /// Output file exists and overwriting was not allowed
    #[error("Output file already exists: {0:?} (use -o to overwrite)")]
    OutputExists(PathBuf),

    /// Character encoding problem
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Error from subtitle processing
    #[error("Subtitle error: {0}")]
    Subtitle(#[from] SubtitleError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl AppError {
    /// Build a `ResourceUnavailable` from a path and an I/O error
    pub fn unavailable<P: Into<PathBuf>>(path: P, error: &std::io::Error) -> Self {
        Self::ResourceUnavailable {
            path: path.into(),
            reason: error.to_string(),
        }
    }
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        match error.downcast::<AppError>() {
            Ok(app_error) => app_error,
            Err(other) => Self::Unknown(other.to_string()),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::ResourceUnavailable {
            path: PathBuf::new(),
            reason: error.to_string(),
        }
    }
}
