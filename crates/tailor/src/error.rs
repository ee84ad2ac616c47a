//! Error types for the Tailor library.
//!
//! The generation pipeline itself never fails; these errors belong to the
//! input boundary (posting validation, profile loading) and configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Tailor operations.
#[derive(Debug, Error)]
pub enum TailorError {
    /// Error reading a profile or posting file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Job posting is shorter than the accepted minimum after trimming.
    #[error("Job description must be at least {min} characters long (got {length})")]
    PostingTooShort { length: usize, min: usize },

    /// Job posting is longer than the accepted maximum after trimming.
    #[error("Job description must not exceed {max} characters (got {length})")]
    PostingTooLong { length: usize, max: usize },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TailorError {
    /// Whether this error was caused by caller-supplied input.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            TailorError::PostingTooShort { .. }
                | TailorError::PostingTooLong { .. }
                | TailorError::Json(_)
        )
    }
}

/// Result type alias for Tailor operations.
pub type Result<T> = std::result::Result<T, TailorError>;
