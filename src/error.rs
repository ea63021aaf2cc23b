//! Error types for the form extraction library.
//!
//! This module defines all error types that can occur during file encoding
//! and record export. The synchronous extraction path performs no I/O and
//! has no error cases of its own.

/// Result type alias for form extraction operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during form data processing.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A file attached to a form control could not be read
    #[error("Failed to read file '{name}': {source}")]
    FileRead {
        /// File name of the unreadable file
        name: String,
        /// Underlying read error
        source: std::io::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),
}
