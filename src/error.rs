//! Error types for scholarpubs.
//!
//! The fetch path has two error levels: [`FetchError`] for failures that abort
//! the whole live fetch (author search, author expansion), and [`ExpandError`]
//! for failures while expanding a single publication, which the caller skips.
//! [`PersistError`] covers the output write and is not recovered from.

use thiserror::Error;

/// Whole-fetch failure. Any of these aborts the live path; the caller falls
/// back to the embedded dataset.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network/HTTP request error
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// External API returned a non-success status
    #[error("API error: {code} - {message}")]
    Api {
        /// HTTP status code from the API
        code: i32,
        /// Error message from the API
        message: String,
    },

    /// Response body could not be decoded
    #[error("Parse error: {0}")]
    Parse(String),

    /// Author search returned no matches
    #[error("No author found for \"{0}\"")]
    AuthorNotFound(String),
}

/// Per-publication expansion failure. The entry is logged and skipped; the
/// fetch continues with the remaining entries.
#[derive(Debug, Error)]
pub enum ExpandError {
    /// Network/HTTP request error
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// External API returned a non-success status
    #[error("API error: {code} - {message}")]
    Api {
        /// HTTP status code from the API
        code: i32,
        /// Error message from the API
        message: String,
    },

    /// Response body could not be decoded
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Failure while writing the publications document.
#[derive(Debug, Error)]
pub enum PersistError {
    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for the fetch path
pub type Result<T> = std::result::Result<T, FetchError>;
