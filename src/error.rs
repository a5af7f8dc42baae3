//! Custom error types for research-wrapped.
//!
//! Every fallible operation in the library returns `Result<T, WrappedError>`.
//! The controller converts these into user-facing messages; nothing is retried.

use thiserror::Error;

/// Main error type for research-wrapped operations.
#[derive(Debug, Error)]
pub enum WrappedError {
    /// Missing or unusable user input, caught before any request is made
    #[error("Validation error: {0}")]
    Validation(String),

    /// Backend answered with a non-2xx status
    #[error("API error: {status} - {body}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body, verbatim
        body: String,
    },

    /// Backend answered 2xx but reported an `error` field
    #[error("Backend error: {0}")]
    Backend(String),

    /// Response body was not the expected JSON shape
    #[error("Parse error: {0}")]
    Parse(String),

    /// Request could not complete
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Canvas or PNG encoding failure
    #[error("Render error: {0}")]
    Render(String),

    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error (fonts, output paths)
    #[error("Config error: {0}")]
    Config(String),
}

/// Result type alias using `WrappedError`
pub type Result<T> = std::result::Result<T, WrappedError>;

impl WrappedError {
    /// True for errors raised locally before reaching the network.
    pub fn is_validation(&self) -> bool {
        matches!(self, WrappedError::Validation(_))
    }
}
