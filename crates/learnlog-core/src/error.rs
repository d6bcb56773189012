//! Error types for learnlog.

use thiserror::Error;

/// Result type alias using learnlog's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for learnlog operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Database operation failed (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// A tag name could not be resolved to a tag id.
    ///
    /// Callers are expected to run `ensure_exist` before resolving, so this
    /// indicates a broken upsert sequence rather than bad client input.
    #[error("Tag not found: {0}")]
    TagNotFound(String),

    /// GitHub OAuth code exchange failed or returned a malformed response
    #[error("Token exchange failed: {0}")]
    TokenExchange(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// HTTP/network request failed
    #[error("Request error: {0}")]
    Request(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Request(e.to_string())
    }
}
