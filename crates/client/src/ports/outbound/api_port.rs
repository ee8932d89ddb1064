//! Transport-level errors shared by the HTTP adapters

use thiserror::Error;

/// Errors returned by `RawApiPort` implementations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Request could not be sent or the connection failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Server answered with a non-success status
    #[error("HTTP error {status}: {message}")]
    HttpStatus { status: u16, message: String },

    /// Body was not valid JSON, or did not match the expected shape
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Local file could not be read (desktop static data)
    #[error("I/O error: {0}")]
    Io(String),
}
