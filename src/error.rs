//! Error types for the smoke-test client and fixture tools

use thiserror::Error;

/// Result type alias for renderprobe operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while probing the rendering API
#[derive(Error, Debug)]
pub enum Error {
    /// The local fixture file is missing or malformed
    #[error("Fixture error: {0}")]
    Fixture(String),

    /// Could not reach the API server
    #[error("Connection error: {0}")]
    Connection(String),

    /// A request did not complete within the configured timeout
    #[error("Operation timed out after {0}ms")]
    Timeout(u64),

    /// The API answered with a non-200 status
    #[error("API error: status {status}: {body}")]
    Status { status: u16, body: String },

    /// The API answered 200 but the body was not valid response JSON
    #[error("Failed to parse API response: {0}")]
    MalformedResponse(String),

    /// The API reported a render failure (`success: false`)
    #[error("Rendering failed: {0}")]
    Render(String),

    /// Base64 image payload could not be decoded
    #[error("Image decode failed: {0}")]
    Decode(String),

    /// File read/write error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Fixture(format!("Invalid JSON: {}", err))
    }
}
