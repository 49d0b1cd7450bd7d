//! Error types for FsGate.

use thiserror::Error;

/// Result type alias for FsGate operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for FsGate.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The output buffer cannot hold the requested record
    #[error("output buffer too small")]
    BufferTooSmall,

    /// Feature or record kind not supported by this bridge
    #[error("not implemented: {0}")]
    NotImplemented(String),

    /// Malformed request or failed provider call
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Wire protocol errors
    #[error("protocol error: {0}")]
    Protocol(String),

    /// Not found errors
    #[error("not found: {0}")]
    NotFound(String),

    /// Internal errors
    #[error("internal error: {0}")]
    Internal(String),

    /// Other errors
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Protocol(e.to_string())
    }
}
