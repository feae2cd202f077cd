//! Error types for streamprefs-core

use thiserror::Error;

/// Result type alias using streamprefs-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in streamprefs-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Stored payload is not valid base64
    #[error("Encoding error: {0}")]
    Encoding(#[from] base64::DecodeError),

    /// Host id not present in the host directory
    #[error("Unknown host: {0}")]
    UnknownHost(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
