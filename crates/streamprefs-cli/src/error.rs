use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] streamprefs_core::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("No host selected. Add one with `streamprefs hosts add` and run `streamprefs select`.")]
    NoHostSelected,
    #[error("Host id cannot be empty")]
    EmptyHostId,
    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
    #[error("Configuration error: {0}")]
    Config(String),
}
