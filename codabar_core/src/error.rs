//! Error types for the codabar_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for codabar_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input rejected by a validating constructor, seed generator or lookup.
    /// Carries the rejected input verbatim.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    pub(crate) fn invalid(value: impl Into<String>) -> Self {
        Error::InvalidArgument(value.into())
    }

    /// The rejected input, if this is a validation failure
    pub fn invalid_input(&self) -> Option<&str> {
        match self {
            Error::InvalidArgument(value) => Some(value),
            _ => None,
        }
    }
}
