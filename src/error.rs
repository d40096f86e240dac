use std::io;
use thiserror::Error;

/// Custom error type for richfetch
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Unable to determine user identity: {0}")]
    Identity(String),

    #[error("Unable to determine operating system: {0}")]
    OsIdentity(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Battery error: {0}")]
    Battery(#[from] battery::Error),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for richfetch
pub type Result<T> = std::result::Result<T, FetchError>;

impl FetchError {
    /// Create a user identity error
    pub fn identity<S: Into<String>>(msg: S) -> Self {
        FetchError::Identity(msg.into())
    }

    /// Create an OS identity error
    pub fn os_identity<S: Into<String>>(msg: S) -> Self {
        FetchError::OsIdentity(msg.into())
    }

    pub fn network<S: Into<String>>(msg: S) -> Self {
        FetchError::Network(msg.into())
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        FetchError::Other(msg.into())
    }
}
