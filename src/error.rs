use thiserror::Error;

use crate::models::{ErrorKind, ResourceKind};

/// Failure talking to the remote API
#[derive(Error, Debug)]
pub enum RemoteError {
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP {0}")]
    Status(u16),

    #[error("request timed out")]
    Timeout,

    #[error("could not decode payload: {0}")]
    Decode(String),

    #[error("invalid payload: {0}")]
    Invalid(String),

    #[error("a session token is required to write")]
    NoSession,

    #[error("{0} does not accept writes")]
    ReadOnly(ResourceKind),
}

impl RemoteError {
    /// Map to the error kind recorded in a resolution envelope
    pub fn kind(&self) -> ErrorKind {
        match self {
            RemoteError::Decode(_) | RemoteError::Invalid(_) => ErrorKind::MalformedResponse,
            RemoteError::Transport(_)
            | RemoteError::Status(_)
            | RemoteError::Timeout
            | RemoteError::NoSession
            | RemoteError::ReadOnly(_) => ErrorKind::RemoteUnavailable,
        }
    }
}

/// Failure persisting the session store
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
