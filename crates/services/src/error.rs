//! Shared error types for the services crate.

use std::fmt;

use thiserror::Error;

/// Coarse classification of a remote failure, used for logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// No usable response: transport failure, timeout or non-success status.
    Network,
    /// A response arrived but did not decode into the expected shape.
    Protocol,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network => f.write_str("network"),
            Self::Protocol => f.write_str("protocol"),
        }
    }
}

/// Errors emitted by `RevisionApi` implementations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RemoteError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("request timed out")]
    Timeout,
    #[error("request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error("unexpected response: {0}")]
    Protocol(String),
}

impl RemoteError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Transport(_) | Self::Timeout | Self::HttpStatus(_) => ErrorKind::Network,
            Self::Protocol(_) => ErrorKind::Protocol,
        }
    }
}

impl From<reqwest::Error> for RemoteError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_decode() {
            Self::Protocol(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for RemoteError {
    fn from(err: serde_json::Error) -> Self {
        Self::Protocol(err.to_string())
    }
}

/// Errors emitted while building the remote client configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("remote service address is empty")]
    EmptyBaseUrl,
    #[error("invalid remote service address {raw}: {source}")]
    InvalidBaseUrl {
        raw: String,
        #[source]
        source: url::ParseError,
    },
    #[error("remote service address must be http or https, got {0}")]
    UnsupportedScheme(String),
    #[error(transparent)]
    Client(#[from] reqwest::Error),
}
