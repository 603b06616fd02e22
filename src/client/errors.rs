//! # Client Errors

use thiserror::Error;

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Client errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// Connection failed or the request could not be sent
    #[error("{0}")]
    Transport(String),

    /// Server answered with a non-2xx status
    #[error("{message}")]
    Status { status: u16, message: String },

    /// Response body was not the expected JSON
    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ClientError::Decode(e.to_string())
        } else {
            ClientError::Transport(e.to_string())
        }
    }
}
