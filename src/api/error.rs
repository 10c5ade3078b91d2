use thiserror::Error;

use crate::backgammon::SnapshotError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("invalid server address: {0}")]
    Address(#[from] url::ParseError),
    #[error("unreadable response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("malformed game state: {0}")]
    Malformed(#[from] SnapshotError),
    #[error("game not found")]
    GameNotFound,
    /// The service understood the request and refused it.
    #[error("{0}")]
    Rejected(String),
    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },
}

impl ApiError {
    /// Maps a non-success status and the service's error message.
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            404 => ApiError::GameNotFound,
            400 => ApiError::Rejected(message),
            status => ApiError::Server { status, message },
        }
    }
}
