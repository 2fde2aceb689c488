//! Error types shared across the crate.
use crate::models::SessionState;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SrsError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Corrupt stored value for '{key}': {reason}")]
    CorruptState { key: String, reason: String },

    #[error("Item not found: {0}")]
    ItemNotFound(String),

    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Misuse of a study session by its driver.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    #[error("session is not in progress (state: {0:?})")]
    NotInProgress(SessionState),

    #[error("a session is already in progress")]
    AlreadyInProgress,
}

pub type Result<T> = std::result::Result<T, SrsError>;
