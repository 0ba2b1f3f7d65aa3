//! Error types for the game core
//!
//! Gameplay itself has no recoverable errors: bad swipes and unknown contacts
//! are ignored. What remains is configuration and lifecycle misuse.

use thiserror::Error;

/// Errors surfaced by the session and its host boundaries
#[derive(Error, Debug)]
pub enum GameError {
    #[error("required scene body '{0}' not found")]
    MissingBody(&'static str),

    #[error("game session is not initialized")]
    NotInitialized,

    #[error("game session is already initialized")]
    AlreadyInitialized,

    #[error("persistence error: {0}")]
    Persistence(String),

    #[error("invalid tuning: {0}")]
    Tuning(String),
}

impl From<std::io::Error> for GameError {
    fn from(err: std::io::Error) -> Self {
        GameError::Persistence(err.to_string())
    }
}
