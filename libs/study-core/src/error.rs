//! Error types for study-core.

use thiserror::Error;

/// Result type alias using DeckError.
pub type Result<T> = std::result::Result<T, DeckError>;

/// Errors that can occur while building or editing a deck.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckError {
    #[error("question must not be empty")]
    EmptyQuestion,

    #[error("answer must not be empty")]
    EmptyAnswer,

    #[error("duplicate card ID {id}")]
    DuplicateId { id: i64 },
}

/// Errors raised by the playback simulation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlaybackError {
    #[error("unsupported playback speed {0}x")]
    UnsupportedSpeed(f64),
}
