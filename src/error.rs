//! Error types for the engine.
//!
//! Game outcomes (an invalid move, a misplay) are not errors: they come back
//! as an `ActionResult`. `EngineError` covers rejected construction input and
//! broken internal invariants.

use thiserror::Error;

use crate::core::PlayerId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid player count: {0} (expected 2 to 5)")]
    InvalidPlayerCount(usize),

    #[error("Duplicate player id: {0}")]
    DuplicatePlayer(PlayerId),

    #[error("Player not found: {0}")]
    PlayerNotFound(PlayerId),

    #[error("{player} has no card at index {index}")]
    CardIndexOutOfRange { player: PlayerId, index: usize },

    #[error("Unknown color: {0}")]
    UnknownColor(String),

    #[error("Invalid hint value: {0}")]
    InvalidHintValue(String),

    #[error("Invalid game setup: {0}")]
    InvalidSetup(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
