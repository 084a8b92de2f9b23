//! Error types for the game engine

use crate::board::Player;

/// Why a placement was refused
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidMoveReason {
    #[error("that cell is already occupied")]
    Occupied,

    #[error("position ({row}, {col}) is off the board")]
    OutOfBounds { row: i32, col: i32 },

    #[error("the game is over, restart to play again")]
    GameOver,

    #[error("it is {expected}'s turn")]
    WrongTurn { expected: Player },

    #[error("cannot read coordinates from {0:?}")]
    Malformed(String),
}

/// Errors surfaced by the game engine.
///
/// Every variant is recoverable: the game state is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("invalid move: {0}")]
    InvalidMove(#[from] InvalidMoveReason),
}

impl GameError {
    pub fn reason(&self) -> &InvalidMoveReason {
        match self {
            GameError::InvalidMove(reason) => reason,
        }
    }
}
