use thiserror::Error;

use crate::game::types::Piece;

/// Reasons a move is rejected. None of them mutate the game.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("Game is over!")]
    GameOver,

    #[error("Not your turn!")]
    NotYourTurn,

    #[error("Character not found!")]
    PieceNotFound,

    #[error("Cannot move to cell occupied by your own piece! Cell value: {0}")]
    FriendlyOccupied(Piece),
}

impl GameError {
    /// Stable code sent alongside the message in error envelopes.
    pub fn code(&self) -> &'static str {
        match self {
            GameError::GameOver => "GAME_OVER",
            GameError::NotYourTurn => "NOT_YOUR_TURN",
            GameError::PieceNotFound => "PIECE_NOT_FOUND",
            GameError::FriendlyOccupied(_) => "FRIENDLY_OCCUPIED",
        }
    }
}
