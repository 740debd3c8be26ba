/// Error envelopes sent back to a single WebSocket client.
///
/// Every rejected request produces exactly one `{"type":"error",...}` frame with a
/// stable code, sent only to the connection that made the request.
use thiserror::Error;

use crate::game::error::GameError;
use crate::server::game_session::messages::ServerMessage;

/// Anything that makes the server refuse a client request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    #[error(transparent)]
    Game(#[from] GameError),

    #[error("Malformed message: {0}")]
    Malformed(String),
}

impl ClientError {
    pub fn code(&self) -> &'static str {
        match self {
            ClientError::Game(err) => err.code(),
            ClientError::Malformed(_) => "MALFORMED_MESSAGE",
        }
    }
}

/// Builds the error frame for `err`.
pub fn ws_error_message(err: &ClientError) -> ServerMessage {
    ServerMessage::Error {
        code: err.code().to_string(),
        message: err.to_string(),
    }
}

/// Sent verbatim when an outbound message cannot be serialized.
pub const SERIALIZATION_FAILED: &str =
    r#"{"type":"error","code":"INTERNAL","message":"Failed to serialize server message"}"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::{Piece, PieceKind, Player};

    #[test]
    fn test_error_codes_and_messages() {
        let err = ClientError::from(GameError::NotYourTurn);
        assert_eq!(err.code(), "NOT_YOUR_TURN");
        assert_eq!(err.to_string(), "Not your turn!");

        let err = ClientError::from(GameError::FriendlyOccupied(Piece::new(Player::A, PieceKind::Pawn2)));
        assert_eq!(err.code(), "FRIENDLY_OCCUPIED");
        assert_eq!(
            err.to_string(),
            "Cannot move to cell occupied by your own piece! Cell value: A-P2"
        );

        assert_eq!(ClientError::Malformed("eof".into()).code(), "MALFORMED_MESSAGE");
    }

    #[test]
    fn test_error_frame_json() {
        let frame = ws_error_message(&GameError::PieceNotFound.into()).to_json();
        let value: serde_json::Value = serde_json::from_str(&frame).unwrap();
        assert_eq!(value["type"], "error");
        assert_eq!(value["code"], "PIECE_NOT_FOUND");
        assert_eq!(value["message"], "Character not found!");
    }
}
