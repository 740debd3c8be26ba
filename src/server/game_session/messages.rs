use actix::prelude::*;
use log::error;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::game::state::GameState;
use crate::game::types::{Direction, PieceKind, Player};
use crate::server::ws_error::{ClientError, SERIALIZATION_FAILED};

/// Client -> server frames.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ClientMessage {
    Move {
        player: Player,
        character: PieceKind,
        direction: Direction,
    },
}

/// Parse a text frame. Any JSON or shape error is a `Malformed` client error.
pub fn parse_client_message(text: &str) -> Result<ClientMessage, ClientError> {
    serde_json::from_str(text).map_err(|e| ClientError::Malformed(e.to_string()))
}

/// Server -> client frames, also delivered as actor messages to each session.
#[derive(Message, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[rtype(result = "()")]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ServerMessage {
    State { state: GameState },
    Error { code: String, message: String },
}

impl ServerMessage {
    pub fn to_json(&self) -> String {
        match serde_json::to_string(self) {
            Ok(text) => text,
            Err(e) => {
                error!("Failed to serialize ServerMessage: {}", e);
                SERIALIZATION_FAILED.to_string()
            }
        }
    }
}

/// A connection opened; the server replies with the current snapshot.
#[derive(Message)]
#[rtype(result = "()")]
pub struct Connect {
    pub id: Uuid,
    pub addr: Recipient<ServerMessage>,
}

#[derive(Message)]
#[rtype(result = "()")]
pub struct Disconnect {
    pub id: Uuid,
}

/// A move submitted through connection `id`.
#[derive(Message, Debug)]
#[rtype(result = "Result<(), ClientError>")]
pub struct SubmitMove {
    pub id: Uuid,
    pub player: Player,
    pub character: PieceKind,
    pub direction: Direction,
}

#[derive(Message)]
#[rtype(result = "GameState")]
pub struct GetState;
