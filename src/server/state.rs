// src/server/state.rs

//! Application state for the backend server.
//!
//! Holds the address of the game server actor, shared between HTTP/WebSocket
//! handlers and the actor system.

use actix::Addr;
use crate::server::game_session::server::GameServer;

/// Shared application state, injected into HTTP/WebSocket handlers.
pub struct AppState {
    /// Address of the game server actor (owns the game and the connection registry).
    pub game_server: Addr<GameServer>,
}

impl AppState {
    pub fn new(game_server: Addr<GameServer>) -> Self {
        AppState { game_server }
    }
}
