// src/server/mod.rs

//! Server layer root module.
//!
//! This module organizes the backend server components:
//! - Application state shared with HTTP handlers
//! - HTTP/WebSocket routing
//! - Game session orchestration (authoritative state, per-connection sessions)
//! - Error envelopes for rejected client requests

pub mod state;
pub mod router;
pub mod game_session;
pub mod ws_error;
