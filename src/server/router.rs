//! HTTP and WebSocket routing configuration.
//!
//! The game is reached through a single WebSocket endpoint.

use actix_web::web;
use crate::config::server::WS_PATH;
use crate::server::game_session::session::ws_game;

/// Configure the application's HTTP/WebSocket routes.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource(WS_PATH)
            .to(ws_game)
    );
}
