//! Main entry point for the backend server.
//!
//! Initializes logging, starts the game server actor that owns the single game,
//! and launches the HTTP server with the WebSocket endpoint.

use actix::Actor;
use actix_web::{App, HttpServer, web};
use log::info;
use server::game_session::server::GameServer;

use crate::config::server::{BIND_HOST, BIND_PORT, DEFAULT_LOG_FILTER};

pub mod config;
mod server;
mod game;


#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logger from environment variable (default to info level).
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER)).init();

    // Start the GameServer actor (owns the game state and every open connection).
    let game_server = GameServer::new().start();

    // Shared application state for HTTP/WebSocket handlers.
    let state = web::Data::new(server::state::AppState::new(game_server));

    info!("Server is listening on {}:{}", BIND_HOST, BIND_PORT);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(crate::server::router::config)
    })
    .bind((BIND_HOST, BIND_PORT))?
    .run()
    .await
}
