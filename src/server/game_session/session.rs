/// WebSocket session handler for the game.
///
/// One actor per connected client. It registers with the game server when it
/// starts, forwards parsed move requests, and writes every `ServerMessage` it
/// receives back to the socket as a JSON text frame. Frames that do not parse
/// are answered directly with a `MALFORMED_MESSAGE` error.
use actix::prelude::*;
use actix_web::{Error, HttpRequest, HttpResponse, web};
use actix_web_actors::ws;
use log::{debug, warn};
use uuid::Uuid;

use crate::server::game_session::messages::{
    ClientMessage, Connect, Disconnect, ServerMessage, SubmitMove, parse_client_message,
};
use crate::server::game_session::server::GameServer;
use crate::server::ws_error::ws_error_message;

pub struct WsSession {
    pub id: Uuid,
    pub server_addr: Addr<GameServer>,
}

impl WsSession {
    pub fn new(server_addr: Addr<GameServer>) -> Self {
        Self {
            id: Uuid::new_v4(),
            server_addr,
        }
    }

    fn handle_text(&mut self, text: &str, ctx: &mut ws::WebsocketContext<Self>) {
        match parse_client_message(text) {
            Ok(ClientMessage::Move { player, character, direction }) => {
                debug!("[WsSession] {} submits {}-{} {}", self.id, player, character, direction);
                self.server_addr.do_send(SubmitMove {
                    id: self.id,
                    player,
                    character,
                    direction,
                });
            }
            Err(err) => {
                warn!("[WsSession] {} sent an invalid frame: {}", self.id, err);
                ctx.text(ws_error_message(&err).to_json());
            }
        }
    }
}

impl Actor for WsSession {
    type Context = ws::WebsocketContext<Self>;

    /// Registers the connection; the server answers with the current state.
    fn started(&mut self, ctx: &mut Self::Context) {
        self.server_addr.do_send(Connect {
            id: self.id,
            addr: ctx.address().recipient(),
        });
    }

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        self.server_addr.do_send(Disconnect { id: self.id });
    }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for WsSession {
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Text(text)) => self.handle_text(&text, ctx),
            Ok(ws::Message::Ping(msg)) => ctx.pong(&msg),
            Ok(ws::Message::Close(reason)) => {
                ctx.close(reason);
                ctx.stop();
            }
            Ok(_) => (),
            Err(e) => {
                warn!("[WsSession] {} protocol error: {}", self.id, e);
                ctx.stop();
            }
        }
    }
}

impl Handler<ServerMessage> for WsSession {
    type Result = ();

    fn handle(&mut self, msg: ServerMessage, ctx: &mut Self::Context) {
        ctx.text(msg.to_json());
    }
}

/// WebSocket endpoint for the game. Every connection gets a fresh id and no
/// player binding: any client may submit moves for either side.
pub async fn ws_game(
    req: HttpRequest,
    stream: web::Payload,
    data: web::Data<crate::server::state::AppState>,
) -> Result<HttpResponse, Error> {
    ws::start(WsSession::new(data.game_server.clone()), &req, stream)
}
