//! The game server actor.
//!
//! Owns the one and only `GameState` and the registry of open connections.
//! Actix processes one message at a time, so every move is validated, applied
//! and broadcast before the next request is looked at.

use actix::prelude::*;
use actix::MessageResult;
use log::{debug, info, warn};
use std::collections::HashMap;
use uuid::Uuid;

use crate::game::state::GameState;
use crate::server::game_session::messages::{Connect, Disconnect, GetState, ServerMessage, SubmitMove};
use crate::server::ws_error::{ClientError, ws_error_message};

pub struct GameServer {
    game_state: GameState,
    sessions: HashMap<Uuid, Recipient<ServerMessage>>,
}

impl GameServer {
    pub fn new() -> Self {
        Self::with_state(GameState::new())
    }

    pub fn with_state(game_state: GameState) -> Self {
        Self {
            game_state,
            sessions: HashMap::new(),
        }
    }

    fn state_message(&self) -> ServerMessage {
        ServerMessage::State {
            state: self.game_state.clone(),
        }
    }

    /// Send the full state to every registered connection.
    /// Recipients whose mailbox is already closed just drop it.
    pub fn broadcast_state(&self) {
        debug!(
            "[GameServer] Broadcast GameState: turn={} winner={:?} moves={} sessions={}",
            self.game_state.turn,
            self.game_state.winner,
            self.game_state.moves.len(),
            self.sessions.len()
        );
        let msg = self.state_message();
        for addr in self.sessions.values() {
            addr.do_send(msg.clone());
        }
    }

    fn send_to(&self, id: &Uuid, msg: ServerMessage) {
        match self.sessions.get(id) {
            Some(addr) => addr.do_send(msg),
            None => debug!("[GameServer] No open session {} for direct message", id),
        }
    }
}

impl Default for GameServer {
    fn default() -> Self {
        Self::new()
    }
}

impl Actor for GameServer {
    type Context = Context<Self>;

    fn started(&mut self, _ctx: &mut Self::Context) {
        info!("[GameServer] Started: {:?}", self.game_state.phase());
    }
}

impl Handler<Connect> for GameServer {
    type Result = ();

    fn handle(&mut self, msg: Connect, _: &mut Context<Self>) -> Self::Result {
        msg.addr.do_send(self.state_message());
        self.sessions.insert(msg.id, msg.addr);
        info!("[GameServer] Client connected: {} ({} open)", msg.id, self.sessions.len());
    }
}

impl Handler<Disconnect> for GameServer {
    type Result = ();

    fn handle(&mut self, msg: Disconnect, _: &mut Context<Self>) -> Self::Result {
        if self.sessions.remove(&msg.id).is_some() {
            info!("[GameServer] Client disconnected: {} ({} open)", msg.id, self.sessions.len());
        }
    }
}

impl Handler<SubmitMove> for GameServer {
    type Result = Result<(), ClientError>;

    fn handle(&mut self, msg: SubmitMove, _: &mut Context<Self>) -> Self::Result {
        match self.game_state.apply_move(msg.player, msg.character, msg.direction) {
            Ok(record) => {
                info!(
                    "[GameServer] {}-{} moved {} from {} to {} (captured {})",
                    record.player,
                    record.character,
                    record.direction,
                    record.from,
                    record.to,
                    record.captured.len()
                );
                if let Some(winner) = self.game_state.winner {
                    info!("[GameServer] Game over. Winner: {}", winner);
                }
                self.broadcast_state();
                Ok(())
            }
            Err(err) => {
                warn!("[GameServer] Rejected move from {}: {}", msg.id, err);
                let err = ClientError::from(err);
                self.send_to(&msg.id, ws_error_message(&err));
                Err(err)
            }
        }
    }
}

impl Handler<GetState> for GameServer {
    type Result = MessageResult<GetState>;

    fn handle(&mut self, _: GetState, _: &mut Context<Self>) -> Self::Result {
        MessageResult(self.game_state.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::error::GameError;
    use crate::game::types::{Direction, PieceKind, Player};

    /// Stands in for a WebSocket session and records everything it is sent.
    struct Probe {
        received: Vec<ServerMessage>,
    }

    impl Actor for Probe {
        type Context = Context<Self>;
    }

    impl Handler<ServerMessage> for Probe {
        type Result = ();

        fn handle(&mut self, msg: ServerMessage, _: &mut Context<Self>) {
            self.received.push(msg);
        }
    }

    #[derive(Message)]
    #[rtype(result = "Vec<ServerMessage>")]
    struct Drain;

    impl Handler<Drain> for Probe {
        type Result = MessageResult<Drain>;

        fn handle(&mut self, _: Drain, _: &mut Context<Self>) -> Self::Result {
            MessageResult(std::mem::take(&mut self.received))
        }
    }

    async fn connect(server: &Addr<GameServer>) -> (Uuid, Addr<Probe>) {
        let id = Uuid::new_v4();
        let probe = Probe { received: Vec::new() }.start();
        server
            .send(Connect { id, addr: probe.clone().recipient() })
            .await
            .unwrap();
        (id, probe)
    }

    fn submit(id: Uuid, player: Player, character: PieceKind, direction: &str) -> SubmitMove {
        SubmitMove {
            id,
            player,
            character,
            direction: Direction::from(direction),
        }
    }

    #[actix::test]
    async fn test_connect_receives_snapshot_only_for_itself() {
        let server = GameServer::new().start();
        let (_, first) = connect(&server).await;
        assert_eq!(first.send(Drain).await.unwrap().len(), 1);

        let (_, second) = connect(&server).await;
        let received = second.send(Drain).await.unwrap();
        assert_eq!(received, vec![ServerMessage::State { state: GameState::new() }]);
        assert!(first.send(Drain).await.unwrap().is_empty());
    }

    #[actix::test]
    async fn test_move_is_broadcast_to_everyone() {
        let server = GameServer::new().start();
        let (mover, a) = connect(&server).await;
        let (_, b) = connect(&server).await;
        a.send(Drain).await.unwrap();
        b.send(Drain).await.unwrap();

        server
            .send(submit(mover, Player::A, PieceKind::Pawn1, "F"))
            .await
            .unwrap()
            .unwrap();

        let expected = server.send(GetState).await.unwrap();
        assert_eq!(expected.turn, Player::B);
        for probe in [&a, &b] {
            let received = probe.send(Drain).await.unwrap();
            assert_eq!(received, vec![ServerMessage::State { state: expected.clone() }]);
        }
    }

    #[actix::test]
    async fn test_rejection_goes_to_requester_only() {
        let server = GameServer::new().start();
        let (offender, a) = connect(&server).await;
        let (_, b) = connect(&server).await;
        a.send(Drain).await.unwrap();
        b.send(Drain).await.unwrap();

        let result = server
            .send(submit(offender, Player::B, PieceKind::Pawn1, "F"))
            .await
            .unwrap();
        assert_eq!(result, Err(ClientError::Game(GameError::NotYourTurn)));

        assert_eq!(
            a.send(Drain).await.unwrap(),
            vec![ServerMessage::Error {
                code: "NOT_YOUR_TURN".to_string(),
                message: "Not your turn!".to_string(),
            }]
        );
        assert!(b.send(Drain).await.unwrap().is_empty());
        assert_eq!(server.send(GetState).await.unwrap(), GameState::new());
    }

    #[actix::test]
    async fn test_disconnected_session_is_skipped() {
        let server = GameServer::new().start();
        let (gone, a) = connect(&server).await;
        let (stays, b) = connect(&server).await;
        a.send(Drain).await.unwrap();
        b.send(Drain).await.unwrap();

        server.send(Disconnect { id: gone }).await.unwrap();
        server
            .send(submit(stays, Player::A, PieceKind::Hero1, "F"))
            .await
            .unwrap()
            .unwrap();

        assert!(a.send(Drain).await.unwrap().is_empty());
        assert_eq!(b.send(Drain).await.unwrap().len(), 1);
    }
}
