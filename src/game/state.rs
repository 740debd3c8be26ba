use log::debug;
use serde::{Deserialize, Serialize};

use crate::game::error::GameError;
use crate::game::grid::Grid;
use crate::game::systems::{capture_in_path, evaluate_winner, target_position};
use crate::game::types::{Direction, MoveRecord, Piece, PieceKind, Player};

/// Lifecycle of the single game: in progress until a winner is set, then frozen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    InProgress { turn: Player },
    Finished { winner: Player },
}

/// The authoritative game record, serialized as-is in every state broadcast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub grid: Grid,
    pub turn: Player,
    pub winner: Option<Player>,
    pub moves: Vec<MoveRecord>,
}

impl GameState {
    // Opening position, player A to move.
    pub fn new() -> Self {
        Self::from_grid(Grid::starting(), Player::A)
    }

    /// Start from an arbitrary position. Used for setting up scenarios.
    pub fn from_grid(grid: Grid, turn: Player) -> Self {
        GameState {
            grid,
            turn,
            winner: None,
            moves: Vec::new(),
        }
    }

    pub fn phase(&self) -> GamePhase {
        match self.winner {
            Some(winner) => GamePhase::Finished { winner },
            None => GamePhase::InProgress { turn: self.turn },
        }
    }

    /// Validate and apply one move.
    ///
    /// On error the state is left exactly as it was.
    pub fn apply_move(
        &mut self,
        player: Player,
        kind: PieceKind,
        direction: Direction,
    ) -> Result<MoveRecord, GameError> {
        if self.winner.is_some() {
            return Err(GameError::GameOver);
        }
        if player != self.turn {
            return Err(GameError::NotYourTurn);
        }

        let piece = Piece::new(player, kind);
        let from = self.grid.find_position(piece).ok_or(GameError::PieceNotFound)?;
        let to = target_position(from, player, kind, &direction);

        // Also catches zero-distance moves: the source holds the mover's own piece.
        if let Some(occupant) = self.grid.piece_at(to) {
            if occupant.owner == player {
                return Err(GameError::FriendlyOccupied(occupant));
            }
        }

        let mut captured = if kind.is_hero() {
            capture_in_path(&mut self.grid, from, to, player)
        } else {
            Vec::new()
        };
        if let Some(landed_on) = self.grid.piece_at(to) {
            captured.push(landed_on);
        }

        self.grid.place(from, None);
        self.grid.place(to, Some(piece));

        self.winner = evaluate_winner(&self.grid);
        if self.winner.is_none() {
            self.turn = self.turn.opponent();
        }

        let record = MoveRecord {
            player,
            character: kind,
            direction,
            from,
            to,
            captured,
        };
        debug!("[GameState] {} {} {} {} -> {} captured={:?}", player, kind, record.direction, from, to, record.captured);
        self.moves.push(record.clone());
        Ok(record)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
