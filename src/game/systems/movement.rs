//! Piece movement system.
//!
//! This module computes where a piece lands for a given direction token.
//! It never rejects a move: each axis is clamped to the board, and a token
//! the piece does not understand leaves it on its own cell.

use crate::config::game::{GRID_SIZE, HERO_STEP, PAWN_STEP};
use crate::game::types::{Direction, PieceKind, Player, Position};

/// Compute the candidate target for `kind` owned by `owner` standing on `from`.
pub fn target_position(from: Position, owner: Player, kind: PieceKind, direction: &Direction) -> Position {
    let (d_row, d_col) = step_vector(owner, kind, direction);
    Position::new(clamp_axis(from.row, d_row), clamp_axis(from.col, d_col))
}

/// Signed (row, col) displacement before clamping.
fn step_vector(owner: Player, kind: PieceKind, direction: &Direction) -> (isize, isize) {
    let fwd = owner.forward();
    match kind {
        PieceKind::Pawn1 | PieceKind::Pawn2 | PieceKind::Pawn3 => orthogonal(direction, fwd, PAWN_STEP as isize),
        PieceKind::Hero1 => orthogonal(direction, fwd, HERO_STEP as isize),
        PieceKind::Hero2 => {
            let n = HERO_STEP as isize;
            match direction {
                Direction::ForwardLeft => (fwd * n, -n),
                Direction::ForwardRight => (fwd * n, n),
                Direction::BackLeft => (-fwd * n, -n),
                Direction::BackRight => (-fwd * n, n),
                _ => (0, 0),
            }
        }
    }
}

fn orthogonal(direction: &Direction, fwd: isize, n: isize) -> (isize, isize) {
    match direction {
        Direction::Left => (0, -n),
        Direction::Right => (0, n),
        Direction::Forward => (fwd * n, 0),
        Direction::Back => (-fwd * n, 0),
        _ => (0, 0),
    }
}

fn clamp_axis(value: usize, delta: isize) -> usize {
    (value as isize + delta).clamp(0, GRID_SIZE as isize - 1) as usize
}
