//! Capture-in-path resolution for heroes.
//!
//! A hero removes every opposing piece it passes over. Source and
//! destination cells are never touched here; a piece on the destination is
//! handled by the move itself.

use crate::game::grid::Grid;
use crate::game::types::{Piece, Player, Position};

/// Clear opposing pieces strictly between `from` and `to`, returning them in
/// path order. Pieces owned by `mover` are left where they are.
pub fn capture_in_path(grid: &mut Grid, from: Position, to: Position, mover: Player) -> Vec<Piece> {
    let mut captured = Vec::new();
    for pos in path_between(from, to) {
        if let Some(piece) = grid.piece_at(pos) {
            if piece.owner != mover {
                grid.place(pos, None);
                captured.push(piece);
            }
        }
    }
    captured
}

/// Cells strictly between `from` and `to`.
///
/// Each axis advances one cell per step until it reaches its own target, so a
/// diagonal whose column was clamped short still ends on `to`.
pub fn path_between(from: Position, to: Position) -> Vec<Position> {
    let mut cells = Vec::new();
    let mut cur = from;
    loop {
        cur = Position::new(approach(cur.row, to.row), approach(cur.col, to.col));
        if cur == to {
            break;
        }
        cells.push(cur);
    }
    cells
}

fn approach(value: usize, target: usize) -> usize {
    match value.cmp(&target) {
        std::cmp::Ordering::Less => value + 1,
        std::cmp::Ordering::Greater => value - 1,
        std::cmp::Ordering::Equal => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::PieceKind;

    #[test]
    fn test_path_excludes_endpoints() {
        assert_eq!(path_between(Position::new(0, 2), Position::new(2, 2)), vec![Position::new(1, 2)]);
        assert_eq!(path_between(Position::new(4, 1), Position::new(2, 3)), vec![Position::new(3, 2)]);
        assert!(path_between(Position::new(3, 3), Position::new(4, 3)).is_empty());
        assert!(path_between(Position::new(3, 3), Position::new(3, 3)).is_empty());
    }

    #[test]
    fn test_path_for_clamped_diagonal() {
        assert_eq!(path_between(Position::new(0, 3), Position::new(2, 4)), vec![Position::new(1, 4)]);
    }

    #[test]
    fn test_captures_only_opponents() {
        let mut grid = Grid::empty();
        let enemy = Piece::new(Player::B, PieceKind::Pawn1);
        grid.place(Position::new(1, 2), Some(enemy));

        let captured = capture_in_path(&mut grid, Position::new(0, 2), Position::new(2, 2), Player::A);
        assert_eq!(captured, vec![enemy]);
        assert_eq!(grid.piece_at(Position::new(1, 2)), None);
    }

    #[test]
    fn test_own_piece_on_path_survives() {
        let mut grid = Grid::empty();
        let friend = Piece::new(Player::A, PieceKind::Pawn2);
        grid.place(Position::new(1, 1), Some(friend));

        let captured = capture_in_path(&mut grid, Position::new(0, 0), Position::new(2, 2), Player::A);
        assert!(captured.is_empty());
        assert_eq!(grid.piece_at(Position::new(1, 1)), Some(friend));
    }

    #[test]
    fn test_destination_and_source_untouched() {
        let mut grid = Grid::empty();
        let hero = Piece::new(Player::B, PieceKind::Hero1);
        let target = Piece::new(Player::A, PieceKind::Pawn3);
        grid.place(Position::new(4, 0), Some(hero));
        grid.place(Position::new(2, 0), Some(target));

        let captured = capture_in_path(&mut grid, Position::new(4, 0), Position::new(2, 0), Player::B);
        assert!(captured.is_empty());
        assert_eq!(grid.piece_at(Position::new(4, 0)), Some(hero));
        assert_eq!(grid.piece_at(Position::new(2, 0)), Some(target));
    }
}
