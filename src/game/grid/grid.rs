//! The 5x5 board.
//!
//! Row 0 is player A's home row, the last row is player B's.
//! Pieces are only ever relocated or removed, never created after setup.

use serde::{Deserialize, Serialize};

use crate::config::game::GRID_SIZE;
use crate::game::types::{Cell, Piece, PieceKind, Player, Position};

const HOME_ROW_ORDER: [PieceKind; GRID_SIZE] = [
    PieceKind::Pawn1,
    PieceKind::Pawn2,
    PieceKind::Hero1,
    PieceKind::Hero2,
    PieceKind::Pawn3,
];

/// Serializes as a 5x5 array of `null` / `"<owner>-<kind>"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grid {
    cells: [[Cell; GRID_SIZE]; GRID_SIZE],
}

impl Grid {
    pub fn empty() -> Self {
        Self {
            cells: [[None; GRID_SIZE]; GRID_SIZE],
        }
    }

    /// Canonical opening layout: each side's five pieces on its home row.
    pub fn starting() -> Self {
        let mut grid = Self::empty();
        for (col, kind) in HOME_ROW_ORDER.iter().enumerate() {
            grid.place(Position::new(0, col), Some(Piece::new(Player::A, *kind)));
            grid.place(Position::new(GRID_SIZE - 1, col), Some(Piece::new(Player::B, *kind)));
        }
        grid
    }

    /// Panics if `pos` is off the board; callers only pass clamped positions.
    pub fn piece_at(&self, pos: Position) -> Cell {
        self.cells[pos.row][pos.col]
    }

    /// Linear scan for a piece identity. `None` once it has been captured.
    pub fn find_position(&self, piece: Piece) -> Option<Position> {
        self.cells.iter().enumerate().find_map(|(row, cells)| {
            cells
                .iter()
                .position(|cell| *cell == Some(piece))
                .map(|col| Position::new(row, col))
        })
    }

    /// Unconditional overwrite of one cell.
    pub fn place(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.row][pos.col] = cell;
    }

    pub fn count_owned(&self, owner: Player) -> usize {
        self.pieces().filter(|piece| piece.owner == owner).count()
    }

    pub fn pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.cells.iter().flatten().filter_map(|cell| *cell)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::starting()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_layout() {
        let grid = Grid::starting();
        assert_eq!(grid.piece_at(Position::new(0, 0)), Some(Piece::new(Player::A, PieceKind::Pawn1)));
        assert_eq!(grid.piece_at(Position::new(0, 2)), Some(Piece::new(Player::A, PieceKind::Hero1)));
        assert_eq!(grid.piece_at(Position::new(4, 3)), Some(Piece::new(Player::B, PieceKind::Hero2)));
        assert_eq!(grid.piece_at(Position::new(2, 2)), None);
        assert_eq!(grid.count_owned(Player::A), 5);
        assert_eq!(grid.count_owned(Player::B), 5);
    }

    #[test]
    fn test_find_position_after_capture() {
        let mut grid = Grid::starting();
        let pawn = Piece::new(Player::B, PieceKind::Pawn2);
        assert_eq!(grid.find_position(pawn), Some(Position::new(4, 1)));

        grid.place(Position::new(4, 1), None);
        assert_eq!(grid.find_position(pawn), None);
        assert_eq!(grid.count_owned(Player::B), 4);
    }

    #[test]
    fn test_grid_json_shape() {
        let json = serde_json::to_value(Grid::starting()).unwrap();
        let rows = json.as_array().unwrap();
        assert_eq!(rows.len(), GRID_SIZE);
        assert_eq!(rows[0][0], "A-P1");
        assert_eq!(rows[4][4], "B-P3");
        assert!(rows[2][3].is_null());
    }

    #[test]
    #[should_panic]
    fn test_piece_at_out_of_bounds() {
        Grid::empty().piece_at(Position::new(GRID_SIZE, 0));
    }
}
