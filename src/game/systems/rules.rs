use crate::game::grid::Grid;
use crate::game::types::Player;

/// Winner after a move: whichever side still has pieces when the other has none.
/// A is checked first; both sides empty cannot happen since the mover always
/// stays on the board.
pub fn evaluate_winner(grid: &Grid) -> Option<Player> {
    if grid.count_owned(Player::A) == 0 {
        Some(Player::B)
    } else if grid.count_owned(Player::B) == 0 {
        Some(Player::A)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::{Piece, PieceKind, Position};

    #[test]
    fn test_no_winner_at_start() {
        assert_eq!(evaluate_winner(&Grid::starting()), None);
    }

    #[test]
    fn test_last_side_standing_wins() {
        let mut grid = Grid::empty();
        grid.place(Position::new(3, 3), Some(Piece::new(Player::A, PieceKind::Hero2)));
        assert_eq!(evaluate_winner(&grid), Some(Player::A));

        let mut grid = Grid::empty();
        grid.place(Position::new(0, 0), Some(Piece::new(Player::B, PieceKind::Pawn1)));
        assert_eq!(evaluate_winner(&grid), Some(Player::B));
    }
}
