//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Cell};
use super::win::check_winner;

/// Checks if the board is full (all squares occupied).
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}

/// A full board with no winner is a draw.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::super::super::{Player, Position};
    use super::*;

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.put(Position::Center, Player::Human.into());
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        let x = Cell::Human;
        let o = Cell::Computer;
        // X O X / O X X / O X O
        let board = Board::from_rows([[x, o, x], [o, x, x], [o, x, o]]);
        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let x = Cell::Human;
        let o = Cell::Computer;
        // X X X / O O X / O X O
        let board = Board::from_rows([[x, x, x], [o, o, x], [o, x, o]]);
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
