//! Move type and the errors raised when a move is rejected.

use super::position::Position;

/// A move is the coordinate a player marks.
pub type Move = Position;

/// Error that can occur when validating or applying a move.
///
/// None of these are fatal: the board and controller are left untouched
/// and the caller may simply prompt again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The cell is already marked.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// The coordinates fall outside the 3x3 grid.
    #[display("Coordinates ({}, {}) are off the board", row, col)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The action does not belong to the current turn.
    #[display("It is not that player's turn")]
    OutOfTurn,

    /// The game has already concluded.
    #[display("Game is already over")]
    GameOver,
}
