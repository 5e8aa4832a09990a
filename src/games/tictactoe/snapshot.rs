//! Read-only board view handed to the presentation layer.

use super::{Board, Cell, Position};
use serde::{Deserialize, Serialize};

/// Characters used to draw each kind of cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbols {
    /// Drawn for [`Cell::Human`].
    pub human: char,
    /// Drawn for [`Cell::Computer`].
    pub computer: char,
    /// Drawn for [`Cell::Empty`].
    pub empty: char,
}

impl Default for Symbols {
    fn default() -> Self {
        Self {
            human: 'X',
            computer: 'O',
            empty: ' ',
        }
    }
}

impl Symbols {
    /// Returns the character for `cell`.
    pub fn for_cell(&self, cell: Cell) -> char {
        match cell {
            Cell::Empty => self.empty,
            Cell::Human => self.human,
            Cell::Computer => self.computer,
        }
    }
}

/// A copy of the board at one moment, laid out as rows of cells.
///
/// Serializes as a 3x3 array of `"Empty"`, `"Human"` and `"Computer"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoardSnapshot {
    rows: [[Cell; 3]; 3],
}

impl BoardSnapshot {
    /// Cells grouped by row.
    pub fn rows(&self) -> &[[Cell; 3]; 3] {
        &self.rows
    }

    /// Cell at `pos`.
    pub fn cell(&self, pos: Position) -> Cell {
        self.rows[pos.row()][pos.col()]
    }

    /// Renders the grid with row and column labels using `symbols`.
    pub fn render(&self, symbols: &Symbols) -> String {
        let mut out = String::from("    0   1   2\n");
        for (r, row) in self.rows.iter().enumerate() {
            let cells: Vec<String> = row
                .iter()
                .map(|cell| format!(" {} ", symbols.for_cell(*cell)))
                .collect();
            out.push_str(&format!("{}  {}\n", r, cells.join("|")));
            if r < 2 {
                out.push_str("   ---+---+---\n");
            }
        }
        out
    }
}

impl From<&Board> for BoardSnapshot {
    fn from(board: &Board) -> Self {
        Self { rows: board.rows() }
    }
}

impl std::fmt::Display for BoardSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render(&Symbols::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Player;

    #[test]
    fn test_snapshot_serializes_cell_names() {
        let mut board = Board::new();
        board.apply_move(Position::TopLeft, Player::Human).unwrap();
        board.apply_move(Position::Center, Player::Computer).unwrap();
        let json = serde_json::to_string(&BoardSnapshot::from(&board)).unwrap();
        assert_eq!(
            json,
            r#"[["Human","Empty","Empty"],["Empty","Computer","Empty"],["Empty","Empty","Empty"]]"#
        );
    }

    #[test]
    fn test_render_uses_symbols() {
        let mut board = Board::new();
        board.apply_move(Position::BottomRight, Player::Computer).unwrap();
        let symbols = Symbols {
            human: 'H',
            computer: 'C',
            empty: '.',
        };
        let text = BoardSnapshot::from(&board).render(&symbols);
        assert!(text.ends_with("2   . | . | C \n"));
    }
}
