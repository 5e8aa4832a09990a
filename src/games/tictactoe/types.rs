//! Core domain types for tic-tac-toe.

use super::action::MoveError;
use super::position::Position;
use super::rules;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A participant in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Player {
    /// The human player (plays X, moves first).
    Human,
    /// The engine-controlled player (plays O).
    Computer,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }
}

/// Contents of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Marked by the human.
    Human,
    /// Marked by the computer.
    Computer,
}

impl Cell {
    /// Returns the player occupying this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Human => Some(Player::Human),
            Cell::Computer => Some(Player::Computer),
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::Human => Cell::Human,
            Player::Computer => Cell::Computer,
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Builds a board from three rows of cells.
    ///
    /// No turn-order checks are made; this is meant for fixtures and for
    /// rebuilding a board from a snapshot.
    pub fn from_rows(rows: [[Cell; 3]; 3]) -> Self {
        let mut board = Self::new();
        for pos in Position::ALL {
            board.cells[pos.to_index()] = rows[pos.row()][pos.col()];
        }
        board
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Returns the cells grouped into rows.
    pub fn rows(&self) -> [[Cell; 3]; 3] {
        let mut rows = [[Cell::Empty; 3]; 3];
        for pos in Position::ALL {
            rows[pos.row()][pos.col()] = self.get(pos);
        }
        rows
    }

    /// Counts the cells marked by `player`.
    pub fn count(&self, player: Player) -> usize {
        let cell = Cell::from(player);
        self.cells.iter().filter(|c| **c == cell).count()
    }

    /// Places `player`'s mark at `pos`.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the board already has a winner or is full.
    /// - [`MoveError::SquareOccupied`] if `pos` is taken.
    #[instrument(skip(self), fields(position = %pos, player = %player))]
    pub fn apply_move(&mut self, pos: Position, player: Player) -> Result<(), MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if !self.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }
        self.cells[pos.to_index()] = Cell::from(player);
        Ok(())
    }

    /// Returns every empty position in row-major order.
    pub fn legal_moves(&self) -> Vec<Position> {
        Position::valid_moves(self)
    }

    /// Returns the player owning a completed line, if any.
    pub fn winner(&self) -> Option<Player> {
        rules::check_winner(self)
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Checks if the game on this board has concluded.
    pub fn is_terminal(&self) -> bool {
        rules::is_terminal(self)
    }

    /// Writes `cell` without validation. Used by search backtracking.
    pub(super) fn put(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.to_index()] = cell;
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.rows().iter().enumerate() {
            let line: Vec<&str> = row
                .iter()
                .map(|cell| match cell {
                    Cell::Empty => ".",
                    Cell::Human => "X",
                    Cell::Computer => "O",
                })
                .collect();
            write!(f, "{}", line.join(" "))?;
            if r < 2 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Outcome of a board, derived on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Moves remain and nobody has won.
    InProgress,
    /// The human completed a line.
    HumanWin,
    /// The computer completed a line.
    ComputerWin,
    /// The board filled up without a line.
    Draw,
}

impl GameResult {
    /// Computes the result for `board`.
    pub fn of(board: &Board) -> Self {
        match board.winner() {
            Some(Player::Human) => GameResult::HumanWin,
            Some(Player::Computer) => GameResult::ComputerWin,
            None if board.is_full() => GameResult::Draw,
            None => GameResult::InProgress,
        }
    }

    /// Returns true once the game has concluded.
    pub fn is_over(self) -> bool {
        self != GameResult::InProgress
    }

    /// Returns the winning player, if any.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameResult::HumanWin => Some(Player::Human),
            GameResult::ComputerWin => Some(Player::Computer),
            GameResult::InProgress | GameResult::Draw => None,
        }
    }

    /// Status line shown to the player.
    pub fn status_text(self) -> &'static str {
        match self {
            GameResult::InProgress => "You are X. AI is O.",
            GameResult::HumanWin => "You win!",
            GameResult::ComputerWin => "AI wins!",
            GameResult::Draw => "It's a draw.",
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::InProgress => write!(f, "In progress"),
            GameResult::HumanWin => write!(f, "Human wins"),
            GameResult::ComputerWin => write!(f, "Computer wins"),
            GameResult::Draw => write!(f, "Draw"),
        }
    }
}
