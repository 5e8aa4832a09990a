//! Turn sequencing between the human and the search engine.
//!
//! The controller owns the board. The presentation layer keeps the
//! controller as its handle, forwards clicks and reset requests, and renders
//! whatever snapshot comes back.

use super::action::MoveError;
use super::search;
use super::snapshot::BoardSnapshot;
use super::{Board, GameResult, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Where the game stands between transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControllerState {
    /// Waiting for the human to pick a cell.
    AwaitingHumanMove,
    /// The human has moved; the engine replies next.
    AwaitingComputerMove,
    /// No further moves are accepted until reset.
    GameOver(GameResult),
}

/// Game session handle.
#[derive(Debug, Clone)]
pub struct GameController {
    board: Board,
    state: ControllerState,
    last_computer_move: Option<Position>,
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}

impl GameController {
    /// Creates a controller with an empty board, human to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            state: ControllerState::AwaitingHumanMove,
            last_computer_move: None,
        }
    }

    /// Current state.
    pub fn state(&self) -> ControllerState {
        self.state
    }

    /// Read access to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Snapshot of the board for rendering.
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::from(&self.board)
    }

    /// Player expected to act next, or `None` once the game is over.
    pub fn turn(&self) -> Option<Player> {
        match self.state {
            ControllerState::AwaitingHumanMove => Some(Player::Human),
            ControllerState::AwaitingComputerMove => Some(Player::Computer),
            ControllerState::GameOver(_) => None,
        }
    }

    /// Cell the engine marked on its most recent turn in this game.
    pub fn last_computer_move(&self) -> Option<Position> {
        self.last_computer_move
    }

    /// Applies the human's move.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] after the game has ended.
    /// - [`MoveError::OutOfTurn`] while the computer is to move.
    /// - [`MoveError::SquareOccupied`] if `pos` is taken.
    ///
    /// The board is left untouched on error.
    #[instrument(skip(self), fields(position = %pos, state = ?self.state))]
    pub fn submit_human_move(&mut self, pos: Position) -> Result<GameResult, MoveError> {
        match self.state {
            ControllerState::AwaitingHumanMove => {}
            ControllerState::AwaitingComputerMove => return Err(MoveError::OutOfTurn),
            ControllerState::GameOver(_) => return Err(MoveError::GameOver),
        }

        self.board.apply_move(pos, Player::Human)?;
        let result = self.advance(ControllerState::AwaitingComputerMove);
        debug!(?result, "human move applied");
        Ok(result)
    }

    /// Lets the engine choose and play the computer's move.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] after the game has ended.
    /// - [`MoveError::OutOfTurn`] while the human is to move.
    #[instrument(skip(self), fields(state = ?self.state))]
    pub fn run_computer_turn(&mut self) -> Result<GameResult, MoveError> {
        match self.state {
            ControllerState::AwaitingComputerMove => {}
            ControllerState::AwaitingHumanMove => return Err(MoveError::OutOfTurn),
            ControllerState::GameOver(_) => return Err(MoveError::GameOver),
        }

        let pos = search::best_move(&mut self.board, 0);
        self.board.apply_move(pos, Player::Computer)?;
        self.last_computer_move = Some(pos);
        let result = self.advance(ControllerState::AwaitingHumanMove);
        debug!(position = %pos, ?result, "computer move applied");
        Ok(result)
    }

    /// Clears the board and hands the first move back to the human.
    #[instrument(skip(self), fields(state = ?self.state))]
    pub fn reset(&mut self) {
        *self = Self::new();
        info!("game reset");
    }

    /// Moves to `GameOver` if the board is terminal, else to `next`.
    fn advance(&mut self, next: ControllerState) -> GameResult {
        let result = GameResult::of(&self.board);
        self.state = if result.is_over() {
            info!(%result, winner = ?result.winner(), "game over");
            ControllerState::GameOver(result)
        } else {
            next
        };
        result
    }
}

// ─────────────────────────────────────────────────────────────
//  Presentation-facing entry points
// ─────────────────────────────────────────────────────────────

/// Starts a new game and returns its handle.
pub fn new_game() -> GameController {
    GameController::new()
}

/// Applies a click at (`row`, `col`).
///
/// Returns the updated board and, once the game has ended, its result.
///
/// # Errors
///
/// [`MoveError::OutOfBounds`] for coordinates off the grid, otherwise as
/// [`GameController::submit_human_move`].
#[instrument(skip(handle))]
pub fn handle_human_click(
    handle: &mut GameController,
    row: usize,
    col: usize,
) -> Result<(BoardSnapshot, Option<GameResult>), MoveError> {
    let pos = Position::from_coords(row, col).ok_or(MoveError::OutOfBounds { row, col })?;
    let result = handle.submit_human_move(pos)?;
    Ok((handle.snapshot(), result.is_over().then_some(result)))
}

/// Plays the computer's reply.
///
/// The caller decides when to call this (typically after a short display
/// delay following the human's move).
///
/// # Errors
///
/// As [`GameController::run_computer_turn`].
#[instrument(skip(handle))]
pub fn handle_computer_turn(
    handle: &mut GameController,
) -> Result<(BoardSnapshot, Option<GameResult>), MoveError> {
    let result = handle.run_computer_turn()?;
    Ok((handle.snapshot(), result.is_over().then_some(result)))
}

/// Resets the game and returns the cleared board.
pub fn reset(handle: &mut GameController) -> BoardSnapshot {
    handle.reset();
    handle.snapshot()
}
