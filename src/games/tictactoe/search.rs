//! Perfect-play move selection for the computer.
//!
//! Minimax with alpha-beta pruning over the full game tree. The computer
//! maximizes, the human minimizes. Trial moves are written straight into
//! the caller's board and undone by [`TrialMove`] when it goes out of scope,
//! so the board handed in is identical on return.

use super::{Board, Cell, Player, Position};
use std::ops::{Deref, DerefMut};
use tracing::{debug, instrument, trace};

/// Base value of a decided game; the ply count is subtracted from it.
const WIN_SCORE: i32 = 10;

/// Initial alpha-beta window. Any reachable score lies strictly inside it.
const ROOT_WINDOW: i32 = 999;

/// Result of a completed search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    /// The move the computer should play.
    pub best_move: Position,
    /// Minimax value of `best_move`, from the computer's point of view.
    pub score: i32,
    /// Number of positions visited, root children included.
    pub nodes: u64,
}

/// Returns the best move for the computer on `board`.
///
/// `depth_offset` is the ply count assigned to the root; controller calls
/// pass 0. It is a `u8` so every score stays inside the root window.
///
/// # Panics
///
/// Panics if `board` is terminal. The controller never asks for a move once
/// the game is over, so reaching this is a bug in the caller.
pub fn best_move(board: &mut Board, depth_offset: u8) -> Position {
    search(board, depth_offset).best_move
}

/// Runs the full search and reports the chosen move, its score and the node count.
///
/// # Panics
///
/// Panics if `board` is terminal.
#[instrument(skip(board), fields(empty_cells = board.legal_moves().len()))]
pub fn search(board: &mut Board, depth_offset: u8) -> SearchOutcome {
    assert!(
        !board.is_terminal(),
        "invalid precondition: best_move called on a terminal board"
    );

    if board.cells().iter().all(|c| *c == Cell::Empty) {
        debug!("empty board, taking the center");
        return SearchOutcome {
            best_move: Position::Center,
            score: 0,
            nodes: 0,
        };
    }

    let mut searcher = Searcher::default();
    let moves = board.legal_moves();
    let mut best = (moves[0], i32::MIN);
    let mut alpha = -ROOT_WINDOW;
    let beta = ROOT_WINDOW;
    let depth = i32::from(depth_offset) + 1;

    for pos in moves {
        let value = {
            let mut trial = TrialMove::place(board, pos, Player::Computer);
            searcher.minimax(&mut trial, Player::Human, depth, alpha, beta)
        };
        trace!(position = %pos, value, "root candidate");
        // Strict comparison keeps the first move in row-major order on ties.
        if value > best.1 {
            best = (pos, value);
        }
        alpha = alpha.max(value);
    }

    let outcome = SearchOutcome {
        best_move: best.0,
        score: best.1,
        nodes: searcher.nodes,
    };
    debug!(
        best_move = %outcome.best_move,
        score = outcome.score,
        nodes = outcome.nodes,
        "search complete"
    );
    outcome
}

/// Terminal evaluation: faster wins and slower losses score better.
fn score(board: &Board, depth: i32) -> i32 {
    match board.winner() {
        Some(Player::Computer) => WIN_SCORE - depth,
        Some(Player::Human) => depth - WIN_SCORE,
        None => 0,
    }
}

#[derive(Debug, Default)]
struct Searcher {
    nodes: u64,
}

impl Searcher {
    fn minimax(
        &mut self,
        board: &mut Board,
        to_move: Player,
        depth: i32,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.nodes += 1;
        if board.is_terminal() {
            return score(board, depth);
        }

        match to_move {
            Player::Computer => {
                let mut best = -ROOT_WINDOW;
                for pos in board.legal_moves() {
                    let mut trial = TrialMove::place(board, pos, Player::Computer);
                    let value = self.minimax(&mut trial, Player::Human, depth + 1, alpha, beta);
                    best = best.max(value);
                    alpha = alpha.max(value);
                    if beta <= alpha {
                        break;
                    }
                }
                best
            }
            Player::Human => {
                let mut best = ROOT_WINDOW;
                for pos in board.legal_moves() {
                    let mut trial = TrialMove::place(board, pos, Player::Human);
                    let value = self.minimax(&mut trial, Player::Computer, depth + 1, alpha, beta);
                    best = best.min(value);
                    beta = beta.min(value);
                    if beta <= alpha {
                        break;
                    }
                }
                best
            }
        }
    }
}

/// A mark placed for the duration of one subtree.
///
/// The cell is reset to [`Cell::Empty`] on drop, which covers normal
/// iteration, pruning breaks and unwinding alike.
struct TrialMove<'a> {
    board: &'a mut Board,
    pos: Position,
}

impl<'a> TrialMove<'a> {
    fn place(board: &'a mut Board, pos: Position, player: Player) -> Self {
        debug_assert!(board.is_empty(pos), "trial move on occupied cell {pos}");
        board.put(pos, player.into());
        Self { board, pos }
    }
}

impl Deref for TrialMove<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for TrialMove<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for TrialMove<'_> {
    fn drop(&mut self) {
        self.board.put(self.pos, Cell::Empty);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const X: Cell = Cell::Human;
    const O: Cell = Cell::Computer;
    const E: Cell = Cell::Empty;

    /// Counts every node of the unpruned game tree below `board`.
    fn full_tree_nodes(board: &mut Board, to_move: Player) -> u64 {
        if board.is_terminal() {
            return 1;
        }
        let mut total = 1;
        for pos in board.legal_moves() {
            let mut trial = TrialMove::place(board, pos, to_move);
            total += full_tree_nodes(&mut trial, to_move.opponent());
        }
        total
    }

    #[test]
    fn test_score_prefers_fast_wins_and_slow_losses() {
        let won = Board::from_rows([[O, O, O], [X, X, E], [X, E, E]]);
        assert_eq!(score(&won, 1), 9);
        assert_eq!(score(&won, 5), 5);

        let lost = Board::from_rows([[X, X, X], [O, O, E], [E, E, E]]);
        assert_eq!(score(&lost, 2), -8);

        let drawn = Board::from_rows([[X, O, X], [O, X, X], [O, X, O]]);
        assert_eq!(score(&drawn, 9), 0);
    }

    #[test]
    fn test_trial_move_restores_cell() {
        let mut board = Board::new();
        {
            let trial = TrialMove::place(&mut board, Position::Center, Player::Human);
            assert_eq!(trial.get(Position::Center), Cell::Human);
        }
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_empty_board_takes_center_without_search() {
        let mut board = Board::new();
        let outcome = search(&mut board, 0);
        assert_eq!(outcome.best_move, Position::Center);
        assert_eq!(outcome.nodes, 0);
    }

    #[test]
    fn test_blocks_open_row() {
        let mut board = Board::from_rows([[X, X, E], [E, O, E], [E, E, E]]);
        assert_eq!(best_move(&mut board, 0), Position::TopRight);
    }

    #[test]
    fn test_takes_immediate_win() {
        let mut board = Board::from_rows([[O, O, E], [X, X, E], [E, E, X]]);
        let outcome = search(&mut board, 0);
        assert_eq!(outcome.best_move, Position::TopRight);
        assert_eq!(outcome.score, WIN_SCORE - 1);
    }

    #[test]
    fn test_depth_offset_shifts_score() {
        let mut board = Board::from_rows([[O, O, E], [X, X, E], [E, E, X]]);
        let outcome = search(&mut board, 2);
        assert_eq!(outcome.best_move, Position::TopRight);
        assert_eq!(outcome.score, WIN_SCORE - 3);
    }

    #[test]
    fn test_win_beats_block() {
        // Both sides threaten; winning now is worth more than blocking.
        let mut board = Board::from_rows([[X, X, E], [O, O, E], [X, E, E]]);
        assert_eq!(best_move(&mut board, 0), Position::MiddleRight);
    }

    #[test]
    fn test_search_leaves_board_untouched() {
        let mut board = Board::from_rows([[X, E, E], [E, O, E], [E, E, X]]);
        let before = board;
        let _ = search(&mut board, 0);
        assert_eq!(board, before);
    }

    #[test]
    fn test_pruning_visits_fewer_nodes_than_full_tree() {
        let mut board = Board::from_rows([[X, E, E], [E, E, E], [E, E, E]]);
        let outcome = search(&mut board, 0);
        let unpruned = full_tree_nodes(&mut board, Player::Computer) - 1;
        assert!(
            outcome.nodes < unpruned,
            "pruned search visited {} of {} nodes",
            outcome.nodes,
            unpruned
        );
    }

    #[test]
    fn test_largest_depth_offset_keeps_scores_in_window() {
        let mut board = Board::from_rows([[O, O, E], [X, X, E], [E, E, X]]);
        let outcome = search(&mut board, u8::MAX);
        assert_eq!(outcome.best_move, Position::TopRight);
        assert_eq!(outcome.score, WIN_SCORE - 256);
        assert!(outcome.score > -ROOT_WINDOW);

        // Even the slowest possible loss stays inside the window.
        let deepest = i32::from(u8::MAX) + 9;
        assert!(deepest - WIN_SCORE < ROOT_WINDOW);
    }

    #[test]
    #[should_panic(expected = "invalid precondition")]
    fn test_terminal_board_panics() {
        let mut board = Board::from_rows([[X, X, X], [O, O, E], [E, E, E]]);
        let _ = best_move(&mut board, 0);
    }
}
