//! Perfect-play tic-tac-toe.
//!
//! A human plays X against a computer opponent that searches the whole
//! game tree with alpha-beta minimax and therefore never loses.
//!
//! # Architecture
//!
//! - **Games**: board model, rules, search engine and turn controller
//! - **Shell**: a line-oriented terminal front end
//! - **Config**: TOML display settings for the shell
//!
//! # Example
//!
//! ```
//! use perfect_tictactoe::{handle_computer_turn, handle_human_click, new_game, Position};
//!
//! let mut game = new_game();
//! let (_, result) = handle_human_click(&mut game, 0, 0).unwrap();
//! assert!(result.is_none());
//!
//! let (board, _) = handle_computer_turn(&mut game).unwrap();
//! assert_eq!(board.cell(Position::Center), perfect_tictactoe::Cell::Computer);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod games;
mod shell;
mod shell_config;

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    best_move, handle_computer_turn, handle_human_click, new_game, reset, Board, BoardSnapshot,
    Cell, ControllerState, GameController, GameResult, Move, MoveError, Player, Position,
    SearchOutcome, Symbols,
};

// Crate-level exports - Engine and rule modules
pub use games::tictactoe::{rules, search};

// Crate-level exports - Terminal shell
pub use shell::{Command, ParseCommandError, Shell};
pub use shell_config::{ConfigError, ShellConfig};
