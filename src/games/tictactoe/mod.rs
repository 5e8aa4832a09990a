//! Tic-tac-toe against a perfect-play computer opponent.
//!
//! - [`Board`] and [`rules`] hold the grid and decide wins and draws.
//! - [`search`] picks the computer's move with alpha-beta minimax.
//! - [`GameController`] sequences turns for a presentation layer.

mod action;
mod controller;
mod position;
pub mod rules;
pub mod search;
mod snapshot;
mod types;

pub use action::{Move, MoveError};
pub use controller::{
    handle_computer_turn, handle_human_click, new_game, reset, ControllerState, GameController,
};
pub use position::Position;
pub use search::{best_move, SearchOutcome};
pub use snapshot::{BoardSnapshot, Symbols};
pub use types::{Board, Cell, GameResult, Player};
