//! Command-line interface for perfect_tictactoe.

use clap::Parser;
use std::path::PathBuf;

/// Play tic-tac-toe in the terminal against a computer that never loses.
#[derive(Parser, Debug)]
#[command(name = "perfect_tictactoe")]
#[command(about = "Tic-tac-toe against a perfect-play minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML file with display settings
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Pause before the computer replies, in milliseconds (overrides the config file)
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Also print every board as a JSON line
    #[arg(long)]
    pub json: bool,
}
