//! Line-oriented terminal front end.
//!
//! Reads commands from any [`BufRead`], writes the board to any [`Write`].
//! The computer's reply is delayed by the configured pause so the human's
//! move is visible on its own first.

use crate::games::tictactoe::{
    handle_computer_turn, handle_human_click, new_game, reset, BoardSnapshot, GameController,
    GameResult, Symbols,
};
use crate::shell_config::ShellConfig;
use anyhow::{Context, Result};
use derive_more::{Display, Error};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

const HELP: &str = "Commands: <row> <col> to play (0-2), r to reset, q to quit, h for help";

/// A parsed line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Mark the cell at (row, col).
    Place {
        /// Zero-based row.
        row: usize,
        /// Zero-based column.
        col: usize,
    },
    /// Start a new game.
    Reset,
    /// Print the command list.
    Help,
    /// Leave the shell.
    Quit,
}

/// Input that is not a command.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unrecognized input '{}'", input)]
pub struct ParseCommandError {
    /// The offending line, trimmed.
    pub input: String,
}

impl std::str::FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim();
        let err = || ParseCommandError {
            input: line.to_string(),
        };
        match line.to_lowercase().as_str() {
            "r" | "reset" | "y" | "yes" => return Ok(Command::Reset),
            "h" | "help" | "?" => return Ok(Command::Help),
            "q" | "quit" | "exit" | "n" | "no" => return Ok(Command::Quit),
            _ => {}
        }

        let mut parts = line
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|p| !p.is_empty());
        let row = parts.next().and_then(|p| p.parse().ok()).ok_or_else(err)?;
        let col = parts.next().and_then(|p| p.parse().ok()).ok_or_else(err)?;
        if parts.next().is_some() {
            return Err(err());
        }
        Ok(Command::Place { row, col })
    }
}

/// Interactive session over a reader and a writer.
pub struct Shell<R, W> {
    input: R,
    output: W,
    config: ShellConfig,
    symbols: Symbols,
    json: bool,
    game: GameController,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Creates a shell with a fresh game.
    pub fn new(input: R, output: W, config: ShellConfig) -> Self {
        let symbols = config.symbols();
        Self {
            input,
            output,
            config,
            symbols,
            json: false,
            game: new_game(),
        }
    }

    /// Also emit each snapshot as a JSON line.
    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// The game being played.
    pub fn game(&self) -> &GameController {
        &self.game
    }

    /// Runs until `quit` or end of input.
    #[instrument(skip(self), fields(delay_ms = *self.config.computer_delay_ms()))]
    pub fn run(&mut self) -> Result<()> {
        info!("Shell started");
        let snapshot = self.game.snapshot();
        self.render(&snapshot)?;
        self.status(GameResult::InProgress)?;
        writeln!(self.output, "{}", HELP)?;

        let mut line = String::new();
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            line.clear();
            let read = self
                .input
                .read_line(&mut line)
                .context("Failed to read input")?;
            if read == 0 {
                debug!("End of input");
                break;
            }

            match line.parse::<Command>() {
                Ok(Command::Quit) => break,
                Ok(Command::Help) => writeln!(self.output, "{}", HELP)?,
                Ok(Command::Reset) => {
                    let snapshot = reset(&mut self.game);
                    self.render(&snapshot)?;
                    self.status(GameResult::InProgress)?;
                }
                Ok(Command::Place { row, col }) => self.play(row, col)?,
                Err(e) => {
                    warn!(error = %e, "Bad input");
                    writeln!(self.output, "{}. {}", e, HELP)?;
                }
            }
        }

        info!("Shell finished");
        Ok(())
    }

    /// Plays the human's click and, if the game goes on, the computer's reply.
    fn play(&mut self, row: usize, col: usize) -> Result<()> {
        let (snapshot, over) = match handle_human_click(&mut self.game, row, col) {
            Ok(update) => update,
            Err(e) => {
                writeln!(self.output, "Invalid move: {}", e)?;
                return Ok(());
            }
        };
        self.render(&snapshot)?;
        if let Some(result) = over {
            return self.finish(result);
        }

        std::thread::sleep(self.config.computer_delay());

        let (snapshot, over) = handle_computer_turn(&mut self.game)?;
        if let Some(pos) = self.game.last_computer_move() {
            writeln!(self.output, "AI plays {} {}", pos.row(), pos.col())?;
        }
        self.render(&snapshot)?;
        match over {
            Some(result) => self.finish(result),
            None => Ok(()),
        }
    }

    fn finish(&mut self, result: GameResult) -> Result<()> {
        self.status(result)?;
        writeln!(self.output, "Play again? [y/n]")?;
        Ok(())
    }

    fn status(&mut self, result: GameResult) -> Result<()> {
        match result {
            GameResult::InProgress => writeln!(
                self.output,
                "You are {}. AI is {}.",
                self.symbols.human, self.symbols.computer
            )?,
            over => writeln!(self.output, "{}", over.status_text())?,
        }
        Ok(())
    }

    fn render(&mut self, snapshot: &BoardSnapshot) -> Result<()> {
        write!(self.output, "{}", snapshot.render(&self.symbols))?;
        if self.json {
            let json = serde_json::to_string(snapshot).context("Failed to encode snapshot")?;
            writeln!(self.output, "{}", json)?;
        }
        Ok(())
    }
}
