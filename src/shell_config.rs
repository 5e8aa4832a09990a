//! Settings for the terminal shell.

use crate::games::tictactoe::Symbols;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Presentation settings read from a TOML file.
///
/// ```toml
/// computer_delay_ms = 500
/// human_symbol = "X"
/// computer_symbol = "O"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShellConfig {
    /// Pause between the human's move and the computer's reply.
    #[serde(default = "default_delay_ms")]
    computer_delay_ms: u64,

    /// Mark drawn for the human's cells.
    #[serde(default = "default_human_symbol")]
    human_symbol: char,

    /// Mark drawn for the computer's cells.
    #[serde(default = "default_computer_symbol")]
    computer_symbol: char,
}

fn default_delay_ms() -> u64 {
    500
}

fn default_human_symbol() -> char {
    'X'
}

fn default_computer_symbol() -> char {
    'O'
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            computer_delay_ms: default_delay_ms(),
            human_symbol: default_human_symbol(),
            computer_symbol: default_computer_symbol(),
        }
    }
}

impl ShellConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!(delay_ms = config.computer_delay_ms, "Config loaded successfully");
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Replaces the display delay.
    pub fn with_delay_ms(mut self, delay_ms: u64) -> Self {
        self.computer_delay_ms = delay_ms;
        self
    }

    /// Display delay as a [`Duration`].
    pub fn computer_delay(&self) -> Duration {
        Duration::from_millis(self.computer_delay_ms)
    }

    /// Symbols for rendering snapshots.
    pub fn symbols(&self) -> Symbols {
        Symbols {
            human: self.human_symbol,
            computer: self.computer_symbol,
            ..Symbols::default()
        }
    }

    /// Checks that the two marks can be told apart.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.human_symbol.is_whitespace() || self.computer_symbol.is_whitespace() {
            return Err(ConfigError::new("Symbols must be visible characters".to_string()));
        }
        if self.human_symbol == self.computer_symbol {
            return Err(ConfigError::new(format!(
                "Human and computer share the symbol '{}'",
                self.human_symbol
            )));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
