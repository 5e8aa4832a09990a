//! perfect_tictactoe - terminal shell
//!
//! Plays one human against the minimax engine on stdin/stdout.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use perfect_tictactoe::{Shell, ShellConfig};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Logs go to stderr so they never interleave with the board on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    info!(json = cli.json, "Starting perfect_tictactoe");
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Shell::new(stdin.lock(), stdout.lock(), config)
        .with_json(cli.json)
        .run()
}

/// Resolves settings from the optional config file and CLI overrides.
#[instrument(skip_all)]
fn load_config(cli: &Cli) -> Result<ShellConfig> {
    let config = match &cli.config {
        Some(path) => ShellConfig::from_file(path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => ShellConfig::default(),
    };
    Ok(match cli.delay_ms {
        Some(ms) => config.with_delay_ms(ms),
        None => config,
    })
}
