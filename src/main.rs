//! Terminal tic-tac-toe for two players sharing a keyboard.

#![warn(missing_docs)]

mod cli;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use tictactoe::PlayerRecord;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Log to a file so tracing output cannot corrupt the alternate screen.
    let log_file = std::fs::File::create(&cli.log_file)
        .with_context(|| format!("Failed to create log file {}", cli.log_file.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    info!(
        player_a = %cli.name_a,
        player_b = %cli.name_b,
        "Starting tictactoe"
    );

    tui::run(
        PlayerRecord::new(cli.name_a, cli.marker_a),
        PlayerRecord::new(cli.name_b, cli.marker_b),
    )
}
