//! Command-line interface for tictactoe.

use clap::Parser;
use std::path::PathBuf;

/// Tic-tac-toe for two players at one terminal.
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Terminal tic-tac-toe for two players", long_about = None)]
#[command(version)]
pub struct Cli {
    /// First player's name.
    #[arg(long, default_value = "Player 1")]
    pub name_a: String,

    /// First player's marker (single character).
    #[arg(long, default_value_t = 'X')]
    pub marker_a: char,

    /// Second player's name.
    #[arg(long, default_value = "Player 2")]
    pub name_b: String,

    /// Second player's marker (single character).
    #[arg(long, default_value_t = 'O')]
    pub marker_b: char,

    /// Log file path. Logs go to a file so they stay off the game screen.
    #[arg(long, default_value = "tictactoe.log")]
    pub log_file: PathBuf,
}
