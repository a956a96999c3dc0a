//! Command-line interface for strictly_games.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Games - replay tic-tac-toe games from the console
#[derive(Parser, Debug)]
#[command(name = "strictly_games")]
#[command(about = "Contract-checked tic-tac-toe engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the game configuration file (defaults apply if it is missing)
    #[arg(long, global = true, default_value = "strictly_games.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start a game and play a list of moves
    Replay {
        /// Space-separated moves, each "row,column" (e.g. "0,0 1,1 2,2")
        #[arg(long, default_value = "")]
        moves: String,

        /// Print a JSON report instead of the board
        #[arg(long)]
        json: bool,
    },

    /// Print the effective game configuration
    Rules,
}
