//! Strictly Games - Unified CLI
//!
//! Replays tic-tac-toe games and reports the effective configuration.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use strictly_games::{Cli, Command, GameConfig, parse_moves, replay};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = GameConfig::load_or_default(&cli.config)?;

    match cli.command {
        Command::Replay { moves, json } => run_replay(&config, &moves, json),
        Command::Rules => run_rules(&config),
    }
}

/// Replay a move list and print the outcome
#[instrument(skip(config))]
fn run_replay(config: &GameConfig, moves: &str, json: bool) -> Result<()> {
    let moves = parse_moves(moves)?;
    let report = replay(config, &moves)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{report}");
    }
    Ok(())
}

/// Print the effective configuration as TOML
#[instrument(skip(config))]
fn run_rules(config: &GameConfig) -> Result<()> {
    info!("Printing effective configuration");
    print!("{}", toml::to_string_pretty(config)?);
    Ok(())
}
