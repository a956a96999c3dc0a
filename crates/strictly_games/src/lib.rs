//! Strictly Games - console front end for the tic-tac-toe engine
//!
//! Loads a [`GameConfig`] from TOML, replays move lists against a
//! [`strictly_tictactoe::TicTacToeGame`], and renders the resulting board.
//!
//! # Example
//!
//! ```
//! use strictly_games::{GameConfig, parse_moves, replay};
//!
//! # fn example() -> anyhow::Result<()> {
//! let moves = parse_moves("0,0 1,1 0,1 2,2 0,2")?;
//! let report = replay(&GameConfig::default(), &moves)?;
//! println!("{report}");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod config;
mod replay;

// Crate-level exports - CLI
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Replay
pub use replay::{RejectedMove, ReplayReport, parse_moves, replay};
