//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_tictactoe::{
    BoardGame, DiagonalRule, GameResult, GridStateSpace, Player, SquareBoardGame, TIC_TAC_TOE_MAX,
    TIC_TAC_TOE_MIN, TicTacToeGame,
};
use tracing::{debug, info, instrument};

/// Players, board bounds and scoring rule for a game.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Display name of the first mover.
    #[serde(default = "default_player_one")]
    player_one: String,

    /// Display name of the second mover.
    #[serde(default = "default_player_two")]
    player_two: String,

    /// Lowest coordinate on either axis.
    #[serde(default = "default_min_bound")]
    min_bound: i32,

    /// Highest coordinate on either axis.
    #[serde(default = "default_max_bound")]
    max_bound: i32,

    /// How the second diagonal is scored.
    #[serde(default)]
    diagonal_rule: DiagonalRule,
}

#[instrument]
fn default_player_one() -> String {
    "X".to_string()
}

#[instrument]
fn default_player_two() -> String {
    "O".to_string()
}

fn default_min_bound() -> i32 {
    TIC_TAC_TOE_MIN
}

fn default_max_bound() -> i32 {
    TIC_TAC_TOE_MAX
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_one: default_player_one(),
            player_two: default_player_two(),
            min_bound: default_min_bound(),
            max_bound: default_max_bound(),
            diagonal_rule: DiagonalRule::default(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            player_one = %config.player_one,
            player_two = %config.player_two,
            rule = %config.diagonal_rule,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("No config file found, using defaults");
            Ok(Self::default())
        }
    }

    /// Builds an unstarted engine with players assigned.
    ///
    /// # Errors
    ///
    /// Fails if the bounds are inverted or too wide, or the player names are rejected.
    #[instrument(skip(self))]
    pub fn build_game(&self) -> GameResult<TicTacToeGame> {
        let space = GridStateSpace::new(self.min_bound, self.max_bound)?;
        let mut game = SquareBoardGame::new(space).with_diagonal_rule(self.diagonal_rule);
        game.set_players(vec![
            Player::new(self.player_one.as_str()),
            Player::new(self.player_two.as_str()),
        ])?;
        debug!("Game built from config");
        Ok(game)
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
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
