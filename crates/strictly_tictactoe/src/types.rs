//! Core domain types for tic-tac-toe.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use strictly_board::BoardPlayer;

/// A player, identified by display name.
///
/// Two players are equal when their display names are equal. The engine
/// requires the name to be non-empty and distinct from the opponent's; the
/// type itself accepts any string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display)]
#[serde(transparent)]
#[display("{display_name}")]
pub struct Player {
    display_name: String,
}

impl Player {
    /// Creates a player with the given display name.
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
        }
    }

    /// The conventional first player.
    pub fn x() -> Self {
        Self::new("X")
    }

    /// The conventional second player.
    pub fn o() -> Self {
        Self::new("O")
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }
}

impl BoardPlayer for Player {
    fn display_name(&self) -> &str {
        &self.display_name
    }
}

/// Which cells make up the second diagonal line.
///
/// The main diagonal is always `(i, i)`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DiagonalRule {
    /// The geometric anti-diagonal `(i, max - (i - min))`.
    #[default]
    AntiDiagonal,
    /// Cells `(i, i mod 2)`: on a 0..=2 board that is `(0,0), (1,1), (2,0)`.
    ///
    /// Kept for compatibility with boards scored by the earlier engine.
    Legacy,
}

impl DiagonalRule {
    /// Column of the second-diagonal cell in `row` for a board spanning `[min, max]`.
    pub fn second_diagonal_column(self, row: i32, min: i32, max: i32) -> i32 {
        match self {
            DiagonalRule::AntiDiagonal => max - (row - min),
            DiagonalRule::Legacy => row % 2,
        }
    }
}
