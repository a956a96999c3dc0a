//! Board coordinates for tic-tac-toe moves.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strictly_board::BoardPosition;
use tracing::instrument;

/// A `(row, column)` coordinate.
///
/// Positions are not validated on construction. Whether a coordinate is on
/// the board depends on the state space in use, so the engine rejects
/// out-of-range positions when they are played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display)]
#[display("({row}, {column})")]
pub struct Position {
    row: i32,
    column: i32,
}

impl Position {
    /// Creates a position.
    pub fn new(row: i32, column: i32) -> Self {
        Self { row, column }
    }

    /// Row coordinate.
    pub fn row(&self) -> i32 {
        self.row
    }

    /// Column coordinate.
    pub fn column(&self) -> i32 {
        self.column
    }
}

impl BoardPosition for Position {
    fn at(row: i32, column: i32) -> Self {
        Self::new(row, column)
    }

    fn row(&self) -> i32 {
        self.row
    }

    fn column(&self) -> i32 {
        self.column
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, column): (i32, i32)) -> Self {
        Self::new(row, column)
    }
}

/// Text that does not describe a position.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Cannot parse {input:?} as a position; expected \"row,column\"")]
pub struct ParsePositionError {
    /// The rejected input.
    pub input: String,
}

impl FromStr for Position {
    type Err = ParsePositionError;

    /// Parses `"row,column"` or `"row column"`, optionally wrapped in parentheses.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParsePositionError {
            input: s.to_string(),
        };
        let trimmed = s.trim().trim_start_matches('(').trim_end_matches(')');
        let mut parts = trimmed
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty());

        let row = parts.next().ok_or_else(err)?.parse().map_err(|_| err())?;
        let column = parts.next().ok_or_else(err)?.parse().map_err(|_| err())?;
        if parts.next().is_some() {
            return Err(err());
        }
        Ok(Self::new(row, column))
    }
}
