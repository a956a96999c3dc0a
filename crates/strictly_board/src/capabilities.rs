//! Capabilities required of positions and players.
//!
//! Engines are written against these traits so that alternative boards
//! and player representations plug in as new implementations.

use std::fmt::Debug;
use std::hash::Hash;

/// A coordinate on a square board.
///
/// Implementations are plain values compared structurally; they are used
/// as map keys by state spaces.
pub trait BoardPosition: Copy + Eq + Hash + Debug {
    /// Builds the position at `(row, column)`.
    fn at(row: i32, column: i32) -> Self;

    /// Row coordinate.
    fn row(&self) -> i32;

    /// Column coordinate.
    fn column(&self) -> i32;
}

/// A participant identified by display name.
pub trait BoardPlayer: Clone + Eq + Hash + Debug {
    /// Name shown to users; also the player's identity.
    fn display_name(&self) -> &str;
}
