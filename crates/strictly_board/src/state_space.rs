//! The state-space abstraction: a ledger of claimed positions.
//!
//! "Move" and "position" are interchangeable here: a move is fully
//! identified by the position it claims.

use crate::{BoardPlayer, BoardPosition};
use std::collections::HashSet;

/// Largest number of cells along one side that a state space may span.
pub const MAX_SIDE_LEN: usize = 64;

/// Number of cells along one side of `[min, max]`, or `None` when the range
/// is empty or wider than [`MAX_SIDE_LEN`].
pub fn checked_side_len(min: i32, max: i32) -> Option<usize> {
    let side = i64::from(max) - i64::from(min) + 1;
    usize::try_from(side)
        .ok()
        .filter(|side| (1..=MAX_SIDE_LEN).contains(side))
}

/// Ledger of every accepted move on a square board.
///
/// Boards are square: one `[min_bound, max_bound]` range applies to
/// both axes.
pub trait StateSpace: Clone {
    /// Position type stored in the ledger.
    type Position: BoardPosition;

    /// Player type stored in the ledger.
    type Player: BoardPlayer;

    /// Records `position` as claimed by `player`.
    ///
    /// Recording an already claimed position overwrites it; callers are
    /// expected to check [`StateSpace::is_occupied`] first.
    fn record_move(&mut self, position: Self::Position, player: Self::Player);

    /// All recorded positions.
    fn all_moves(&self) -> HashSet<Self::Position>;

    /// Recorded positions claimed by `player`.
    fn moves_by(&self, player: &Self::Player) -> HashSet<Self::Position>;

    /// True if anyone has claimed `position`.
    fn is_occupied(&self, position: &Self::Position) -> bool;

    /// The player who claimed `position`, if any.
    fn player_at(&self, position: &Self::Position) -> Option<&Self::Player>;

    /// Every in-bounds position nobody has claimed yet.
    fn available_moves(&self) -> HashSet<Self::Position>;

    /// Lowest valid coordinate on either axis.
    fn min_bound(&self) -> i32;

    /// Highest valid coordinate on either axis.
    fn max_bound(&self) -> i32;

    /// An empty ledger with the same bounds.
    fn cleared(&self) -> Self;

    /// Number of recorded moves.
    fn move_count(&self) -> usize {
        self.all_moves().len()
    }

    /// True if `position` lies within the bounds on both axes.
    fn contains(&self, position: &Self::Position) -> bool {
        let range = self.min_bound()..=self.max_bound();
        range.contains(&position.row()) && range.contains(&position.column())
    }

    /// Number of cells along one side of the board.
    fn side_len(&self) -> usize {
        let side = i64::from(self.max_bound()) - i64::from(self.min_bound()) + 1;
        usize::try_from(side).unwrap_or(0)
    }
}
