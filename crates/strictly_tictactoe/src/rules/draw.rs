//! Draw detection.

use strictly_board::StateSpace;
use tracing::instrument;

/// Checks if every cell on the board is claimed.
#[instrument(skip(space))]
pub fn is_full<S: StateSpace>(space: &S) -> bool {
    space.available_moves().is_empty()
}

/// A full board with no declared winner is a draw.
pub fn is_draw<S: StateSpace>(space: &S, winner_exists: bool) -> bool {
    !winner_exists && is_full(space)
}
