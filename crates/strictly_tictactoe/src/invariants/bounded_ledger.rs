//! Bounded ledger invariant: every recorded move is on the board.

use super::Invariant;
use crate::SquareBoardGame;
use strictly_board::StateSpace;

/// Invariant: all recorded positions lie within the state space's bounds.
pub struct BoundedLedgerInvariant;

impl<S: StateSpace> Invariant<SquareBoardGame<S>> for BoundedLedgerInvariant {
    fn holds(game: &SquareBoardGame<S>) -> bool {
        let space = game.state_space();
        space.all_moves().iter().all(|position| space.contains(position))
    }

    fn description() -> &'static str {
        "Every recorded move lies within the board bounds"
    }
}
