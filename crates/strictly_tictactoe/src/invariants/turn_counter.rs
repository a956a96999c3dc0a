//! Turn counter invariant: the counter tracks the ledger.

use super::Invariant;
use crate::SquareBoardGame;
use strictly_board::StateSpace;

/// Invariant: the turn counter equals the number of recorded moves, and
/// the first mover holds the same number of squares as the second or one more.
pub struct TurnCounterInvariant;

impl<S: StateSpace> Invariant<SquareBoardGame<S>> for TurnCounterInvariant {
    fn holds(game: &SquareBoardGame<S>) -> bool {
        let space = game.state_space();
        if game.turn_counter() != space.move_count() {
            return false;
        }

        match game.players() {
            None => game.turn_counter() == 0,
            Some([first, second]) => {
                let first_count = space.moves_by(first).len();
                let second_count = space.moves_by(second).len();
                first_count == second_count || first_count == second_count + 1
            }
        }
    }

    fn description() -> &'static str {
        "Turn counter matches recorded moves and players alternate"
    }
}
