//! Outcome invariant: winning and drawing are exclusive.

use super::Invariant;
use crate::SquareBoardGame;
use strictly_board::{BoardGame, StateSpace};

/// Invariant: a game is never both won and drawn, and a declared winner
/// is the player who made the last move.
pub struct OutcomeInvariant;

impl<S: StateSpace> Invariant<SquareBoardGame<S>> for OutcomeInvariant {
    fn holds(game: &SquareBoardGame<S>) -> bool {
        if game.exists_winner() && game.is_draw() {
            return false;
        }

        let Ok(winner) = game.winner() else {
            return true;
        };
        match (game.players(), game.turn_counter().checked_sub(1)) {
            (Some(pair), Some(last)) => &pair[last % 2] == winner,
            _ => false,
        }
    }

    fn description() -> &'static str {
        "Game is not both won and drawn, and the winner moved last"
    }
}
