//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions,
//! in the Hoare style `{P} action {Q}`. Preconditions are always checked;
//! the engine checks postconditions in debug builds.

use super::engine::SquareBoardGame;
use super::invariants::{EngineInvariants, InvariantSet, InvariantViolation};
use strictly_board::{BoardGame, BoardPosition, MoveRejection, StateSpace};
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveRejection>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the game has been started.
pub struct GameStarted;

impl GameStarted {
    /// Refuses moves before `start`.
    pub fn check<S: StateSpace>(game: &SquareBoardGame<S>) -> Result<(), MoveRejection> {
        if game.is_started() {
            Ok(())
        } else {
            Err(MoveRejection::NotStarted)
        }
    }
}

/// Precondition: nobody has won and the board is not full.
pub struct GameNotEnded;

impl GameNotEnded {
    /// Refuses moves in a terminal state.
    pub fn check<S: StateSpace>(game: &SquareBoardGame<S>) -> Result<(), MoveRejection> {
        if game.is_ended() {
            Err(MoveRejection::GameEnded)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the position lies inside the state space's bounds.
pub struct WithinBounds;

impl WithinBounds {
    /// Refuses coordinates outside `[min, max]` on either axis.
    pub fn check<S: StateSpace>(
        position: &S::Position,
        game: &SquareBoardGame<S>,
    ) -> Result<(), MoveRejection> {
        let space = game.state_space();
        if space.contains(position) {
            Ok(())
        } else {
            Err(MoveRejection::OutOfBounds {
                row: position.row(),
                column: position.column(),
                min: space.min_bound(),
                max: space.max_bound(),
            })
        }
    }
}

/// Precondition: the position has not been claimed.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Refuses positions already in the ledger.
    pub fn check<S: StateSpace>(
        position: &S::Position,
        game: &SquareBoardGame<S>,
    ) -> Result<(), MoveRejection> {
        if game.state_space().is_occupied(position) {
            Err(MoveRejection::Occupied {
                row: position.row(),
                column: position.column(),
            })
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: started, not ended, in bounds, unclaimed.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move, in order.
    #[instrument(skip(game))]
    pub fn check<S: StateSpace>(
        position: &S::Position,
        game: &SquareBoardGame<S>,
    ) -> Result<(), MoveRejection> {
        GameStarted::check(game)?;
        GameNotEnded::check(game)?;
        WithinBounds::check(position, game)?;
        SquareIsEmpty::check(position, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Postconditions: the move added exactly one ledger entry and one turn,
/// and every [`EngineInvariants`] member still holds.
pub struct MoveContract;

impl<S: StateSpace> Contract<SquareBoardGame<S>, S::Position> for MoveContract {
    fn pre(game: &SquareBoardGame<S>, position: &S::Position) -> Result<(), MoveRejection> {
        LegalMove::check(position, game)
    }

    fn post(
        before: &SquareBoardGame<S>,
        after: &SquareBoardGame<S>,
    ) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if after.turn_counter() != before.turn_counter() + 1 {
            violations.push(InvariantViolation::new("Turn counter advanced exactly once"));
        }
        if after.state_space().move_count() != before.state_space().move_count() + 1 {
            violations.push(InvariantViolation::new("Ledger grew by exactly one move"));
        }
        if let Err(mut failed) = EngineInvariants::check_all(after) {
            violations.append(&mut failed);
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}
