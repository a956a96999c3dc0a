//! First-class invariants for the engine.
//!
//! Invariants are logical properties that must hold for every reachable
//! engine state. They are testable on their own and are checked after each
//! move in debug builds.

use super::engine::SquareBoardGame;
use strictly_board::StateSpace;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod bounded_ledger;
pub mod outcome;
pub mod turn_counter;

pub use bounded_ledger::BoundedLedgerInvariant;
pub use outcome::OutcomeInvariant;
pub use turn_counter::TurnCounterInvariant;

/// All engine invariants as a composable set.
pub type EngineInvariants = (TurnCounterInvariant, OutcomeInvariant, BoundedLedgerInvariant);

/// Checks [`EngineInvariants`] against `game`.
pub fn check_engine<S: StateSpace>(game: &SquareBoardGame<S>) -> Result<(), Vec<InvariantViolation>> {
    EngineInvariants::check_all(game)
}
