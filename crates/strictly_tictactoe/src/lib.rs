//! Strictly Tic-Tac-Toe - a contract-checked engine for square-board line games
//!
//! Tic-tac-toe is the default instantiation; the engine itself works on any
//! square `[min, max]²` grid and declares a winner when one player holds a
//! full row, column, or diagonal.
//!
//! # Architecture
//!
//! - **Types**: [`Position`], [`Player`], [`DiagonalRule`]
//! - **Ledger**: [`GridStateSpace`], a hash-map backed [`StateSpace`]
//! - **Rules**: pure win/draw predicates in [`rules`]
//! - **Engine**: [`SquareBoardGame`] and the [`TicTacToeGame`] alias
//! - **Contracts**: move preconditions ([`LegalMove`]) and postconditions ([`MoveContract`])
//! - **Invariants**: [`EngineInvariants`], checked after each move in debug builds
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{BoardGame, Player, Position, TicTacToeGame};
//!
//! # fn example() -> strictly_tictactoe::GameResult<()> {
//! let mut game = TicTacToeGame::default();
//! game.set_players(vec![Player::x(), Player::o()])?;
//! game.start()?;
//! game.make_move(Position::new(1, 1))?;
//! assert_eq!(game.whose_turn()?, &Player::o());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod contracts;
mod engine;
mod invariants;
mod position;
mod state_space;
mod types;

pub mod rules;

// Crate-level exports - Core types
pub use position::{ParsePositionError, Position};
pub use types::{DiagonalRule, Player};

// Crate-level exports - Ledger
pub use state_space::{GridStateSpace, TIC_TAC_TOE_MAX, TIC_TAC_TOE_MIN};

// Crate-level exports - Engine
pub use engine::{SquareBoardGame, TicTacToeGame};

// Crate-level exports - Contracts
pub use contracts::{
    Contract, GameNotEnded, GameStarted, LegalMove, MoveContract, SquareIsEmpty, WithinBounds,
};

// Crate-level exports - Invariants
pub use invariants::{
    BoundedLedgerInvariant, EngineInvariants, Invariant, InvariantSet, InvariantViolation,
    OutcomeInvariant, TurnCounterInvariant, check_engine,
};

// Crate-level exports - Board capabilities
pub use strictly_board::{
    BoardGame, BoardPlayer, BoardPosition, GameError, GameErrorKind, GamePhase, GameResult,
    MAX_SIDE_LEN, MoveRejection, PlayerRejection, Snapshot, StartRejection, StateSpace,
};
