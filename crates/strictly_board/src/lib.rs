//! Strictly Board - capability traits for turn-based square-board games
//!
//! Games built on this crate expose the same surface regardless of their
//! board or player representation.
//!
//! # Architecture
//!
//! - **Capabilities**: [`BoardPosition`] and [`BoardPlayer`] value types
//! - **State space**: [`StateSpace`], the ledger of claimed positions
//! - **Engine**: [`BoardGame`], the move/turn/outcome state machine
//! - **Snapshot**: [`Snapshot`], a read-only grid for presentation layers
//! - **Errors**: [`GameError`] with a [`GameErrorKind`] taxonomy

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod capabilities;
mod error;
mod game;
mod snapshot;
mod state_space;

pub use capabilities::{BoardPlayer, BoardPosition};
pub use error::{GameError, GameErrorKind, GameResult, MoveRejection, PlayerRejection, StartRejection};
pub use game::{BoardGame, GamePhase};
pub use snapshot::Snapshot;
pub use state_space::{MAX_SIDE_LEN, StateSpace, checked_side_len};
