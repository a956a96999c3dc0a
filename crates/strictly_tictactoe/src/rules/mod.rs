//! Game rules for square-board line games.
//!
//! Pure functions over a [`strictly_board::StateSpace`]. Rules are kept
//! apart from the engine so contracts and invariants can reuse them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{has_column, has_diagonal, has_row, has_won};
