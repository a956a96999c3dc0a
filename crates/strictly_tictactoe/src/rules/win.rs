//! Win detection.
//!
//! A player wins by owning every cell of a row, a column, the main
//! diagonal, or the second diagonal selected by [`DiagonalRule`]. Lines
//! span the state space's full `[min, max]` range.

use crate::DiagonalRule;
use std::collections::HashSet;
use strictly_board::{BoardPosition, StateSpace};
use tracing::{debug, instrument};

/// Checks whether `player` has completed a line.
#[instrument(skip(space))]
pub fn has_won<S: StateSpace>(space: &S, player: &S::Player, rule: DiagonalRule) -> bool {
    let moves = space.moves_by(player);
    let (min, max) = (space.min_bound(), space.max_bound());

    let won = has_column(&moves, min, max)
        || has_row(&moves, min, max)
        || has_diagonal(&moves, min, max, rule);
    if won {
        debug!(?player, "Player completed a line");
    }
    won
}

/// True if `moves` covers every column of some row.
pub fn has_row<M: BoardPosition>(moves: &HashSet<M>, min: i32, max: i32) -> bool {
    (min..=max).any(|row| (min..=max).all(|column| moves.contains(&M::at(row, column))))
}

/// True if `moves` covers every row of some column.
pub fn has_column<M: BoardPosition>(moves: &HashSet<M>, min: i32, max: i32) -> bool {
    (min..=max).any(|column| (min..=max).all(|row| moves.contains(&M::at(row, column))))
}

/// True if `moves` covers the main diagonal or the second diagonal.
pub fn has_diagonal<M: BoardPosition>(
    moves: &HashSet<M>,
    min: i32,
    max: i32,
    rule: DiagonalRule,
) -> bool {
    let main = (min..=max).all(|i| moves.contains(&M::at(i, i)));
    main || (min..=max).all(|i| moves.contains(&M::at(i, rule.second_diagonal_column(i, min, max))))
}
