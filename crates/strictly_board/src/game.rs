//! The board-game engine abstraction.

use crate::{BoardPlayer, BoardPosition, GameResult, Snapshot};
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Lifecycle phase of an engine.
///
/// `Won` and `Draw` are terminal until the engine is reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum GamePhase {
    /// Not started; moves are refused.
    #[display("unstarted")]
    Unstarted,
    /// Started and accepting moves.
    #[display("in progress")]
    InProgress,
    /// A player completed a line.
    #[display("won")]
    Won,
    /// The board filled up without a winner.
    #[display("draw")]
    Draw,
}

impl GamePhase {
    /// True for `Won` and `Draw`.
    pub fn is_terminal(self) -> bool {
        matches!(self, GamePhase::Won | GamePhase::Draw)
    }
}

/// A two-player, turn-based game played on a square board.
///
/// Moves are always made on behalf of [`BoardGame::whose_turn`].
pub trait BoardGame {
    /// Position type accepted by [`BoardGame::make_move`].
    type Position: BoardPosition;

    /// Player type taking turns.
    type Player: BoardPlayer;

    /// Assigns the players; the first entry moves first.
    fn set_players(&mut self, players: Vec<Self::Player>) -> GameResult<()>;

    /// Starts a fresh game with the assigned players.
    fn start(&mut self) -> GameResult<()>;

    /// Returns to the unstarted baseline, keeping the players.
    fn reset(&mut self);

    /// Claims `position` for the player whose turn it is.
    fn make_move(&mut self, position: Self::Position) -> GameResult<()>;

    /// True if the board is full and nobody won.
    fn is_draw(&self) -> bool;

    /// True once a winner has been declared.
    fn exists_winner(&self) -> bool;

    /// The declared winner.
    fn winner(&self) -> GameResult<&Self::Player>;

    /// The player who makes the next move.
    fn whose_turn(&self) -> GameResult<&Self::Player>;

    /// Occupancy of every cell.
    fn snapshot(&self) -> Snapshot<Self::Player>;

    /// True between a successful start and the next reset.
    fn is_started(&self) -> bool;

    /// True if the game has a winner or is a draw.
    fn is_ended(&self) -> bool {
        self.is_draw() || self.exists_winner()
    }

    /// Current lifecycle phase.
    fn phase(&self) -> GamePhase {
        if !self.is_started() {
            GamePhase::Unstarted
        } else if self.exists_winner() {
            GamePhase::Won
        } else if self.is_draw() {
            GamePhase::Draw
        } else {
            GamePhase::InProgress
        }
    }
}
