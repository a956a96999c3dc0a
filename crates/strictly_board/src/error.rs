//! Error types for board-game engines.
//!
//! Every engine operation that can be refused returns a [`GameError`]
//! carrying a [`GameErrorKind`] and the caller location that raised it.

use derive_more::{Display, Error};
use tracing::instrument;

/// Why a player assignment was refused.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum PlayerRejection {
    /// Exactly two players are required.
    #[display("expected 2 players, got {_0}")]
    WrongCount(usize),
    /// The player in the given slot has an empty display name.
    #[display("player in slot {_0} has an empty display name")]
    EmptyDisplayName(usize),
    /// Both slots share the same display name.
    #[display("both players are named {_0:?}")]
    DuplicateDisplayName(String),
}

/// Why a start request was refused.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum StartRejection {
    /// No valid player pair has been assigned.
    #[display("players have not been set")]
    PlayersNotSet,
    /// The game is already running.
    #[display("game is already started")]
    AlreadyStarted,
}

/// Why a move was refused.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum MoveRejection {
    /// The game has not been started.
    #[display("game has not been started")]
    NotStarted,
    /// The game already has a winner or ended in a draw.
    #[display("game has already ended")]
    GameEnded,
    /// The coordinate lies outside `[min, max]` on at least one axis.
    #[display("({row}, {column}) is outside the board [{min}, {max}]")]
    OutOfBounds {
        /// Requested row.
        row: i32,
        /// Requested column.
        column: i32,
        /// Lowest valid coordinate.
        min: i32,
        /// Highest valid coordinate.
        max: i32,
    },
    /// The coordinate was claimed by an earlier move.
    #[display("({row}, {column}) is already occupied")]
    Occupied {
        /// Requested row.
        row: i32,
        /// Requested column.
        column: i32,
    },
}

/// Specific error conditions for board-game operations.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GameErrorKind {
    /// Player setup failed validation.
    #[display("Invalid players: {_0}")]
    InvalidPlayers(PlayerRejection),
    /// The game could not be started.
    #[display("Invalid start: {_0}")]
    InvalidStart(StartRejection),
    /// The move could not be made.
    #[display("Invalid move: {_0}")]
    InvalidMove(MoveRejection),
    /// A winner was requested while none exists.
    #[display("The game has no winner: it either ended in a draw or is not over yet")]
    NoWinner,
    /// A turn query was made before any players were assigned.
    #[display("Players have not been set")]
    PlayersNotSet,
    /// A grid of cells was not square.
    #[display("Grid row {row} has {len} cells, expected {side}")]
    NonSquareGrid {
        /// Index of the offending row.
        row: usize,
        /// Cells in that row.
        len: usize,
        /// Number of rows, which every row must match.
        side: usize,
    },
    /// A board was requested with an empty or oversized coordinate range.
    #[display("Invalid board bounds [{min}, {max}]: side must span 1 to 64 cells")]
    InvalidBounds {
        /// Requested lower bound.
        min: i32,
        /// Requested upper bound.
        max: i32,
    },
}

/// Board-game error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Game error: {} at {}:{}", kind, file, line)]
pub struct GameError {
    /// What went wrong.
    pub kind: GameErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl GameError {
    /// Creates a new game error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: GameErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> &GameErrorKind {
        &self.kind
    }
}

impl From<GameErrorKind> for GameError {
    #[track_caller]
    fn from(kind: GameErrorKind) -> Self {
        Self::new(kind)
    }
}

impl From<PlayerRejection> for GameError {
    #[track_caller]
    fn from(reason: PlayerRejection) -> Self {
        Self::new(GameErrorKind::InvalidPlayers(reason))
    }
}

impl From<StartRejection> for GameError {
    #[track_caller]
    fn from(reason: StartRejection) -> Self {
        Self::new(GameErrorKind::InvalidStart(reason))
    }
}

impl From<MoveRejection> for GameError {
    #[track_caller]
    fn from(reason: MoveRejection) -> Self {
        Self::new(GameErrorKind::InvalidMove(reason))
    }
}

/// Result alias for board-game operations.
pub type GameResult<T> = std::result::Result<T, GameError>;
