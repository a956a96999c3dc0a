//! Replays a move list against a configured engine.

use crate::GameConfig;
use serde::Serialize;
use std::fmt;
use strictly_tictactoe::{
    BoardGame, GamePhase, GameResult, ParsePositionError, Player, Position, Snapshot,
};
use tracing::{info, instrument, warn};

/// A move the engine refused during replay.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RejectedMove {
    /// The refused position.
    pub position: Position,
    /// Why it was refused.
    pub reason: String,
}

/// Final state of a replayed game.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayReport {
    /// Board after the last move.
    pub snapshot: Snapshot<Player>,
    /// Lifecycle phase after the last move.
    pub status: GamePhase,
    /// The winner, if any.
    pub winner: Option<Player>,
    /// Who moves next, unless the game is over.
    pub whose_turn: Option<Player>,
    /// Number of accepted moves.
    pub accepted: usize,
    /// Moves the engine refused, in submission order.
    pub rejected: Vec<RejectedMove>,
}

/// Parses a whitespace-separated list of `row,column` moves.
///
/// # Errors
///
/// Returns the first token that is not a valid position.
pub fn parse_moves(input: &str) -> Result<Vec<Position>, ParsePositionError> {
    input.split_whitespace().map(str::parse).collect()
}

/// Starts a game from `config` and plays `moves` in order.
///
/// Refused moves are logged and recorded in the report; replay continues
/// with the next move.
///
/// # Errors
///
/// Fails only if the configuration cannot produce a startable game.
#[instrument(skip(config, moves), fields(count = moves.len()))]
pub fn replay(config: &GameConfig, moves: &[Position]) -> GameResult<ReplayReport> {
    let mut game = config.build_game()?;
    game.start()?;

    let mut rejected = Vec::new();
    for &position in moves {
        if let Err(e) = game.make_move(position) {
            warn!(%position, error = %e.kind(), "Skipping rejected move");
            rejected.push(RejectedMove {
                position,
                reason: e.kind().to_string(),
            });
        }
    }

    let status = game.phase();
    info!(%status, accepted = game.turn_counter(), "Replay finished");

    Ok(ReplayReport {
        snapshot: game.snapshot(),
        status,
        winner: game.winner().ok().cloned(),
        whose_turn: if status.is_terminal() {
            None
        } else {
            game.whose_turn().ok().cloned()
        },
        accepted: game.turn_counter(),
        rejected,
    })
}

impl fmt::Display for ReplayReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rejected in &self.rejected {
            writeln!(f, "rejected {}: {}", rejected.position, rejected.reason)?;
        }
        writeln!(f, "{}", self.snapshot)?;
        writeln!(f)?;
        match (&self.winner, &self.whose_turn) {
            (Some(winner), _) => write!(f, "{} wins after {} moves", winner, self.accepted),
            (None, Some(next)) => write!(f, "{}, {} to move", self.status, next),
            (None, None) => write!(f, "{} after {} moves", self.status, self.accepted),
        }
    }
}
