//! Hash-map backed ledger for square grids.

use super::{Player, Position};
use std::collections::{HashMap, HashSet};
use std::hash::Hash;
use strictly_board::{
    BoardPlayer, BoardPosition, GameError, GameErrorKind, GameResult, StateSpace,
    checked_side_len,
};
use tracing::{debug, instrument};

/// Lowest coordinate on a tic-tac-toe board.
pub const TIC_TAC_TOE_MIN: i32 = 0;

/// Highest coordinate on a tic-tac-toe board.
pub const TIC_TAC_TOE_MAX: i32 = 2;

/// Ledger of claimed cells on a `[min, max]²` grid.
#[derive(Debug, Clone)]
pub struct GridStateSpace<M = Position, P = Player> {
    min: i32,
    max: i32,
    moves: HashMap<M, P>,
}

impl<M, P> GridStateSpace<M, P> {
    /// Creates an empty ledger for the board `[min, max]²`.
    ///
    /// # Errors
    ///
    /// Returns [`GameErrorKind::InvalidBounds`] if `min > max` or the board
    /// would span more than [`strictly_board::MAX_SIDE_LEN`] cells per side.
    #[instrument]
    pub fn new(min: i32, max: i32) -> GameResult<Self> {
        if checked_side_len(min, max).is_none() {
            return Err(GameError::new(GameErrorKind::InvalidBounds { min, max }));
        }
        Ok(Self {
            min,
            max,
            moves: HashMap::new(),
        })
    }

    /// Creates an empty 3×3 ledger.
    pub fn tic_tac_toe() -> Self {
        Self {
            min: TIC_TAC_TOE_MIN,
            max: TIC_TAC_TOE_MAX,
            moves: HashMap::new(),
        }
    }
}

impl<M: Eq + Hash, P: PartialEq> PartialEq for GridStateSpace<M, P> {
    fn eq(&self, other: &Self) -> bool {
        self.min == other.min && self.max == other.max && self.moves == other.moves
    }
}

impl<M: Eq + Hash, P: Eq> Eq for GridStateSpace<M, P> {}

impl<M, P> Default for GridStateSpace<M, P> {
    fn default() -> Self {
        Self::tic_tac_toe()
    }
}

impl<M: BoardPosition, P: BoardPlayer> StateSpace for GridStateSpace<M, P> {
    type Position = M;
    type Player = P;

    #[instrument(skip(self))]
    fn record_move(&mut self, position: M, player: P) {
        debug!(?position, player = player.display_name(), "Recording move");
        self.moves.insert(position, player);
    }

    fn all_moves(&self) -> HashSet<M> {
        self.moves.keys().copied().collect()
    }

    #[instrument(skip(self))]
    fn moves_by(&self, player: &P) -> HashSet<M> {
        self.moves
            .iter()
            .filter(|(_, owner)| *owner == player)
            .map(|(position, _)| *position)
            .collect()
    }

    fn is_occupied(&self, position: &M) -> bool {
        self.moves.contains_key(position)
    }

    fn player_at(&self, position: &M) -> Option<&P> {
        self.moves.get(position)
    }

    #[instrument(skip(self))]
    fn available_moves(&self) -> HashSet<M> {
        (self.min..=self.max)
            .flat_map(|row| (self.min..=self.max).map(move |column| M::at(row, column)))
            .filter(|position| !self.moves.contains_key(position))
            .collect()
    }

    fn min_bound(&self) -> i32 {
        self.min
    }

    fn max_bound(&self) -> i32 {
        self.max
    }

    fn cleared(&self) -> Self {
        Self {
            min: self.min,
            max: self.max,
            moves: HashMap::new(),
        }
    }

    fn move_count(&self) -> usize {
        self.moves.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_board::MAX_SIDE_LEN;

    type Space = GridStateSpace;

    #[test]
    fn test_empty_board_has_nine_available_moves() {
        let space = Space::tic_tac_toe();
        assert_eq!(space.available_moves().len(), 9);
        assert!(space.all_moves().is_empty());
        assert_eq!(space.side_len(), 3);
    }

    #[test]
    fn test_record_and_query() {
        let mut space = Space::default();
        space.record_move(Position::new(0, 0), Player::x());
        space.record_move(Position::new(1, 1), Player::o());
        space.record_move(Position::new(2, 2), Player::x());

        assert!(space.is_occupied(&Position::new(1, 1)));
        assert!(!space.is_occupied(&Position::new(0, 1)));
        assert_eq!(space.player_at(&Position::new(1, 1)), Some(&Player::o()));
        assert_eq!(space.player_at(&Position::new(0, 1)), None);
        assert_eq!(space.all_moves().len(), 3);
        assert_eq!(space.available_moves().len(), 6);

        let by_x = space.moves_by(&Player::x());
        assert_eq!(by_x, HashSet::from([Position::new(0, 0), Position::new(2, 2)]));
    }

    #[test]
    fn test_moves_by_compares_display_names() {
        let mut space = Space::default();
        space.record_move(Position::new(0, 0), Player::new("Alice"));
        assert_eq!(space.moves_by(&Player::new("Alice")).len(), 1);
        assert!(space.moves_by(&Player::new("Bob")).is_empty());
    }

    #[test]
    fn test_duplicate_record_overwrites() {
        let mut space = Space::default();
        space.record_move(Position::new(0, 0), Player::x());
        space.record_move(Position::new(0, 0), Player::o());
        assert_eq!(space.player_at(&Position::new(0, 0)), Some(&Player::o()));
        assert_eq!(space.move_count(), 1);
    }

    #[test]
    fn test_available_moves_excludes_claimed() {
        let mut space = Space::default();
        space.record_move(Position::new(0, 0), Player::x());
        let available = space.available_moves();
        assert!(!available.contains(&Position::new(0, 0)));
        assert!(available.contains(&Position::new(2, 2)));
    }

    #[test]
    fn test_custom_bounds() {
        let space = Space::new(1, 4).unwrap();
        assert_eq!(space.min_bound(), 1);
        assert_eq!(space.max_bound(), 4);
        assert_eq!(space.available_moves().len(), 16);
        assert!(space.contains(&Position::new(4, 1)));
        assert!(!space.contains(&Position::new(0, 1)));
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let err = Space::new(3, 1).unwrap_err();
        assert_eq!(err.kind(), &GameErrorKind::InvalidBounds { min: 3, max: 1 });
    }

    #[test]
    fn test_oversized_bounds_rejected() {
        let err = Space::new(i32::MIN, i32::MAX).unwrap_err();
        assert_eq!(
            err.kind(),
            &GameErrorKind::InvalidBounds {
                min: i32::MIN,
                max: i32::MAX
            }
        );
        assert!(Space::new(0, MAX_SIDE_LEN as i32).is_err());
        assert!(Space::new(0, MAX_SIDE_LEN as i32 - 1).is_ok());
    }

    #[test]
    fn test_bounds_at_integer_edge() {
        let space = Space::new(i32::MAX - 2, i32::MAX).unwrap();
        assert_eq!(space.side_len(), 3);
        assert_eq!(space.available_moves().len(), 9);
    }

    #[test]
    fn test_cleared_keeps_bounds() {
        let mut space = Space::new(0, 3).unwrap();
        space.record_move(Position::new(3, 3), Player::x());
        let fresh = space.cleared();
        assert_eq!(fresh.max_bound(), 3);
        assert_eq!(fresh.move_count(), 0);
    }
}
