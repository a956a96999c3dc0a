//! Turn-based engine for square-board line games.
//!
//! The engine owns a [`StateSpace`] ledger and the turn/outcome state. It
//! validates moves through [`MoveContract`], records them for the player
//! whose turn it is, and checks the mover for a completed line.

use super::contracts::{Contract, MoveContract};
use super::{DiagonalRule, GridStateSpace, rules};
use strictly_board::{
    BoardGame, BoardPlayer, BoardPosition, GameError, GameErrorKind, GameResult, PlayerRejection,
    Snapshot, StartRejection, StateSpace,
};
use tracing::{debug, info, instrument, warn};

/// Engine for a two-player game on any square [`StateSpace`].
#[derive(Debug, Clone)]
pub struct SquareBoardGame<S: StateSpace> {
    players: Option<[S::Player; 2]>,
    state_space: S,
    turn_counter: usize,
    winner: Option<S::Player>,
    started: bool,
    diagonal_rule: DiagonalRule,
}

/// Tic-tac-toe on a 3×3 grid.
pub type TicTacToeGame = SquareBoardGame<GridStateSpace>;

impl<S: StateSpace> SquareBoardGame<S> {
    /// Creates an unstarted engine without players.
    ///
    /// The engine reuses `state_space`'s bounds for every game; any moves
    /// already in it are discarded when the game starts.
    #[instrument(skip(state_space))]
    pub fn new(state_space: S) -> Self {
        Self {
            players: None,
            state_space: state_space.cleared(),
            turn_counter: 0,
            winner: None,
            started: false,
            diagonal_rule: DiagonalRule::default(),
        }
    }

    /// Selects how the second diagonal is scored.
    pub fn with_diagonal_rule(mut self, rule: DiagonalRule) -> Self {
        self.diagonal_rule = rule;
        self
    }

    /// Number of accepted moves since the last start.
    pub fn turn_counter(&self) -> usize {
        self.turn_counter
    }

    /// The assigned player pair, first mover first.
    pub fn players(&self) -> Option<&[S::Player; 2]> {
        self.players.as_ref()
    }

    /// The ledger of the current game.
    pub fn state_space(&self) -> &S {
        &self.state_space
    }

    /// The active second-diagonal rule.
    pub fn diagonal_rule(&self) -> DiagonalRule {
        self.diagonal_rule
    }

    /// Validates a prospective player list, returning the pair on success.
    #[instrument(skip(players), fields(count = players.len()))]
    fn validate_players(players: Vec<S::Player>) -> GameResult<[S::Player; 2]> {
        let pair: [S::Player; 2] = players
            .try_into()
            .map_err(|rejected: Vec<S::Player>| PlayerRejection::WrongCount(rejected.len()))?;

        if let Some(slot) = pair.iter().position(|p| p.display_name().is_empty()) {
            return Err(PlayerRejection::EmptyDisplayName(slot).into());
        }
        if pair[0].display_name() == pair[1].display_name() {
            return Err(PlayerRejection::DuplicateDisplayName(pair[0].display_name().to_string()).into());
        }
        Ok(pair)
    }

    /// Records `position` for the current player and scores the move.
    fn accept_move(&mut self, position: S::Position) -> GameResult<()> {
        let player = self.whose_turn()?.clone();
        self.state_space.record_move(position, player.clone());

        if rules::has_won(&self.state_space, &player, self.diagonal_rule) {
            info!(winner = player.display_name(), turn = self.turn_counter, "Winner declared");
            self.winner = Some(player);
        }
        self.turn_counter += 1;
        Ok(())
    }
}

impl<S: StateSpace + Default> Default for SquareBoardGame<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S: StateSpace> BoardGame for SquareBoardGame<S> {
    type Position = S::Position;
    type Player = S::Player;

    #[instrument(skip(self, players))]
    fn set_players(&mut self, players: Vec<S::Player>) -> GameResult<()> {
        let pair = Self::validate_players(players).inspect_err(|e| {
            warn!(error = %e, "Rejected player setup");
        })?;
        info!(
            first = pair[0].display_name(),
            second = pair[1].display_name(),
            "Players assigned"
        );
        self.players = Some(pair);
        Ok(())
    }

    #[instrument(skip(self))]
    fn start(&mut self) -> GameResult<()> {
        if self.players.is_none() {
            warn!("Start requested without players");
            return Err(StartRejection::PlayersNotSet.into());
        }
        if self.started {
            warn!("Start requested while already started");
            return Err(StartRejection::AlreadyStarted.into());
        }
        self.reset();
        self.started = true;
        info!("Game started");
        Ok(())
    }

    #[instrument(skip(self))]
    fn reset(&mut self) {
        self.state_space = self.state_space.cleared();
        self.turn_counter = 0;
        self.winner = None;
        self.started = false;
        debug!("Game reset");
    }

    #[instrument(skip(self), fields(turn = self.turn_counter))]
    fn make_move(&mut self, position: S::Position) -> GameResult<()> {
        #[cfg(debug_assertions)]
        let before = self.clone();

        if let Err(reason) = MoveContract::pre(self, &position) {
            warn!(?position, %reason, "Rejected move");
            return Err(reason.into());
        }
        self.accept_move(position)?;
        debug!(?position, "Move accepted");

        if self.is_draw() {
            info!("Board full without a winner; game is a draw");
        }

        #[cfg(debug_assertions)]
        if let Err(violations) = MoveContract::post(&before, self) {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            panic!("Postcondition failed after {position:?}: {descriptions}");
        }

        Ok(())
    }

    fn is_draw(&self) -> bool {
        rules::is_draw(&self.state_space, self.exists_winner())
    }

    fn exists_winner(&self) -> bool {
        self.winner.is_some()
    }

    #[instrument(skip(self))]
    fn winner(&self) -> GameResult<&S::Player> {
        self.winner
            .as_ref()
            .ok_or_else(|| GameError::new(GameErrorKind::NoWinner))
    }

    fn whose_turn(&self) -> GameResult<&S::Player> {
        self.players
            .as_ref()
            .map(|pair| &pair[self.turn_counter % 2])
            .ok_or_else(|| GameError::new(GameErrorKind::PlayersNotSet))
    }

    #[instrument(skip(self))]
    fn snapshot(&self) -> Snapshot<S::Player> {
        let space = &self.state_space;
        Snapshot::from_fn(space.min_bound(), space.max_bound(), |row, column| {
            let position = <S::Position as BoardPosition>::at(row, column);
            if space.is_occupied(&position) {
                space.player_at(&position).cloned()
            } else {
                None
            }
        })
    }

    fn is_started(&self) -> bool {
        self.started
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};
    use strictly_board::{GamePhase, MoveRejection};

    fn started_game() -> TicTacToeGame {
        let mut game = TicTacToeGame::default();
        game.set_players(vec![Player::x(), Player::o()]).unwrap();
        game.start().unwrap();
        game
    }

    fn play(game: &mut TicTacToeGame, moves: &[(i32, i32)]) {
        for &(row, column) in moves {
            game.make_move(Position::new(row, column)).unwrap();
        }
    }

    #[test]
    fn test_new_engine_is_unstarted() {
        let game = TicTacToeGame::default();
        assert_eq!(game.phase(), GamePhase::Unstarted);
        assert!(!game.is_started());
        assert!(game.players().is_none());
        assert_eq!(game.turn_counter(), 0);
    }

    #[test]
    fn test_set_players_wrong_count() {
        let mut game = TicTacToeGame::default();
        let err = game.set_players(vec![Player::x()]).unwrap_err();
        assert_eq!(
            err.kind(),
            &GameErrorKind::InvalidPlayers(PlayerRejection::WrongCount(1))
        );
        let err = game
            .set_players(vec![Player::x(), Player::o(), Player::new("Z")])
            .unwrap_err();
        assert_eq!(
            err.kind(),
            &GameErrorKind::InvalidPlayers(PlayerRejection::WrongCount(3))
        );
    }

    #[test]
    fn test_set_players_empty_name() {
        let mut game = TicTacToeGame::default();
        let err = game.set_players(vec![Player::x(), Player::new("")]).unwrap_err();
        assert_eq!(
            err.kind(),
            &GameErrorKind::InvalidPlayers(PlayerRejection::EmptyDisplayName(1))
        );
    }

    #[test]
    fn test_set_players_duplicate_names_keeps_engine_unstarted() {
        let mut game = TicTacToeGame::default();
        let err = game.set_players(vec![Player::x(), Player::x()]).unwrap_err();
        assert!(matches!(
            err.kind(),
            GameErrorKind::InvalidPlayers(PlayerRejection::DuplicateDisplayName(_))
        ));
        assert_eq!(game.phase(), GamePhase::Unstarted);
        assert!(game.players().is_none());
    }

    #[test]
    fn test_start_without_players() {
        let mut game = TicTacToeGame::default();
        let err = game.start().unwrap_err();
        assert_eq!(
            err.kind(),
            &GameErrorKind::InvalidStart(StartRejection::PlayersNotSet)
        );
    }

    #[test]
    fn test_start_twice() {
        let mut game = started_game();
        let err = game.start().unwrap_err();
        assert_eq!(
            err.kind(),
            &GameErrorKind::InvalidStart(StartRejection::AlreadyStarted)
        );
    }

    #[test]
    fn test_whose_turn_before_players() {
        let game = TicTacToeGame::default();
        assert_eq!(game.whose_turn().unwrap_err().kind(), &GameErrorKind::PlayersNotSet);
    }

    #[test]
    fn test_whose_turn_before_start_is_first_player() {
        let mut game = TicTacToeGame::default();
        game.set_players(vec![Player::x(), Player::o()]).unwrap();
        assert_eq!(game.whose_turn().unwrap(), &Player::x());
    }

    #[test]
    fn test_move_before_start() {
        let mut game = TicTacToeGame::default();
        game.set_players(vec![Player::x(), Player::o()]).unwrap();
        let err = game.make_move(Position::new(0, 0)).unwrap_err();
        assert_eq!(err.kind(), &GameErrorKind::InvalidMove(MoveRejection::NotStarted));
    }

    #[test]
    fn test_move_out_of_bounds() {
        let mut game = started_game();
        for (row, column) in [(3, 0), (0, 3), (-1, 1), (1, -1)] {
            let err = game.make_move(Position::new(row, column)).unwrap_err();
            assert!(matches!(
                err.kind(),
                GameErrorKind::InvalidMove(MoveRejection::OutOfBounds { .. })
            ));
        }
        assert_eq!(game.turn_counter(), 0);
    }

    #[test]
    fn test_occupied_move_is_rejected_and_state_unchanged() {
        let mut game = started_game();
        game.make_move(Position::new(1, 1)).unwrap();
        let before = game.snapshot();

        let err = game.make_move(Position::new(1, 1)).unwrap_err();
        assert_eq!(
            err.kind(),
            &GameErrorKind::InvalidMove(MoveRejection::Occupied { row: 1, column: 1 })
        );
        assert_eq!(game.turn_counter(), 1);
        assert_eq!(game.whose_turn().unwrap(), &Player::o());
        assert_eq!(game.snapshot(), before);
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = started_game();
        let mut seen = Vec::new();
        for (row, column) in [(0, 0), (1, 1), (2, 2), (0, 2)] {
            seen.push(game.whose_turn().unwrap().clone());
            game.make_move(Position::new(row, column)).unwrap();
        }
        assert_eq!(seen, vec![Player::x(), Player::o(), Player::x(), Player::o()]);
        assert_eq!(game.turn_counter(), 4);
    }

    #[test]
    fn test_winner_and_terminal_state() {
        let mut game = started_game();
        play(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);

        assert!(game.exists_winner());
        assert_eq!(game.winner().unwrap(), &Player::x());
        assert!(!game.is_draw());
        assert!(game.is_ended());
        assert_eq!(game.phase(), GamePhase::Won);
        assert_eq!(game.turn_counter(), 5);

        let err = game.make_move(Position::new(2, 2)).unwrap_err();
        assert_eq!(err.kind(), &GameErrorKind::InvalidMove(MoveRejection::GameEnded));
    }

    #[test]
    fn test_winner_unavailable_in_progress() {
        let game = started_game();
        assert_eq!(game.winner().unwrap_err().kind(), &GameErrorKind::NoWinner);
    }

    #[test]
    fn test_snapshot_reflects_moves() {
        let mut game = started_game();
        play(&mut game, &[(0, 2), (2, 0)]);
        let snapshot = game.snapshot();
        assert_eq!(snapshot.side_len(), 3);
        assert_eq!(snapshot.cell(0, 2), Some(&Player::x()));
        assert_eq!(snapshot.cell(2, 0), Some(&Player::o()));
        assert_eq!(snapshot.occupied_count(), 2);
    }

    #[test]
    fn test_reset_keeps_players() {
        let mut game = started_game();
        play(&mut game, &[(0, 0), (1, 1)]);
        game.reset();

        assert_eq!(game.phase(), GamePhase::Unstarted);
        assert_eq!(game.turn_counter(), 0);
        assert!(game.snapshot().is_clear());
        assert!(game.players().is_some());
        game.start().unwrap();
        assert_eq!(game.whose_turn().unwrap(), &Player::x());
    }

    #[test]
    fn test_larger_board_uses_state_space_bounds() {
        let space: GridStateSpace = GridStateSpace::new(0, 3).unwrap();
        let mut game = SquareBoardGame::new(space);
        game.set_players(vec![Player::x(), Player::o()]).unwrap();
        game.start().unwrap();

        // X takes the anti-diagonal while O never completes a line.
        let moves = [(0, 3), (1, 0), (1, 2), (2, 0), (2, 1), (3, 1), (3, 0)];
        for (row, column) in moves {
            game.make_move(Position::new(row, column)).unwrap();
        }
        assert_eq!(game.winner().unwrap(), &Player::x());
        assert_eq!(game.snapshot().side_len(), 4);
    }
}
