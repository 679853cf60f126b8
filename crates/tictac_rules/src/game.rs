//! Game state and the rules engine that owns it.

use super::action::{Move, MoveError};
use super::invariants::assert_invariants;
use super::mapper::BOARD_SIZE_PX;
use super::rules;
use super::types::{Board, Player, RoundResult, Scores, Square};
use super::Position;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Complete game state, across rounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) current_player: Player,
    pub(crate) starting_player: Player,
    pub(crate) round_result: RoundResult,
    pub(crate) scores: Scores,
    pub(crate) history: Vec<Move>,
    pub(crate) round: u32,
}

impl GameState {
    /// Creates the initial state: empty board, X to start, no scores.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            starting_player: Player::X,
            round_result: RoundResult::InProgress,
            scores: Scores::default(),
            history: Vec::new(),
            round: 1,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move next.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the player who opened the current round.
    pub fn starting_player(&self) -> Player {
        self.starting_player
    }

    /// Returns the result of the current round.
    pub fn round_result(&self) -> RoundResult {
        self.round_result
    }

    /// Returns the scoreboard.
    pub fn scores(&self) -> &Scores {
        &self.scores
    }

    /// Returns the moves of the current round, in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the 1-based round number.
    pub fn round(&self) -> u32 {
        self.round
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only snapshot handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Projection {
    /// Cell contents, `cells[row][col]`.
    pub cells: [[Square; 3]; 3],
    /// Player to move next.
    pub current_player: Player,
    /// Player who opened the current round.
    pub starting_player: Player,
    /// Result of the current round.
    pub round_result: RoundResult,
    /// Scoreboard.
    pub scores: Scores,
    /// 1-based round number.
    pub round: u32,
}

/// Tic-tac-toe rules engine.
///
/// Owns the [`GameState`] for the life of the process. Callers mutate it
/// only through [`Game::place_mark`], [`Game::start_new_round`] and the
/// pointer entry points.
#[derive(Debug, Clone)]
pub struct Game {
    state: GameState,
    board_size: u32,
}

impl Game {
    /// Creates a new game on a board of the default pixel size.
    #[instrument]
    pub fn new() -> Self {
        Self::with_board_size(BOARD_SIZE_PX)
    }

    /// Creates a new game whose pointer input uses a board of `board_size` pixels.
    #[instrument]
    pub fn with_board_size(board_size: u32) -> Self {
        Self {
            state: GameState::new(),
            board_size,
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the pixel size of the board used to map pointer input.
    pub fn board_size(&self) -> u32 {
        self.board_size
    }

    /// Places the current player's mark at `(row, col)`.
    ///
    /// # Errors
    ///
    /// - [`MoveError::RoundOver`] once the round has a result
    /// - [`MoveError::OutOfBounds`] if `row` or `col` is not in 0..3
    /// - [`MoveError::CellOccupied`] if the cell already holds a mark
    ///
    /// A rejected move leaves the state untouched.
    #[instrument(skip(self), fields(player = ?self.state.current_player))]
    pub fn place_mark(&mut self, row: usize, col: usize) -> Result<(), MoveError> {
        if self.state.round_result.is_terminal() {
            return Err(MoveError::RoundOver);
        }
        let position =
            Position::from_row_col(row, col).ok_or(MoveError::OutOfBounds { row, col })?;
        self.place(position)
    }

    /// Places the current player's mark at a named position.
    ///
    /// Same contract as [`Game::place_mark`], minus the bounds check.
    #[instrument(skip(self), fields(player = ?self.state.current_player))]
    pub fn place(&mut self, position: Position) -> Result<(), MoveError> {
        if self.state.round_result.is_terminal() {
            return Err(MoveError::RoundOver);
        }
        if !self.state.board.is_empty(position) {
            return Err(MoveError::CellOccupied(position));
        }

        let mover = self.state.current_player;
        self.state.board.set(position, Square::Occupied(mover));
        self.state.history.push(Move::new(mover, position));
        self.state.current_player = mover.opponent();
        debug!(%position, %mover, "Mark placed");

        self.update_result(mover);
        assert_invariants(&self.state);

        Ok(())
    }

    /// Evaluates the board after `mover`'s placement and scores a finished round.
    fn update_result(&mut self, mover: Player) {
        let result = rules::evaluate(&self.state.board, mover);
        self.state.round_result = result;

        if result.is_terminal() {
            self.state.scores.record(result);
            debug!(board = %self.state.board.display(), "Final board");
            info!(
                ?result,
                round = self.state.round,
                x_wins = self.state.scores.x_wins(),
                o_wins = self.state.scores.o_wins(),
                ties = self.state.scores.ties(),
                rounds_played = self.state.scores.rounds_played(),
                "Round finished"
            );
        }
    }

    /// Clears the board for the next round, handing the opening move to the
    /// player who did not start the previous one. Scores are kept.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::RoundInProgress`] if the current round has no
    /// result yet.
    #[instrument(skip(self), fields(round = self.state.round))]
    pub fn start_new_round(&mut self) -> Result<(), MoveError> {
        if !self.state.round_result.is_terminal() {
            return Err(MoveError::RoundInProgress);
        }

        let starting = self.state.starting_player.opponent();
        self.state.board = Board::new();
        self.state.history.clear();
        self.state.starting_player = starting;
        self.state.current_player = starting;
        self.state.round_result = RoundResult::InProgress;
        self.state.round += 1;

        info!(round = self.state.round, %starting, "New round started");
        Ok(())
    }

    /// Snapshot of everything the renderer needs.
    pub fn projection(&self) -> Projection {
        Projection {
            cells: self.state.board.rows(),
            current_player: self.state.current_player,
            starting_player: self.state.starting_player,
            round_result: self.state.round_result,
            scores: self.state.scores,
            round: self.state.round,
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(game: &mut Game, moves: &[(usize, usize)]) {
        for &(row, col) in moves {
            game.place_mark(row, col).expect("legal move");
        }
    }

    #[test]
    fn test_new_game() {
        let game = Game::new();
        let state = game.state();
        assert_eq!(state.current_player(), Player::X);
        assert_eq!(state.starting_player(), Player::X);
        assert_eq!(state.round_result(), RoundResult::InProgress);
        assert_eq!(state.scores().rounds_played(), 0);
        assert_eq!(state.round(), 1);
        assert_eq!(game.board_size(), BOARD_SIZE_PX);
    }

    #[test]
    fn test_place_flips_turn() {
        let mut game = Game::new();
        game.place_mark(1, 1).unwrap();
        assert_eq!(game.state().current_player(), Player::O);
        assert_eq!(game.state().board().get(Position::Center), Square::Occupied(Player::X));
    }

    #[test]
    fn test_rejected_move_keeps_turn() {
        let mut game = Game::new();
        game.place_mark(0, 0).unwrap();
        let before = game.state().clone();

        assert_eq!(game.place_mark(0, 0), Err(MoveError::CellOccupied(Position::TopLeft)));
        assert_eq!(game.place_mark(3, 0), Err(MoveError::OutOfBounds { row: 3, col: 0 }));
        assert_eq!(game.state(), &before);
    }

    #[test]
    fn test_start_new_round_requires_result() {
        let mut game = Game::new();
        game.place_mark(0, 0).unwrap();
        assert_eq!(game.start_new_round(), Err(MoveError::RoundInProgress));
        assert_eq!(game.state().history().len(), 1);
    }

    #[test]
    fn test_o_win_scores_for_o() {
        let mut game = Game::new();
        // X: (0,0) (0,1) (2,2)   O: (1,0) (1,1) (1,2)
        play(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (1, 2)]);
        assert_eq!(game.state().round_result(), RoundResult::OWins);
        assert_eq!(game.state().scores().o_wins(), 1);
        assert_eq!(game.state().scores().x_wins(), 0);
    }

    #[test]
    fn test_projection_mirrors_state() {
        let mut game = Game::new();
        play(&mut game, &[(0, 2), (2, 0)]);
        let projection = game.projection();
        assert_eq!(projection.cells[0][2], Square::Occupied(Player::X));
        assert_eq!(projection.cells[2][0], Square::Occupied(Player::O));
        assert_eq!(projection.cells[1][1], Square::Empty);
        assert_eq!(projection.current_player, Player::X);
        assert_eq!(projection.round_result, RoundResult::InProgress);
        assert_eq!(projection.round, 1);
    }
}
