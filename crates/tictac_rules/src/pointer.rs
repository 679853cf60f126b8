//! Entry points for the input-handling collaborator.
//!
//! A click either places a mark, is ignored, or (once a round is over)
//! starts the next round. Errors never cross this boundary; they are
//! reported back as [`PointerOutcome::Ignored`].

use super::action::MoveError;
use super::game::Game;
use super::mapper::pixel_to_cell;
use super::types::{Player, RoundResult};
use super::Position;
use tracing::{debug, instrument};

/// What a pointer press did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerOutcome {
    /// A mark was placed; `result` is the round result after the move.
    Placed {
        /// Cell that received the mark.
        position: Position,
        /// Player whose mark was placed.
        player: Player,
        /// Round result after the move.
        result: RoundResult,
    },
    /// The press was rejected and nothing changed.
    Ignored(MoveError),
    /// The finished round was cleared and a new one started.
    NewRound {
        /// Player who opens the new round.
        starting_player: Player,
    },
}

impl PointerOutcome {
    /// Returns true when the renderer has something new to draw.
    pub fn changed_state(&self) -> bool {
        !matches!(self, PointerOutcome::Ignored(_))
    }
}

impl Game {
    /// Handles a press at pixel `(x, y)` on the board.
    #[instrument(skip(self))]
    pub fn on_pointer_down(&mut self, x: u32, y: u32) -> PointerOutcome {
        if let Some(outcome) = self.advance_round() {
            return outcome;
        }
        let (row, col) = pixel_to_cell(x, y, self.board_size());
        match Position::from_row_col(row, col) {
            Some(position) => self.apply_selection(position),
            None => {
                let err = MoveError::OutOfBounds { row, col };
                debug!(%err, "Press ignored");
                PointerOutcome::Ignored(err)
            }
        }
    }

    /// Handles a cell chosen directly, e.g. from the keypad.
    #[instrument(skip(self))]
    pub fn on_cell_selected(&mut self, position: Position) -> PointerOutcome {
        if let Some(outcome) = self.advance_round() {
            return outcome;
        }
        self.apply_selection(position)
    }

    /// Starts the next round if the current one is over.
    ///
    /// Returns `None` while the round is still in play.
    #[instrument(skip(self))]
    pub fn advance_round(&mut self) -> Option<PointerOutcome> {
        if !self.state().round_result().is_terminal() {
            return None;
        }
        match self.start_new_round() {
            Ok(()) => Some(PointerOutcome::NewRound {
                starting_player: self.state().starting_player(),
            }),
            Err(err) => Some(PointerOutcome::Ignored(err)),
        }
    }

    fn apply_selection(&mut self, position: Position) -> PointerOutcome {
        let player = self.state().current_player();
        match self.place(position) {
            Ok(()) => PointerOutcome::Placed {
                position,
                player,
                result: self.state().round_result(),
            },
            Err(err) => {
                debug!(%err, "Selection ignored");
                PointerOutcome::Ignored(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapper::cell_to_pixel_center;

    fn click(game: &mut Game, row: usize, col: usize) -> PointerOutcome {
        let (x, y) = cell_to_pixel_center(row, col, game.board_size());
        game.on_pointer_down(x, y)
    }

    #[test]
    fn test_click_places_mark() {
        let mut game = Game::new();
        let outcome = game.on_pointer_down(250, 50);
        assert_eq!(
            outcome,
            PointerOutcome::Placed {
                position: Position::TopCenter,
                player: Player::X,
                result: RoundResult::InProgress,
            }
        );
        assert!(outcome.changed_state());
    }

    #[test]
    fn test_click_on_occupied_is_ignored() {
        let mut game = Game::new();
        click(&mut game, 1, 1);
        let outcome = click(&mut game, 1, 1);
        assert_eq!(outcome, PointerOutcome::Ignored(MoveError::CellOccupied(Position::Center)));
        assert!(!outcome.changed_state());
        assert_eq!(game.state().current_player(), Player::O);
    }

    #[test]
    fn test_click_outside_board_is_ignored() {
        let mut game = Game::new();
        let outcome = game.on_pointer_down(10, 900);
        assert_eq!(outcome, PointerOutcome::Ignored(MoveError::OutOfBounds { row: 4, col: 0 }));
        assert!(game.state().history().is_empty());
    }

    #[test]
    fn test_click_after_round_starts_next_round() {
        let mut game = Game::new();
        for (row, col) in [(0, 0), (1, 1), (0, 1), (1, 2)] {
            click(&mut game, row, col);
        }
        let last = click(&mut game, 0, 2);
        assert_eq!(
            last,
            PointerOutcome::Placed {
                position: Position::TopRight,
                player: Player::X,
                result: RoundResult::XWins,
            }
        );

        let next = click(&mut game, 2, 2);
        assert_eq!(next, PointerOutcome::NewRound { starting_player: Player::O });
        assert!(game.state().history().is_empty());
        assert_eq!(game.state().scores().x_wins(), 1);
    }

    #[test]
    fn test_advance_round_only_after_result() {
        let mut game = Game::new();
        game.on_cell_selected(Position::Center);
        assert_eq!(game.advance_round(), None);
        assert_eq!(game.state().round(), 1);

        // O takes the top row.
        for pos in [
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::BottomRight,
            Position::TopRight,
        ] {
            game.on_cell_selected(pos);
        }
        assert_eq!(game.state().round_result(), RoundResult::OWins);
        assert_eq!(
            game.advance_round(),
            Some(PointerOutcome::NewRound { starting_player: Player::O })
        );
        assert_eq!(game.state().round(), 2);
    }

    #[test]
    fn test_cell_selection_matches_click() {
        let mut game = Game::new();
        let outcome = game.on_cell_selected(Position::BottomLeft);
        assert!(matches!(outcome, PointerOutcome::Placed { position: Position::BottomLeft, .. }));
    }
}
