//! Application state and input handling.

use super::geometry::terminal_to_board;
use super::input::{key_action, KeyAction};
use crate::config::Palette;
use crossterm::event::KeyCode;
use ratatui::layout::Rect;
use tictac_rules::{Game, PointerOutcome, RoundResult};
use tracing::{debug, instrument};

/// Whether the event loop keeps running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep going.
    Continue,
    /// Leave the event loop.
    Quit,
}

/// Main application state.
///
/// Owns the game; rendering only reads it through [`App::game`].
#[derive(Debug)]
pub struct App {
    game: Game,
    palette: Palette,
    board_area: Rect,
    status_message: String,
}

impl App {
    /// Creates a new application around a fresh game.
    pub fn new(game: Game, palette: Palette) -> Self {
        let status_message = turn_message(&game);
        Self {
            game,
            palette,
            board_area: Rect::default(),
            status_message,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Gets the color palette.
    pub fn palette(&self) -> Palette {
        self.palette
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Terminal area the board was last drawn in.
    pub fn board_area(&self) -> Rect {
        self.board_area
    }

    /// Records where the board was drawn so clicks can be mapped onto it.
    pub fn set_board_area(&mut self, area: Rect) {
        self.board_area = area;
    }

    /// Handles a left click at terminal `(column, row)`.
    ///
    /// Returns `None` when the click missed the board during play. Once a
    /// round is over a click anywhere starts the next one.
    #[instrument(skip(self))]
    pub fn handle_click(&mut self, column: u16, row: u16) -> Option<PointerOutcome> {
        let board_size = self.game.board_size();
        let outcome = match terminal_to_board(self.board_area, column, row, board_size) {
            Some((x, y)) => self.game.on_pointer_down(x, y),
            None if self.round_over() => self.game.advance_round()?,
            None => {
                debug!("Click outside board");
                return None;
            }
        };
        self.apply(outcome);
        Some(outcome)
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) -> Flow {
        match key_action(key) {
            KeyAction::Quit => return Flow::Quit,
            KeyAction::Select(position) => {
                let outcome = self.game.on_cell_selected(position);
                self.apply(outcome);
            }
            KeyAction::NextRound => {
                if let Some(outcome) = self.game.advance_round() {
                    self.apply(outcome);
                }
            }
            KeyAction::Ignore => {}
        }
        Flow::Continue
    }

    fn round_over(&self) -> bool {
        self.game.state().round_result().is_terminal()
    }

    /// Updates the status line for an engine outcome.
    fn apply(&mut self, outcome: PointerOutcome) {
        debug!(?outcome, "Applying outcome");
        self.status_message = match outcome {
            PointerOutcome::Placed {
                result: RoundResult::InProgress,
                ..
            }
            | PointerOutcome::NewRound { .. } => turn_message(&self.game),
            PointerOutcome::Placed { result, .. } => {
                format!("{} Click or press N for the next round.", result.headline())
            }
            PointerOutcome::Ignored(err) => format!("{}. {}", err, turn_message(&self.game)),
        };
    }
}

fn turn_message(game: &Game) -> String {
    let state = game.state();
    format!(
        "Round {}: {} to move",
        state.round(),
        state.current_player().label()
    )
}
