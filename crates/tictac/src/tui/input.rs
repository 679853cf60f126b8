//! Keyboard bindings.

use crossterm::event::KeyCode;
use tictac_rules::Position;

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Leave the game.
    Quit,
    /// Play the cell numbered 1-9, row-major.
    Select(Position),
    /// Clear a finished board.
    NextRound,
    /// Unbound key.
    Ignore,
}

/// Maps a key to its action.
pub fn key_action(key: KeyCode) -> KeyAction {
    match key {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('n') | KeyCode::Char('N') => KeyAction::NextRound,
        KeyCode::Char(c) => c
            .to_digit(10)
            .and_then(Position::from_digit)
            .map_or(KeyAction::Ignore, KeyAction::Select),
        _ => KeyAction::Ignore,
    }
}
