//! Result consistency invariant: the stored result matches the board.

use super::Invariant;
use crate::rules::{has_won, is_full};
use crate::{GameState, RoundResult};

/// Invariant: `round_result` agrees with a fresh evaluation of the board.
///
/// The last mover is the only player who can hold a line, and a tie is
/// only ever recorded on a full board.
pub struct ResultConsistentInvariant;

impl Invariant<GameState> for ResultConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let board = state.board();
        let Some(last) = state.history().last() else {
            return state.round_result() == RoundResult::InProgress;
        };

        if has_won(board, last.player.opponent()) {
            return false;
        }

        let expected = if has_won(board, last.player) {
            RoundResult::win_for(last.player)
        } else if is_full(board) {
            RoundResult::Tie
        } else {
            RoundResult::InProgress
        };

        state.round_result() == expected
    }

    fn description() -> &'static str {
        "Round result matches the board (tie only when full)"
    }
}
