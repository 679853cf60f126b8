//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! board storage so the engine and the invariant checks share them.

pub mod tie;
pub mod win;

pub use tie::is_full;
pub use win::{has_won, winning_line, LINES};

use crate::{Board, Player, RoundResult};
use tracing::instrument;

/// Evaluates the board after `mover` has placed a mark.
///
/// Only the mover is checked for a line, since a move cannot complete a
/// line for the opponent. Without a line, a full board is a tie.
#[instrument(skip(board))]
pub fn evaluate(board: &Board, mover: Player) -> RoundResult {
    if has_won(board, mover) {
        RoundResult::win_for(mover)
    } else if is_full(board) {
        RoundResult::Tie
    } else {
        RoundResult::InProgress
    }
}
