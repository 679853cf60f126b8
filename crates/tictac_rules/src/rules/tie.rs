//! Tie detection logic for tic-tac-toe.

use crate::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all nine squares occupied).
///
/// Only a full board can be a tie; a board with any empty square is still
/// in play, even when neither player can still complete a line.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_eight_of_nine_not_full() {
        let mut board = Board::new();
        for pos in &Position::ALL[..8] {
            board.set(*pos, Square::Occupied(Player::X));
        }
        assert!(!is_full(&board));
    }

    #[test]
    fn test_last_square_empty_anywhere() {
        for hole in Position::ALL {
            let mut board = Board::new();
            for pos in Position::ALL.into_iter().filter(|p| *p != hole) {
                board.set(pos, Square::Occupied(Player::O));
            }
            assert!(!is_full(&board), "{hole} left empty");
        }
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for pos in Position::ALL {
            board.set(pos, Square::Occupied(Player::X));
        }
        assert!(is_full(&board));
    }
}
