//! Alternating turn invariant: players take turns, starting with the opener.

use super::Invariant;
use crate::GameState;

/// Invariant: moves alternate between players.
///
/// The first move of a round belongs to the round's starting player, each
/// later move to the opponent of the one before it, and the player to move
/// is the opponent of the last mover.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        let mut expected = state.starting_player();

        for mov in state.history() {
            if mov.player != expected {
                return false;
            }
            expected = expected.opponent();
        }

        state.current_player() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns starting with the round's opener"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Game, Move, Player, Position};

    #[test]
    fn test_holds_across_rounds() {
        let mut game = Game::new();
        for pos in [
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
        ] {
            game.place(pos).unwrap();
        }
        game.start_new_round().unwrap();
        assert_eq!(game.state().starting_player(), Player::O);
        assert!(AlternatingTurnInvariant::holds(game.state()));

        game.place(Position::Center).unwrap();
        assert!(AlternatingTurnInvariant::holds(game.state()));
    }

    #[test]
    fn test_same_player_twice_violates() {
        let mut state = GameState::new();
        state.history.push(Move::new(Player::X, Position::TopLeft));
        state.history.push(Move::new(Player::X, Position::Center));
        assert!(!AlternatingTurnInvariant::holds(&state));
    }

    #[test]
    fn test_stale_current_player_violates() {
        let mut state = GameState::new();
        state.history.push(Move::new(Player::X, Position::TopLeft));
        // current_player was never flipped
        assert!(!AlternatingTurnInvariant::holds(&state));
    }
}
