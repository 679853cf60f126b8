//! Core domain types for tic-tac-toe.

use super::position::Position;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Player {
    /// Player X (starts the first round).
    X,
    /// Player O.
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Signed value used by the shared line check: X is -1, O is +1.
    pub(crate) fn sign(self) -> i8 {
        match self {
            Player::X => -1,
            Player::O => 1,
        }
    }

    /// Seat label shown on the scoreboard.
    pub fn label(self) -> &'static str {
        match self {
            Player::X => "Player 1 (X)",
            Player::O => "Player 2 (O)",
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Signed value of the square: 0 when empty, otherwise the owner's sign.
    pub(crate) fn sign(self) -> i8 {
        match self {
            Square::Empty => 0,
            Square::Occupied(player) => player.sign(),
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub(crate) fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Returns the squares as three rows of three.
    pub fn rows(&self) -> [[Square; 3]; 3] {
        let s = &self.squares;
        [[s[0], s[1], s[2]], [s[3], s[4], s[5]], [s[6], s[7], s[8]]]
    }

    /// Formats the board as a human-readable string.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for (row, squares) in self.rows().iter().enumerate() {
            for (col, square) in squares.iter().enumerate() {
                let symbol = match square {
                    Square::Empty => ".",
                    Square::Occupied(Player::X) => "X",
                    Square::Occupied(Player::O) => "O",
                };
                result.push_str(symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of the current round.
///
/// A single enum keeps the finished states mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundResult {
    /// Moves are still being played.
    InProgress,
    /// X completed a line.
    XWins,
    /// O completed a line.
    OWins,
    /// The board filled up with no line.
    Tie,
}

impl RoundResult {
    /// The result of `player` completing a line.
    pub fn win_for(player: Player) -> Self {
        match player {
            Player::X => RoundResult::XWins,
            Player::O => RoundResult::OWins,
        }
    }

    /// Returns true once the round has ended.
    pub fn is_terminal(self) -> bool {
        self != RoundResult::InProgress
    }

    /// Returns the winner, if the round ended in a win.
    pub fn winner(self) -> Option<Player> {
        match self {
            RoundResult::XWins => Some(Player::X),
            RoundResult::OWins => Some(Player::O),
            RoundResult::InProgress | RoundResult::Tie => None,
        }
    }

    /// Headline text for a finished round.
    pub fn headline(self) -> String {
        match self {
            RoundResult::XWins => format!("Winner: {}", Player::X.label()),
            RoundResult::OWins => format!("Winner: {}", Player::O.label()),
            RoundResult::Tie => "It's a tie".to_string(),
            RoundResult::InProgress => "Round in progress".to_string(),
        }
    }
}

/// Score counters kept across rounds for the life of the process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    x_wins: u32,
    o_wins: u32,
    ties: u32,
}

impl Scores {
    /// Rounds won by X.
    pub fn x_wins(&self) -> u32 {
        self.x_wins
    }

    /// Rounds won by O.
    pub fn o_wins(&self) -> u32 {
        self.o_wins
    }

    /// Rounds that ended in a tie.
    pub fn ties(&self) -> u32 {
        self.ties
    }

    /// Total number of finished rounds.
    pub fn rounds_played(&self) -> u32 {
        self.x_wins + self.o_wins + self.ties
    }

    /// Counts a finished round. `InProgress` is not counted.
    #[instrument]
    pub(crate) fn record(&mut self, result: RoundResult) {
        match result {
            RoundResult::XWins => self.x_wins += 1,
            RoundResult::OWins => self.o_wins += 1,
            RoundResult::Tie => self.ties += 1,
            RoundResult::InProgress => {}
        }
    }
}
