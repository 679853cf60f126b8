//! Tic-tac-toe rules engine.
//!
//! Pure game logic with no I/O: a 3x3 board, turn management, win and tie
//! evaluation, a scoreboard that survives across rounds, and the mapping
//! between board pixels and grid cells used by a click-driven frontend.
//!
//! # Example
//!
//! ```
//! use tictac_rules::{Game, PointerOutcome, RoundResult};
//!
//! let mut game = Game::new();
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (1, 2), (0, 2)] {
//!     game.place_mark(row, col).unwrap();
//! }
//! assert_eq!(game.state().round_result(), RoundResult::XWins);
//!
//! // The next click clears the board and O opens round two.
//! assert!(matches!(game.on_pointer_down(0, 0), PointerOutcome::NewRound { .. }));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
pub mod invariants;
pub mod mapper;
mod pointer;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use game::{Game, GameState, Projection};
pub use mapper::{cell_to_pixel_center, pixel_to_cell, BOARD_SIZE_PX};
pub use pointer::PointerOutcome;
pub use position::Position;
pub use types::{Board, Player, RoundResult, Scores, Square};
