//! Tictac - two-player tic-tac-toe in the terminal.
//!
//! # Architecture
//!
//! - **Rules**: [`tictac_rules`] owns the board, turns, results and scores
//! - **Config**: optional TOML file with board size, colors and log path
//! - **TUI**: ratatui canvas frontend; mouse clicks are scaled onto the
//!   virtual pixel board and handed to the rules engine

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod tui;

pub use cli::{Cli, Command};
pub use config::{ConfigError, GameConfig, Palette, DEFAULT_CONFIG_FILE, MAX_BOARD_SIZE};
pub use tui::{run_tui, App, Flow};
