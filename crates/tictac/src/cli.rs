//! Command-line interface for tictac.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tictac - two-player tic-tac-toe on a clickable terminal canvas
#[derive(Parser, Debug)]
#[command(name = "tictac")]
#[command(about = "Two-player tic-tac-toe with a mouse-driven board", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML display config (defaults to ./tictac.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Command {
    /// Play in the terminal
    #[default]
    Play,

    /// Print the effective configuration as TOML and exit
    PrintConfig,
}
