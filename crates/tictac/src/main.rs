//! Tictac - two-player tic-tac-toe.

use anyhow::Result;
use clap::Parser;
use tictac::{run_tui, Cli, Command, GameConfig};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = GameConfig::load(cli.config.as_deref())?;

    match cli.command.unwrap_or_default() {
        Command::Play => run_tui(config),
        Command::PrintConfig => {
            print!("{}", config.to_toml()?);
            Ok(())
        }
    }
}
