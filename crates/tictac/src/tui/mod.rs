//! Terminal UI for tictac.
//!
//! A single-threaded event loop: draw, block on the next crossterm event,
//! hand it to [`App`], repeat.

mod app;
mod geometry;
mod input;
mod ui;

pub use app::{App, Flow};
pub use geometry::{board_to_canvas, square_area, terminal_to_board};
pub use input::{key_action, KeyAction};
pub use ui::draw;

use crate::config::GameConfig;
use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::path::Path;
use tictac_rules::Game;
use tracing::{debug, error, info, instrument};

/// Runs the game until the player quits.
pub fn run_tui(config: GameConfig) -> Result<()> {
    init_tracing(config.log_file())?;

    info!(board_size = *config.board_size(), "Starting tictac");

    let palette = config.palette()?;
    let app = App::new(Game::with_board_size(*config.board_size()), palette);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Exiting tictac");

    res
}

/// Sends tracing output to `path`; stdout belongs to the board.
fn init_tracing(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

#[instrument(skip_all)]
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|frame| {
            let area = ui::draw(frame, &app);
            app.set_board_area(area);
        })?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if app.handle_key(key.code) == Flow::Quit {
                    info!("User quit");
                    return Ok(());
                }
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                let outcome = app.handle_click(mouse.column, mouse.row);
                debug!(column = mouse.column, row = mouse.row, ?outcome, "Click");
            }
            _ => {}
        }
    }
}
