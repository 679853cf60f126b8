//! Stateless UI rendering for tic-tac-toe.

use super::app::App;
use super::geometry::{board_to_canvas, square_area};
use crate::config::Palette;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::Line,
    widgets::{
        Block, Borders, Paragraph,
        canvas::{Canvas, Circle, Context, Line as CanvasLine},
    },
};
use tictac_rules::{Player, Projection, RoundResult, Square, cell_to_pixel_center};

/// Draws the whole screen and returns the area the board occupies.
pub fn draw(frame: &mut Frame, app: &App) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(9),    // Board
            Constraint::Length(3), // Status
            Constraint::Length(3), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let board_area = square_area(chunks[1]);
    let projection = app.game().projection();
    if projection.round_result.is_terminal() {
        draw_game_over(frame, board_area, &projection, app.palette());
    } else {
        draw_board(frame, board_area, &projection, app.game().board_size(), app.palette());
    }

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new("Click a cell or press 1-9 | N: Next round | Q: Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[3]);

    board_area
}

/// Half the drawn width of a mark, in board pixels.
fn symbol_radius(board_size: u32) -> f64 {
    let size = f64::from(board_size);
    (size / 3.0 - size / 8.0) / 2.0
}

fn draw_board(frame: &mut Frame, area: Rect, projection: &Projection, board_size: u32, palette: Palette) {
    let size = f64::from(board_size);
    let radius = symbol_radius(board_size);
    let cells = projection.cells;

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([0.0, size])
        .y_bounds([0.0, size])
        .paint(move |ctx| {
            for i in 1..3 {
                let p = size * f64::from(i) / 3.0;
                ctx.draw(&CanvasLine::new(p, 0.0, p, size, Color::Gray));
                ctx.draw(&CanvasLine::new(0.0, p, size, p, Color::Gray));
            }

            for (row, squares) in cells.iter().enumerate() {
                for (col, square) in squares.iter().enumerate() {
                    let (px, py) = cell_to_pixel_center(row, col, board_size);
                    let (x, y) = board_to_canvas(px, py, board_size);
                    match square {
                        Square::Occupied(Player::X) => draw_x(ctx, x, y, radius, palette.x),
                        Square::Occupied(Player::O) => ctx.draw(&Circle {
                            x,
                            y,
                            radius,
                            color: palette.o,
                        }),
                        Square::Empty => {}
                    }
                }
            }
        });

    frame.render_widget(canvas, area);
}

fn draw_x(ctx: &mut Context, x: f64, y: f64, radius: f64, color: Color) {
    ctx.draw(&CanvasLine::new(x - radius, y - radius, x + radius, y + radius, color));
    ctx.draw(&CanvasLine::new(x - radius, y + radius, x + radius, y - radius, color));
}

fn draw_game_over(frame: &mut Frame, area: Rect, projection: &Projection, palette: Palette) {
    let result = projection.round_result;
    let result_color = match result {
        RoundResult::XWins => palette.x,
        RoundResult::OWins => palette.o,
        RoundResult::Tie | RoundResult::InProgress => Color::Gray,
    };
    let accent = Style::default().fg(palette.accent);
    let scores = projection.scores;

    let lines = vec![
        Line::styled(
            result.headline(),
            Style::default().fg(result_color).add_modifier(Modifier::BOLD),
        ),
        Line::default(),
        Line::styled("Scores", accent.add_modifier(Modifier::BOLD)),
        Line::styled(format!("{}: {}", Player::X.label(), scores.x_wins()), accent),
        Line::styled(format!("{}: {}", Player::O.label(), scores.o_wins()), accent),
        Line::styled(format!("Tie: {}", scores.ties()), accent),
        Line::styled(format!("Rounds played: {}", scores.rounds_played()), accent),
        Line::default(),
        Line::styled("Click to play again", Style::default().fg(Color::DarkGray)),
    ];

    let height = lines.len() as u16;
    let text_area = Rect {
        y: area.y + area.height.saturating_sub(height) / 2,
        height: height.min(area.height),
        ..area
    };
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), text_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};
    use tictac_rules::Game;

    fn render(app: &mut App) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(60, 30)).unwrap();
        terminal
            .draw(|frame| {
                let area = draw(frame, app);
                app.set_board_area(area);
            })
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn buffer_text(buffer: &Buffer) -> String {
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_symbol_radius_matches_classic_board() {
        assert_eq!(symbol_radius(600), 62.5);
    }

    #[test]
    fn test_board_area_recorded() {
        let mut app = App::new(Game::new(), Palette::default());
        render(&mut app);
        let area = app.board_area();
        assert_eq!(area.width, area.height * 2);
        assert!(area.height >= 9);
    }

    #[test]
    fn test_game_over_screen_shows_scores() {
        let mut app = App::new(Game::new(), Palette::default());
        render(&mut app);
        for key in ['1', '4', '2', '5', '3'] {
            app.handle_key(crossterm::event::KeyCode::Char(key));
        }
        let text = buffer_text(&render(&mut app));
        assert!(text.contains("Winner: Player 1 (X)"));
        assert!(text.contains("Player 1 (X): 1"));
        assert!(text.contains("Tie: 0"));
        assert!(text.contains("Rounds played: 1"));
        assert!(text.contains("Click to play again"));
    }

    #[test]
    fn test_status_shows_turn() {
        let mut app = App::new(Game::new(), Palette::default());
        let text = buffer_text(&render(&mut app));
        assert!(text.contains("Round 1: Player 1 (X) to move"));
    }
}
