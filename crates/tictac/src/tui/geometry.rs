//! Mapping between terminal cells and the virtual pixel board.
//!
//! The board is drawn on a ratatui canvas spanning `board_size` virtual
//! pixels in each direction. A click lands on a terminal cell; its center is
//! scaled into that pixel space before the engine sees it.

use ratatui::layout::Rect;

/// Scales a click at terminal `(column, row)` to board pixels, `None` outside `area`.
pub fn terminal_to_board(area: Rect, column: u16, row: u16, board_size: u32) -> Option<(u32, u32)> {
    let inside = column >= area.x && column < area.right() && row >= area.y && row < area.bottom();
    if !inside {
        return None;
    }
    let x = scale(column - area.x, area.width, board_size)?;
    let y = scale(row - area.y, area.height, board_size)?;
    Some((x, y))
}

/// Maps the center of terminal cell `offset` in a span of `span` cells onto `board_size` pixels.
fn scale(offset: u16, span: u16, board_size: u32) -> Option<u32> {
    let pixel = (2 * u64::from(offset) + 1) * u64::from(board_size) / (2 * u64::from(span));
    u32::try_from(pixel).ok()
}

/// Converts a board pixel (y pointing down) to canvas coordinates (y pointing up).
pub fn board_to_canvas(x: u32, y: u32, board_size: u32) -> (f64, f64) {
    (f64::from(x), f64::from(board_size) - f64::from(y))
}

/// Largest area of `area` with a 2:1 width:height ratio, centered.
///
/// Terminal cells are about twice as tall as they are wide, so this reads
/// as a square on screen.
pub fn square_area(area: Rect) -> Rect {
    let height = area.height.min(area.width / 2);
    let width = height * 2;
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
