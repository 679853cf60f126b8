//! Conversion between pixel coordinates and grid cells.
//!
//! The board is a square of `board_size` pixels split into thirds.
//! These functions never fail: a pixel past the board edge simply maps to
//! an index of 3 or more, which the engine rejects as out of bounds.

/// Default pixel size of the rendered board.
pub const BOARD_SIZE_PX: u32 = 600;

/// Maps a pixel to `(row, col)`, truncating. Row comes from `y`, column from `x`.
pub fn pixel_to_cell(x: u32, y: u32, board_size: u32) -> (usize, usize) {
    let third = board_size / 3;
    if third == 0 {
        return (3, 3);
    }
    ((y / third) as usize, (x / third) as usize)
}

/// Pixel center of the cell at `(row, col)`, returned as `(x, y)`.
pub fn cell_to_pixel_center(row: usize, col: usize, board_size: u32) -> (u32, u32) {
    let third = board_size / 3;
    let half = board_size / 6;
    (third * col as u32 + half, third * row as u32 + half)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corners_of_default_board() {
        assert_eq!(pixel_to_cell(0, 0, BOARD_SIZE_PX), (0, 0));
        assert_eq!(pixel_to_cell(599, 0, BOARD_SIZE_PX), (0, 2));
        assert_eq!(pixel_to_cell(0, 599, BOARD_SIZE_PX), (2, 0));
        assert_eq!(pixel_to_cell(599, 599, BOARD_SIZE_PX), (2, 2));
    }

    #[test]
    fn test_cell_boundaries_truncate() {
        assert_eq!(pixel_to_cell(199, 200, BOARD_SIZE_PX), (1, 0));
        assert_eq!(pixel_to_cell(200, 199, BOARD_SIZE_PX), (0, 1));
    }

    #[test]
    fn test_outside_board_maps_out_of_range() {
        let (row, col) = pixel_to_cell(600, 650, BOARD_SIZE_PX);
        assert_eq!((row, col), (3, 3));
    }

    #[test]
    fn test_degenerate_board_has_no_cells() {
        assert_eq!(pixel_to_cell(0, 0, 2), (3, 3));
    }

    #[test]
    fn test_centers_of_default_board() {
        assert_eq!(cell_to_pixel_center(0, 0, BOARD_SIZE_PX), (100, 100));
        assert_eq!(cell_to_pixel_center(1, 2, BOARD_SIZE_PX), (500, 300));
        assert_eq!(cell_to_pixel_center(2, 1, BOARD_SIZE_PX), (300, 500));
    }
}
