//! Collision/merge engine - pure functions over a piece and a grid
//!
//! Callers must check [`collision`] before [`merge`]; merging an illegal
//! placement panics.

use crate::grid::{ClearedRows, Grid};
use crate::pieces::Piece;
use crate::types::{COLS, ROWS};

/// Whether `piece` overlaps a wall, the floor, or a settled cell.
///
/// Cells above the top row (`y < 0`) are not out of bounds.
pub fn collision(piece: &Piece, grid: &Grid) -> bool {
    piece.cells().any(|(x, y)| {
        if x < 0 || x >= COLS as i8 || y >= ROWS as i8 {
            return true;
        }
        y >= 0 && grid.is_occupied(x, y)
    })
}

/// Write the piece's color into every cell it covers.
///
/// # Panics
///
/// If any covered cell is outside the grid or already settled.
pub fn merge(piece: &Piece, grid: &mut Grid) {
    for (x, y) in piece.cells() {
        assert!(
            grid.is_empty_at(x, y),
            "merge: cell ({}, {}) is out of bounds or occupied",
            x,
            y
        );
        grid.set(x, y, Some(piece.color));
    }
}

/// Rotate clockwise in place if the result does not collide.
///
/// Returns `false` and leaves the piece untouched otherwise. No kicks.
pub fn rotate(piece: &mut Piece, grid: &Grid) -> bool {
    let previous = piece.shape;
    piece.shape = previous.rotated_cw();
    if collision(piece, grid) {
        piece.shape = previous;
        return false;
    }
    true
}

/// Shift the piece by (dx, dy) unless that collides.
pub fn try_shift(piece: &mut Piece, grid: &Grid, dx: i8, dy: i8) -> bool {
    piece.x += dx;
    piece.y += dy;
    if collision(piece, grid) {
        piece.x -= dx;
        piece.y -= dy;
        return false;
    }
    true
}

/// Remove full rows; see [`Grid::clear_full_rows`].
pub fn clear_lines(grid: &mut Grid) -> ClearedRows {
    grid.clear_full_rows()
}
