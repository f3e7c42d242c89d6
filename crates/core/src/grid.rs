//! Grid module - the settled cells
//!
//! A fixed 10x20 grid where each cell is empty or holds the color of the piece
//! that settled there. Flat row-major storage, no allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom)

use arrayvec::ArrayVec;

use crate::types::{Cell, Rgb, COLS, ROWS};

/// Total number of cells on the grid
const GRID_SIZE: usize = (COLS as usize) * (ROWS as usize);

/// Row indices removed by one line clear, bottom to top.
pub type ClearedRows = ArrayVec<usize, { ROWS as usize }>;

/// The settled-cell grid - 10 columns x 20 rows
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    /// Flat array of cells, row-major order (y * COLS + x)
    cells: [Cell; GRID_SIZE],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [None; GRID_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= COLS as i8 || y < 0 || y >= ROWS as i8 {
            return None;
        }
        Some((y as usize) * (COLS as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        COLS
    }

    pub fn height(&self) -> u8 {
        ROWS
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Within bounds and empty
    pub fn is_empty_at(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// Within bounds and filled
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .map(|row| row.iter().all(|cell| cell.is_some()))
            .unwrap_or(false)
    }

    /// Cells of row `y`, left to right
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= ROWS as usize {
            return None;
        }
        let start = y * COLS as usize;
        Some(&self.cells[start..start + COLS as usize])
    }

    /// Fill every cell of row `y` with `color` (test and bench setup).
    pub fn fill_row(&mut self, y: usize, color: Rgb) {
        if y >= ROWS as usize {
            return;
        }
        let start = y * COLS as usize;
        self.cells[start..start + COLS as usize].fill(Some(color));
    }

    /// Remove all full rows, shift the rest down, and return the removed row
    /// indices (bottom to top).
    ///
    /// Two-pointer compaction: every surviving row keeps its relative order,
    /// and as many empty rows as were removed appear at the top.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared_rows = ClearedRows::new();
        let width = COLS as usize;
        let mut write_y = ROWS as usize;

        // Scan from bottom to top
        for read_y in (0..ROWS as usize).rev() {
            if self.is_row_full(read_y) {
                cleared_rows.push(read_y);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, write_y * width);
                }
            }
        }

        self.cells[..write_y * width].fill(None);

        cleared_rows
    }

    /// Number of non-empty cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Copy cells into a 2D array (row-major, `[y][x]`).
    pub fn write_rows(&self, out: &mut [[Cell; COLS as usize]; ROWS as usize]) {
        for (y, row) in out.iter_mut().enumerate() {
            let start = y * COLS as usize;
            row.copy_from_slice(&self.cells[start..start + COLS as usize]);
        }
    }

    /// Build a grid from text rows, one string per row from the top.
    ///
    /// `.` is empty and any other character is a settled cell of `color`.
    /// Fewer than `ROWS` rows are bottom-aligned. Intended for tests and
    /// preset boards; panics on malformed input.
    pub fn from_ascii(rows: &[&str], color: Rgb) -> Self {
        assert!(rows.len() <= ROWS as usize, "too many rows");
        let mut grid = Self::new();
        let offset = ROWS as usize - rows.len();
        for (i, line) in rows.iter().enumerate() {
            assert_eq!(line.chars().count(), COLS as usize, "row {} has wrong width", i);
            for (x, ch) in line.chars().enumerate() {
                if ch != '.' {
                    grid.set(x as i8, (offset + i) as i8, Some(color));
                }
            }
        }
        grid
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgb = Rgb::new(255, 0, 0);
    const BLUE: Rgb = Rgb::new(0, 0, 255);

    #[test]
    fn test_grid_index_calculation() {
        assert_eq!(Grid::index(0, 0), Some(0));
        assert_eq!(Grid::index(9, 0), Some(9));
        assert_eq!(Grid::index(0, 1), Some(10));
        assert_eq!(Grid::index(9, 19), Some(199));
        assert_eq!(Grid::index(-1, 0), None);
        assert_eq!(Grid::index(10, 0), None);
        assert_eq!(Grid::index(0, 20), None);
        assert_eq!(Grid::index(0, -1), None);
    }

    #[test]
    fn test_grid_flat_array() {
        let mut grid = Grid::new();
        grid.set(0, 0, Some(RED));
        grid.set(5, 10, Some(BLUE));

        assert_eq!(grid.cells[0], Some(RED));
        assert_eq!(grid.cells[10 * 10 + 5], Some(BLUE));
    }

    #[test]
    fn test_clear_full_rows_handles_adjacent_rows_in_one_pass() {
        let mut grid = Grid::new();
        grid.fill_row(18, RED);
        grid.fill_row(19, RED);
        grid.set(2, 17, Some(BLUE));

        let cleared = grid.clear_full_rows();

        assert_eq!(cleared.as_slice(), &[19, 18]);
        assert_eq!(grid.get(2, 19), Some(Some(BLUE)));
        assert_eq!(grid.occupied_count(), 1);
    }

    #[test]
    fn test_clear_full_rows_can_exceed_four() {
        let mut grid = Grid::new();
        for y in 10..20 {
            grid.fill_row(y, RED);
        }
        let cleared = grid.clear_full_rows();
        assert_eq!(cleared.len(), 10);
        assert_eq!(grid, Grid::new());
    }

    #[test]
    fn test_from_ascii_bottom_aligns() {
        let grid = Grid::from_ascii(&["#........#"], RED);
        assert_eq!(grid.get(0, 19), Some(Some(RED)));
        assert_eq!(grid.get(9, 19), Some(Some(RED)));
        assert_eq!(grid.occupied_count(), 2);
    }

    #[test]
    fn test_write_rows_matches_get() {
        let mut grid = Grid::new();
        grid.set(3, 7, Some(BLUE));
        let mut out = [[None; COLS as usize]; ROWS as usize];
        grid.write_rows(&mut out);
        assert_eq!(out[7][3], Some(BLUE));
        assert_eq!(out[0][0], None);
    }
}
