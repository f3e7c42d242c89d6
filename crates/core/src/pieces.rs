//! Pieces module - the piece catalog
//!
//! Seven fixed templates stored as boolean matrices, each paired with a
//! fixed color. New pieces are sampled uniformly and spawn horizontally
//! centered on the top row.

use crate::types::{PieceKind, Rgb, COLS, MAX_SHAPE_SIZE};
use crate::SimpleRng;

/// A boolean piece matrix of `rows` x `cols` (at most 4x4).
///
/// Only the `rows` x `cols` top-left corner of `cells` is meaningful; the
/// rest is always `false` so that equality compares shapes exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    cells: [[bool; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl Shape {
    /// Build a shape from rows of `0`/`1` values.
    ///
    /// Panics if the matrix is empty, ragged or larger than 4x4. Templates
    /// are static data, so a bad one is a programming error.
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        assert!(
            !rows.is_empty() && rows.len() <= MAX_SHAPE_SIZE,
            "shape must have 1..=4 rows"
        );
        let cols = rows[0].len();
        assert!(cols > 0 && cols <= MAX_SHAPE_SIZE, "shape must have 1..=4 columns");

        let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (r, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), cols, "shape rows must all have the same length");
            for (c, &v) in row.iter().enumerate() {
                cells[r][c] = v != 0;
            }
        }

        Self {
            rows: rows.len() as u8,
            cols: cols as u8,
            cells,
        }
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Width of the matrix (number of columns).
    pub fn width(&self) -> u8 {
        self.cols
    }

    /// Whether the matrix cell at (row, col) is filled. Outside the matrix is empty.
    pub fn is_filled(&self, row: u8, col: u8) -> bool {
        row < self.rows && col < self.cols && self.cells[row as usize][col as usize]
    }

    /// Iterate `(dx, dy)` offsets of every filled cell, row-major.
    pub fn filled(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        (0..self.rows).flat_map(move |r| {
            (0..self.cols)
                .filter(move |&c| self.cells[r as usize][c as usize])
                .map(move |c| (c as i8, r as i8))
        })
    }

    /// Rotate 90° clockwise: transpose, then reverse each row.
    ///
    /// `rotated[r][c] = self[rows - 1 - c][r]`; dimensions swap.
    pub fn rotated_cw(&self) -> Self {
        let rows = self.cols;
        let cols = self.rows;
        let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for r in 0..rows as usize {
            for c in 0..cols as usize {
                cells[r][c] = self.cells[self.rows as usize - 1 - c][r];
            }
        }
        Self { rows, cols, cells }
    }
}

/// Template matrix for a piece kind.
pub fn template(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => Shape::from_rows(&[&[1, 1, 1, 1]]),
        PieceKind::O => Shape::from_rows(&[&[1, 1], &[1, 1]]),
        PieceKind::T => Shape::from_rows(&[&[1, 1, 1], &[0, 1, 0]]),
        PieceKind::L => Shape::from_rows(&[&[1, 1, 1], &[1, 0, 0]]),
        PieceKind::J => Shape::from_rows(&[&[1, 1, 1], &[0, 0, 1]]),
        PieceKind::Z => Shape::from_rows(&[&[1, 1, 0], &[0, 1, 1]]),
        PieceKind::S => Shape::from_rows(&[&[0, 1, 1], &[1, 1, 0]]),
    }
}

/// Color table, indexed by catalog position.
pub const COLORS: [Rgb; 7] = [
    Rgb::hex("#7c3f58"),
    Rgb::hex("#eb6b6f"),
    Rgb::hex("#f9a875"),
    Rgb::hex("#fff6d3"),
    Rgb::hex("#7c3f58"),
    Rgb::hex("#eb6b6f"),
    Rgb::hex("#f9a875"),
];

/// Fixed color of a piece kind.
pub fn color(kind: PieceKind) -> Rgb {
    COLORS[kind.index()]
}

/// Spawn column for a matrix of the given width: `floor((COLS - width) / 2)`.
pub fn spawn_x(width: u8) -> i8 {
    ((COLS as i8) - (width as i8)).div_euclid(2)
}

/// The active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub color: Rgb,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Build the template for `kind` at its spawn position.
    pub fn spawn(kind: PieceKind) -> Self {
        let shape = template(kind);
        Self {
            kind,
            shape,
            color: color(kind),
            x: spawn_x(shape.width()),
            y: 0,
        }
    }

    /// Absolute grid coordinates of every filled cell.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .filled()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }
}

/// Sample a new piece uniformly from the catalog.
pub fn new_piece(rng: &mut SimpleRng) -> Piece {
    let index = rng.next_range(PieceKind::ALL.len() as u32) as usize;
    Piece::spawn(PieceKind::ALL[index])
}
