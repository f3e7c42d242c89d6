use crate::pieces::{Piece, Shape};
use crate::types::{Cell, Mode, PieceKind, Rgb, COLS, ROWS};

/// Read-only view of the active piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub shape: Shape,
    pub color: Rgb,
    pub x: i8,
    pub y: i8,
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            shape: value.shape,
            color: value.color,
            x: value.x,
            y: value.y,
        }
    }
}

impl ActiveSnapshot {
    /// Absolute grid coordinates of every filled cell.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .filled()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub grid: [[Cell; COLS as usize]; ROWS as usize],
    /// Present only while running.
    pub active: Option<ActiveSnapshot>,
    pub score: u32,
    pub mode: Mode,
    pub lines: u32,
    pub pieces: u32,
    pub seed: u32,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            grid: [[None; COLS as usize]; ROWS as usize],
            active: None,
            score: 0,
            mode: Mode::Idle,
            lines: 0,
            pieces: 0,
            seed: 0,
        }
    }
}
