//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Mode, COLS, ROWS};

/// Board background and game-over fill.
pub const BACKGROUND: Rgb = Rgb::hex("#272744");
/// Overlay text ("Game Over", "Click to Start").
pub const OVERLAY_TEXT: Rgb = Rgb::hex("#fbf5ef");
/// In-game score text.
pub const SCORE_TEXT: Rgb = Rgb::hex("#fff6d3");

const BLOCK: char = '█';

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Position and size of the bordered board, in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl Frame {
    pub fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.x
            && row >= self.y
            && (column - self.x) < self.w
            && (row - self.y) < self.h
    }
}

/// A lightweight terminal renderer for the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Where the bordered board lands in `viewport`.
    pub fn frame(&self, viewport: Viewport) -> Frame {
        let w = (COLS as u16) * self.cell_w + 2;
        let h = (ROWS as u16) * self.cell_h + 2;
        let x = viewport.width.saturating_sub(w) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(h) / 2,
            AnchorY::Top => 0,
        };
        Frame { x, y, w, h }
    }

    /// Whether a terminal cell lies on the board (border included).
    pub fn board_contains(&self, viewport: Viewport, column: u16, row: u16) -> bool {
        self.frame(viewport).contains(column, row)
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is only resized when
    /// the viewport changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let frame = self.frame(viewport);
        let inner_w = frame.w - 2;
        let inner_h = frame.h - 2;
        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        fb.fill_rect(
            frame.x + 1,
            frame.y + 1,
            inner_w,
            inner_h,
            ' ',
            CellStyle::new(BACKGROUND, BACKGROUND),
        );
        self.draw_border(fb, frame, border);

        match snap.mode {
            Mode::Idle => {
                self.draw_grid(fb, frame, snap);
                self.draw_centered(fb, frame, 0, "Click to Start");
            }
            Mode::Running => {
                self.draw_grid(fb, frame, snap);
                if let Some(active) = snap.active {
                    for (x, y) in active.cells() {
                        if x >= 0 && x < COLS as i8 && y >= 0 && y < ROWS as i8 {
                            self.draw_block(fb, frame, x as u16, y as u16, active.color);
                        }
                    }
                }
                let style = CellStyle::new(SCORE_TEXT, BACKGROUND).bold();
                let x = fb.put_str(frame.x + 1, frame.y + 1, "Score: ", style);
                fb.put_u32(x, frame.y + 1, snap.score, style);
            }
            Mode::GameOver => {
                self.draw_centered(fb, frame, 0, "Game Over");
                let text = format!("Score: {}", snap.score);
                self.draw_centered(fb, frame, 1, &text);
            }
        }

        self.draw_side_panel(fb, snap, viewport, frame);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, frame: Frame, style: CellStyle) {
        let Frame { x, y, w, h } = frame;

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_grid(&self, fb: &mut FrameBuffer, frame: Frame, snap: &GameSnapshot) {
        for (y, row) in snap.grid.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                match cell {
                    Some(color) => self.draw_block(fb, frame, x as u16, y as u16, *color),
                    None => {
                        let style = CellStyle::new(Rgb::new(90, 90, 110), BACKGROUND).dim();
                        self.fill_cell_rect(fb, frame, x as u16, y as u16, '·', style);
                    }
                }
            }
        }
    }

    fn draw_block(&self, fb: &mut FrameBuffer, frame: Frame, x: u16, y: u16, color: Rgb) {
        let style = CellStyle::new(color, BACKGROUND);
        self.fill_cell_rect(fb, frame, x, y, BLOCK, style);
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        frame: Frame,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = frame.x + 1 + cell_x * self.cell_w;
        let py = frame.y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    /// Text centered horizontally, `line` rows below the board's middle.
    fn draw_centered(&self, fb: &mut FrameBuffer, frame: Frame, line: u16, text: &str) {
        let mid_y = frame.y + frame.h / 2 + line;
        let text_w = text.chars().count() as u16;
        let x = frame.x + frame.w.saturating_sub(text_w) / 2;
        let style = CellStyle::new(OVERLAY_TEXT, BACKGROUND).bold();
        fb.put_str(x, mid_y, text, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        frame: Frame,
    ) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 12 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let help = value.dim();

        let mut y = frame.y;
        for (name, v) in [
            ("SCORE", snap.score),
            ("LINES", snap.lines),
            ("PIECES", snap.pieces),
        ] {
            fb.put_str(panel_x, y, name, label);
            y = y.saturating_add(1);
            fb.put_u32(panel_x, y, v, value);
            y = y.saturating_add(2);
        }

        for line in ["← → move", "↓   drop", "↑   rotate", "q   quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, help);
            y = y.saturating_add(1);
        }
    }
}
