//! Game state module - owns one game and drives it tick by tick
//!
//! Ties together the grid, the active piece, the piece catalog and scoring.
//! The event loop calls [`GameState::tick`] once per ticker period and
//! [`GameState::apply_command`] whenever input arrives.

use crate::engine::{clear_lines, collision, merge, rotate, try_shift};
use crate::pieces::{new_piece, Piece};
use crate::scoring::line_clear_score;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{Command, Mode};
use crate::{Grid, SimpleRng};

/// What one call to [`GameState::tick`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not running; nothing happened.
    Idle,
    /// The piece moved down one row.
    Fell,
    /// The piece settled and a new one spawned.
    Locked { lines_cleared: u32 },
    /// The piece settled and the replacement spawned onto settled cells.
    GameOver { score: u32 },
}

impl TickOutcome {
    /// Whether the caller should keep scheduling ticks.
    pub fn continues(&self) -> bool {
        matches!(self, TickOutcome::Fell | TickOutcome::Locked { .. })
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    grid: Grid,
    active: Option<Piece>,
    rng: SimpleRng,
    /// RNG state captured when the current game started.
    game_seed: u32,
    mode: Mode,
    score: u32,
    lines: u32,
    /// Pieces spawned in the current game, including the first one.
    pieces: u32,
}

impl GameState {
    /// Create an idle game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        let rng = SimpleRng::new(seed);
        Self {
            grid: Grid::new(),
            active: None,
            game_seed: rng.state(),
            rng,
            mode: Mode::Idle,
            score: 0,
            lines: 0,
            pieces: 0,
        }
    }

    /// Start a new game on an empty grid.
    ///
    /// No-op (returns `false`) while a game is already running.
    pub fn start(&mut self) -> bool {
        self.start_with_grid(Grid::new())
    }

    /// Start a new game on a preset grid.
    ///
    /// If the first piece already collides the game ends immediately and
    /// this still returns `true` (a game was started and is already over).
    pub fn start_with_grid(&mut self, grid: Grid) -> bool {
        if self.mode.is_running() {
            return false;
        }
        self.grid = grid;
        self.score = 0;
        self.lines = 0;
        self.pieces = 0;
        self.game_seed = self.rng.state();
        self.mode = Mode::Running;
        self.spawn_piece();
        true
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_running(&self) -> bool {
        self.mode.is_running()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn pieces(&self) -> u32 {
        self.pieces
    }

    pub fn game_seed(&self) -> u32 {
        self.game_seed
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.grid.write_rows(&mut out.grid);
        out.active = if self.mode.is_running() {
            self.active.map(ActiveSnapshot::from)
        } else {
            None
        };
        out.score = self.score;
        out.mode = self.mode;
        out.lines = self.lines;
        out.pieces = self.pieces;
        out.seed = self.game_seed;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Draw a new active piece; ends the game if it spawns onto settled cells.
    fn spawn_piece(&mut self) -> bool {
        let piece = new_piece(&mut self.rng);
        self.pieces = self.pieces.wrapping_add(1);

        if collision(&piece, &self.grid) {
            self.active = None;
            self.mode = Mode::GameOver;
            return false;
        }

        self.active = Some(piece);
        true
    }

    /// Advance the active piece by one row.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.mode.is_running() {
            return TickOutcome::Idle;
        }
        let Some(mut piece) = self.active else {
            return TickOutcome::Idle;
        };

        piece.y += 1;
        if !collision(&piece, &self.grid) {
            self.active = Some(piece);
            return TickOutcome::Fell;
        }
        piece.y -= 1;

        merge(&piece, &mut self.grid);
        let cleared = clear_lines(&mut self.grid).len();
        self.lines = self.lines.saturating_add(cleared as u32);
        self.score = self.score.saturating_add(line_clear_score(cleared));

        if !self.spawn_piece() {
            return TickOutcome::GameOver { score: self.score };
        }

        TickOutcome::Locked {
            lines_cleared: cleared as u32,
        }
    }

    /// Apply a player command. Returns whether the piece changed.
    ///
    /// Ignored unless a game is running.
    pub fn apply_command(&mut self, command: Command) -> bool {
        if !self.mode.is_running() {
            return false;
        }
        let Some(piece) = self.active.as_mut() else {
            return false;
        };

        match command {
            Command::MoveLeft => try_shift(piece, &self.grid, -1, 0),
            Command::MoveRight => try_shift(piece, &self.grid, 1, 0),
            Command::SoftDrop => try_shift(piece, &self.grid, 0, 1),
            Command::Rotate => rotate(piece, &self.grid),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
