//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the game rules, state management and the tick
//! controller. It has **zero dependencies** on UI, terminal or I/O:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Unit tests next to every rule
//! - **Portable**: Runs headless as easily as in a terminal
//!
//! # Module Structure
//!
//! - [`grid`]: 10x20 grid of settled cells, row clearing
//! - [`pieces`]: the seven templates, their colors, spawn placement
//! - [`engine`]: collision, merge, rotation and line clearing
//! - [`scoring`]: flat 100 points per cleared line
//! - [`game_state`]: one game instance, tick and command handling
//! - [`ticker`]: fixed-delay tick scheduling
//! - [`rng`]: seedable uniform sampling
//! - [`snapshot`]: read-only frame data for renderers
//!
//! # Example
//!
//! ```
//! use blockfall_core::{GameState, TickOutcome};
//! use blockfall_types::{Command, Mode};
//!
//! let mut game = GameState::new(12345);
//! assert_eq!(game.mode(), Mode::Idle);
//!
//! game.start();
//! assert_eq!(game.mode(), Mode::Running);
//!
//! game.apply_command(Command::Rotate);
//! assert_eq!(game.tick(), TickOutcome::Fell);
//! assert_eq!(game.score(), 0);
//! ```

pub mod engine;
pub mod game_state;
pub mod grid;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;
pub mod ticker;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use engine::{clear_lines, collision, merge, rotate, try_shift};
pub use game_state::{GameState, TickOutcome};
pub use grid::{ClearedRows, Grid};
pub use pieces::{new_piece, Piece, Shape};
pub use rng::SimpleRng;
pub use scoring::line_clear_score;
pub use snapshot::{ActiveSnapshot, GameSnapshot};
pub use ticker::Ticker;
