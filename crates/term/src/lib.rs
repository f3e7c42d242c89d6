//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. It renders
//! into a framebuffer that is then flushed to the terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep presentation (cell size, colors, text overlays) out of the game rules
//! - Allow precise control over aspect ratio (2 chars wide per cell)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, Frame, GameView, Viewport};
pub use renderer::TerminalRenderer;
