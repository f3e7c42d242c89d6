//! Terminal input module.
//!
//! Maps `crossterm` events to game commands and host-level input (start,
//! quit, resize). There is no queue or repeat logic: every recognized key
//! press is applied immediately, in arrival order.

pub mod map;

pub use blockfall_types as types;

pub use map::{map_event, map_key, should_quit, InputEvent};
