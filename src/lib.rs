//! Blockfall (workspace facade crate).
//!
//! Re-exports the member crates under `blockfall::{core,input,term,types}`
//! and hosts the process-level pieces used by the binary: configuration,
//! the gameplay event log, and [`Session`], which drives start and ticks.

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;

pub mod config;
pub mod event_log;
pub mod session;

pub use config::GameConfig;
pub use event_log::{EventLog, LogEvent};
pub use session::{Session, Summary};
