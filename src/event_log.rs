//! JSON-lines gameplay log.
//!
//! The terminal belongs to the renderer while a game is on screen, so
//! gameplay events are appended to a file instead, one JSON object per line:
//!
//! ```text
//! {"ts":1718000000000,"type":"game_started","seed":42}
//! {"ts":1718000004500,"type":"lines_cleared","lines":1,"score":100}
//! {"ts":1718000090000,"type":"game_over","score":700,"lines":7,"pieces":41}
//! ```
//!
//! Write failures disable the log for the rest of the session; they never
//! interrupt the game.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LogEvent {
    GameStarted { seed: u32 },
    LinesCleared { lines: u32, score: u32 },
    GameOver { score: u32, lines: u32, pieces: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    pub ts: u64,
    #[serde(flatten)]
    pub event: LogEvent,
}

pub struct EventLog {
    writer: Option<BufWriter<File>>,
    buf: Vec<u8>,
}

impl EventLog {
    /// A log that drops everything.
    pub fn disabled() -> Self {
        Self {
            writer: None,
            buf: Vec::new(),
        }
    }

    /// Append to `path`, creating it if needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("open event log {}", path.display()))?;
        Ok(Self {
            writer: Some(BufWriter::new(file)),
            buf: Vec::with_capacity(256),
        })
    }

    /// Open `path` if given, otherwise a disabled log.
    pub fn from_path(path: Option<&str>) -> Result<Self> {
        match path {
            Some(p) => Self::open(p),
            None => Ok(Self::disabled()),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.writer.is_some()
    }

    pub fn record(&mut self, event: LogEvent) {
        let record = LogRecord {
            ts: now_ms(),
            event,
        };
        if self.write_record(&record).is_err() {
            self.writer = None;
        }
    }

    fn write_record(&mut self, record: &LogRecord) -> Result<()> {
        let Some(writer) = self.writer.as_mut() else {
            return Ok(());
        };
        self.buf.clear();
        serde_json::to_writer(&mut self.buf, record)?;
        self.buf.push(b'\n');
        writer.write_all(&self.buf)?;
        Ok(())
    }

    pub fn flush(&mut self) {
        if let Some(writer) = self.writer.as_mut() {
            if writer.flush().is_err() {
                self.writer = None;
            }
        }
    }
}

impl Drop for EventLog {
    fn drop(&mut self) {
        self.flush();
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
