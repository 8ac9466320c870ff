//! Append-only NDJSON game-event log.
//!
//! Contract: each call writes exactly one JSON object followed by a
//! newline, so the file can be tailed and post-processed line by line even
//! if the last line is a torn write.

use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

#[derive(Debug, Clone, Serialize)]
pub struct TurnEventV1 {
    pub event: &'static str,
    pub round: u32,
    pub player: String,
    pub final_dice: Vec<u8>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreEventV1 {
    pub event: &'static str,
    pub round: u32,
    pub player: String,
    pub category: String,
    pub points: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct GameOverEventV1 {
    pub event: &'static str,
    pub winner: Option<String>,
    pub draw: bool,
    pub totals: Vec<(String, u32)>,
}

#[derive(Debug)]
pub enum EventLogError {
    Io(io::Error),
    Json(serde_json::Error),
}

impl From<io::Error> for EventLogError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for EventLogError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

/// Append-only NDJSON writer.
pub struct EventWriter {
    w: BufWriter<File>,
}

impl EventWriter {
    /// Open a file for append. Creates it if it doesn't exist.
    pub fn open_append(path: impl AsRef<Path>) -> Result<Self, EventLogError> {
        let f = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            w: BufWriter::new(f),
        })
    }

    pub fn write_event<T: Serialize>(&mut self, event: &T) -> Result<(), EventLogError> {
        let mut buf = serde_json::to_vec(event)?;
        buf.push(b'\n');
        self.w.write_all(&buf)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), EventLogError> {
        self.w.flush()?;
        Ok(())
    }
}
