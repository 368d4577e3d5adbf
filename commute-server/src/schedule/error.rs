//! Timetable loading errors.

use std::path::PathBuf;

use crate::domain::{TimeError, TimeOfDay};

/// Errors that can occur while loading the static timetable.
///
/// All of these are fatal: the server refuses to start without a valid
/// timetable.
#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    /// Timetable file could not be read
    #[error("failed to read timetable {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Timetable file is not valid JSON of the expected shape
    #[error("malformed timetable JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// An entry is not a valid "HH:MM" time
    #[error("leg {key}: entry {index} ({value:?}): {source}")]
    InvalidTime {
        key: String,
        index: usize,
        value: String,
        source: TimeError,
    },

    /// A leg lists no departures at all
    #[error("leg {key} has no departures")]
    EmptyLeg { key: String },

    /// Entries are not in ascending order
    #[error("leg {key}: entry {index} ({time}) is earlier than the entry before it")]
    Unsorted {
        key: String,
        index: usize,
        time: TimeOfDay,
    },

    /// A leg the planner needs is absent
    #[error("timetable has no leg {0:?}")]
    MissingLeg(String),
}
