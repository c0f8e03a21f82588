//! Error types for roster operations.

use std::path::PathBuf;
use thiserror::Error;

/// Error raised by [`ScheduleStore::update_status`](crate::ScheduleStore::update_status).
///
/// The store is left untouched whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// The employee index does not address a schedule in the store.
    #[error("employee index {index} is out of range (store holds {len} schedules)")]
    EmployeeOutOfRange { index: usize, len: usize },

    /// The day index is outside the 7-day window.
    #[error("day index {index} is out of range (expected 0..=6)")]
    DayOutOfRange { index: usize },
}

/// Error raised while loading or validating a roster.
#[derive(Debug, Error)]
pub enum RosterError {
    /// Roster file could not be read.
    #[error("failed to read roster file: {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Roster file is not valid JSON or does not match the roster layout.
    #[error("failed to parse roster: {0}")]
    Parse(#[from] serde_json::Error),

    /// Roster parsed but holds values the planner cannot display.
    #[error("invalid roster entry '{name}': {reason}")]
    Invalid { name: String, reason: String },
}

pub type Result<T> = std::result::Result<T, RosterError>;
