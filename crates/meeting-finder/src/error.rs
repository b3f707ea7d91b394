//! Error types for meeting-finder input handling.
//!
//! The sweep itself never fails. These errors come from the boundary where
//! callers hand over ranges and JSON documents.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SchedulerError {
    #[error("Invalid time range [{start}, {end}): must satisfy 0 <= start <= end <= 1440")]
    InvalidRange { start: i32, end: i32 },

    #[error("Inconsistent time range: start {start} + duration {duration} != end {end}")]
    InconsistentRange { start: i32, end: i32, duration: i32 },

    #[error("Time range starting at {start} needs either `end` or `duration`")]
    MissingRangeBound { start: i32 },

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SchedulerError>;
