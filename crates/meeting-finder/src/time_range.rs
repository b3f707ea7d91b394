//! Minute-of-day ranges.
//!
//! A [`TimeRange`] is a half-open interval `[start, end)` of minutes within a
//! single 1440-minute day. Ranges are plain values: built once, compared,
//! never mutated.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SchedulerError};

/// First minute of the day.
pub const START_OF_DAY: i32 = 0;

/// Last valid minute of the day.
pub const END_OF_DAY: i32 = 1439;

/// Length of the day in minutes (`END_OF_DAY + 1`).
pub const MINUTES_PER_DAY: i32 = END_OF_DAY + 1;

/// Convert a wall-clock time into a minute offset from midnight.
///
/// `minutes_of(9, 30)` is `570`.
pub const fn minutes_of(hours: i32, minutes: i32) -> i32 {
    hours * 60 + minutes
}

/// A half-open range of minutes `[start, end)` within one day.
///
/// Ordering is by `start`, then by `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RangeRepr", into = "RangeRepr")]
pub struct TimeRange {
    start: i32,
    end: i32,
}

impl TimeRange {
    /// The range covering the whole day, `[0, 1440)`.
    pub const WHOLE_DAY: TimeRange = TimeRange {
        start: START_OF_DAY,
        end: MINUTES_PER_DAY,
    };

    /// Build a range, checking `0 <= start <= end <= MINUTES_PER_DAY`.
    pub fn new(start: i32, end: i32) -> Result<Self> {
        if start < START_OF_DAY || start > end || end > MINUTES_PER_DAY {
            return Err(SchedulerError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Build a range from its endpoints. With `inclusive`, `end` names the
    /// last minute of the range rather than the first minute after it.
    ///
    /// Unchecked: the caller guarantees the result lies within the day. Use
    /// [`TimeRange::new`] for untrusted input, or check afterwards with
    /// [`crate::validate_events`].
    pub fn from_start_end(start: i32, end: i32, inclusive: bool) -> Self {
        let end = if inclusive { end + 1 } else { end };
        Self { start, end }
    }

    /// Build a range from its start and length in minutes.
    ///
    /// Same preconditions as [`TimeRange::from_start_end`].
    pub fn from_start_duration(start: i32, duration: i32) -> Self {
        Self::from_start_end(start, start + duration, false)
    }

    /// First minute in the range.
    pub fn start(&self) -> i32 {
        self.start
    }

    /// First minute after the range.
    pub fn end(&self) -> i32 {
        self.end
    }

    /// Length of the range in minutes.
    pub fn duration(&self) -> i32 {
        self.end - self.start
    }

    /// True if `minute` falls inside `[start, end)`.
    pub fn contains_point(&self, minute: i32) -> bool {
        self.start <= minute && minute < self.end
    }

    /// True if `other` lies entirely within this range.
    ///
    /// An empty range is contained in any range that contains its position,
    /// including the position one past the end.
    pub fn contains(&self, other: &TimeRange) -> bool {
        if other.start == other.end {
            return self.start <= other.start && other.start <= self.end;
        }
        self.start <= other.start && other.end <= self.end
    }

    /// True if the two ranges share at least one minute.
    ///
    /// Ranges that merely touch (`a.end == b.start`) do not overlap.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Comparator ordering ranges by `end`, then by `start`.
    pub fn order_by_end(a: &TimeRange, b: &TimeRange) -> Ordering {
        a.end.cmp(&b.end).then(a.start.cmp(&b.start))
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

// ---------------------------------------------------------------------------
// Wire representation
// ---------------------------------------------------------------------------

/// JSON form of a range. Written as `{start, end, duration}`; read from
/// `{start, end}`, `{start, duration}`, or all three when they agree.
#[derive(Serialize, Deserialize)]
struct RangeRepr {
    start: i32,
    #[serde(default)]
    end: Option<i32>,
    #[serde(default)]
    duration: Option<i32>,
}

impl TryFrom<RangeRepr> for TimeRange {
    type Error = SchedulerError;

    fn try_from(repr: RangeRepr) -> Result<Self> {
        let start = repr.start;
        let end = match (repr.end, repr.duration) {
            (Some(end), Some(duration)) if start.checked_add(duration) != Some(end) => {
                return Err(SchedulerError::InconsistentRange {
                    start,
                    end,
                    duration,
                });
            }
            (Some(end), _) => end,
            (None, Some(duration)) => start
                .checked_add(duration)
                .ok_or(SchedulerError::InvalidRange { start, end: i32::MAX })?,
            (None, None) => return Err(SchedulerError::MissingRangeBound { start }),
        };
        TimeRange::new(start, end)
    }
}

impl From<TimeRange> for RangeRepr {
    fn from(range: TimeRange) -> Self {
        Self {
            start: range.start,
            end: Some(range.end),
            duration: Some(range.duration()),
        }
    }
}
