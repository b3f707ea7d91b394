//! Sweep points: the start and end boundaries of busy ranges.

use std::cmp::Ordering;

use crate::time_range::TimeRange;

/// One boundary of a busy range.
///
/// Points sort by `time`, and at equal times a start sorts before an end.
/// With that order, an event ending at the exact minute another begins never
/// opens a gap: the new event is already counted when the old one closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimePoint {
    time: i32,
    is_start: bool,
}

impl TimePoint {
    pub fn new(time: i32, is_start: bool) -> Self {
        Self { time, is_start }
    }

    /// The start and end points of `range`.
    pub fn pair(range: &TimeRange) -> [TimePoint; 2] {
        [
            TimePoint::new(range.start(), true),
            TimePoint::new(range.end(), false),
        ]
    }

    /// Minute offset of this boundary.
    pub fn time(&self) -> i32 {
        self.time
    }

    /// True for a start boundary, false for an end boundary.
    pub fn is_start(&self) -> bool {
        self.is_start
    }

    /// Composite sort key: `false < true`, so starts come first at equal times.
    pub fn sort_key(&self) -> (i32, bool) {
        (self.time, !self.is_start)
    }
}

impl Ord for TimePoint {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl PartialOrd for TimePoint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
