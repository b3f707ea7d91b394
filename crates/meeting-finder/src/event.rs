//! Calendar events and meeting requests, the two inputs to a query.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::time_range::TimeRange;

/// A booked block of time and the people attending it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    #[serde(default)]
    pub title: String,
    pub when: TimeRange,
    #[serde(default)]
    pub attendees: BTreeSet<String>,
}

impl Event {
    pub fn new<I, S>(title: impl Into<String>, when: TimeRange, attendees: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            when,
            attendees: attendees.into_iter().map(Into::into).collect(),
        }
    }

    /// True if any of `people` attends this event.
    pub fn involves_any(&self, people: &BTreeSet<String>) -> bool {
        !self.attendees.is_disjoint(people)
    }
}

/// A request for a meeting of `duration` minutes.
///
/// Required attendees must all be free for a slot to be offered. Optional
/// attendees are honoured only when that leaves at least one slot.
/// Well-formed requests keep the two sets disjoint, but nothing relies on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingRequest {
    pub duration: u32,
    #[serde(default)]
    pub attendees: BTreeSet<String>,
    #[serde(default)]
    pub optional_attendees: BTreeSet<String>,
}

impl MeetingRequest {
    pub fn new<I, S>(attendees: I, duration: u32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            duration,
            attendees: attendees.into_iter().map(Into::into).collect(),
            optional_attendees: BTreeSet::new(),
        }
    }

    pub fn add_optional_attendee(&mut self, attendee: impl Into<String>) {
        self.optional_attendees.insert(attendee.into());
    }

    /// Builder form of [`MeetingRequest::add_optional_attendee`].
    pub fn with_optional<I, S>(mut self, attendees: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.optional_attendees
            .extend(attendees.into_iter().map(Into::into));
        self
    }
}
