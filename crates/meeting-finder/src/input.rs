//! JSON input documents and boundary validation.
//!
//! A query document carries one day's events and a meeting request:
//!
//! ```json
//! {
//!   "events": [
//!     {"title": "Standup", "when": {"start": 540, "end": 570}, "attendees": ["alice", "bob"]}
//!   ],
//!   "request": {"duration": 30, "attendees": ["alice"], "optional_attendees": ["carol"]}
//! }
//! ```
//!
//! Ranges may give `end` or `duration`. Every range is checked against the
//! day bounds while parsing, so a parsed [`QueryInput`] meets the sweep's
//! preconditions.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::event::{Event, MeetingRequest};
use crate::meeting_query::{self, Resolution};
use crate::time_range::TimeRange;

/// One day's events plus the meeting to fit into it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryInput {
    #[serde(default)]
    pub events: Vec<Event>,
    pub request: MeetingRequest,
}

impl QueryInput {
    /// Parse and validate a query document.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Run the query over this document.
    pub fn resolve(&self) -> Resolution {
        meeting_query::resolve(&self.events, &self.request)
    }
}

/// Check that every event range lies within the day and is not reversed.
///
/// Needed only for events whose ranges were built with the unchecked
/// factories; parsed documents are validated already.
pub fn validate_events(events: &[Event]) -> Result<()> {
    for event in events {
        TimeRange::new(event.when.start(), event.when.end())?;
    }
    Ok(())
}
