//! # meeting-finder
//!
//! Find every slot in a day when a meeting's attendees are all free.
//!
//! Given a day's calendar events and a [`MeetingRequest`], [`query`] returns
//! each free [`TimeRange`] long enough for the meeting. Optional attendees are
//! honoured when at least one slot still fits them; otherwise they are dropped
//! and only required attendees constrain the result.
//!
//! ```rust
//! use meeting_finder::{query, Event, MeetingRequest, TimeRange};
//!
//! let events = vec![Event::new("Standup", TimeRange::from_start_end(0, 60, false), ["alice"])];
//! let request = MeetingRequest::new(["alice"], 30);
//!
//! let slots = query(&events, &request);
//! assert_eq!(slots, vec![TimeRange::from_start_end(60, 1440, false)]);
//! ```
//!
//! The day is modelled as minutes `[0, 1440)`. There are no time zones and
//! no recurrence; callers flatten their calendars into one day first.
//!
//! ## Modules
//!
//! - [`time_range`] — Minute-of-day ranges and day constants
//! - [`event`] — `Event` and `MeetingRequest` inputs
//! - [`time_point`] — Sweep boundaries and their ordering
//! - [`meeting_query`] — The sweep and the two-phase attendee fallback
//! - [`input`] — JSON query documents and validation
//! - [`error`] — Error types

pub mod error;
pub mod event;
pub mod input;
pub mod meeting_query;
pub mod time_point;
pub mod time_range;

pub use error::SchedulerError;
pub use event::{Event, MeetingRequest};
pub use input::{validate_events, QueryInput};
pub use meeting_query::{free_ranges, query, resolve, Phase, Resolution};
pub use time_point::TimePoint;
pub use time_range::{minutes_of, TimeRange, END_OF_DAY, MINUTES_PER_DAY, START_OF_DAY};
