//! Find the free slots in a day that fit a meeting request.
//!
//! Events are reduced to the ones that involve someone in the request, split
//! into start/end [`TimePoint`]s, sorted, and swept with a running count of
//! active events. Every stretch where the count sits at zero for at least the
//! requested duration becomes a slot.
//!
//! Resolution runs in two phases. The first treats required and optional
//! attendees alike. If that leaves no slot and the request has both kinds of
//! attendee, the optional ones are dropped and the sweep runs again.
//!
//! ## Preconditions
//!
//! Every event range lies within `[0, 1440]` with `start <= end`. Ranges built
//! with [`TimeRange::new`] or deserialized from JSON already guarantee this;
//! see [`crate::input::validate_events`] for ranges built unchecked.

use std::collections::BTreeSet;

use serde::Serialize;
use tracing::{debug, trace};

use crate::event::{Event, MeetingRequest};
use crate::time_point::TimePoint;
use crate::time_range::{TimeRange, MINUTES_PER_DAY, START_OF_DAY};

/// Which attendee set produced a [`Resolution`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Slots fit required and optional attendees.
    AllAttendees,
    /// No slot fit everyone; optional attendees were dropped.
    RequiredOnly,
}

/// Slots for a request, tagged with the phase that found them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub phase: Phase,
    pub slots: Vec<TimeRange>,
}

/// Every free range of at least `request.duration` minutes, sorted by start.
///
/// Optional attendees are accommodated when some slot fits them too;
/// otherwise the result covers required attendees only, and may be empty.
pub fn query(events: &[Event], request: &MeetingRequest) -> Vec<TimeRange> {
    resolve(events, request).slots
}

/// Like [`query`], but also reports whether optional attendees were dropped.
pub fn resolve(events: &[Event], request: &MeetingRequest) -> Resolution {
    let required = &request.attendees;
    let optional = &request.optional_attendees;

    let blocks_anyone = |e: &Event| involving(required)(e) || involving(optional)(e);
    let (relevant, slots) = sweep_where(events, blocks_anyone, request.duration);

    if !slots.is_empty() || required.is_empty() || optional.is_empty() {
        debug!(
            relevant = relevant.len(),
            slots = slots.len(),
            "resolved with all attendees"
        );
        return Resolution {
            phase: Phase::AllAttendees,
            slots,
        };
    }

    debug!(
        optional = optional.len(),
        "no slot fits optional attendees, retrying with required only"
    );
    let (_, slots) = sweep_where(relevant, involving(required), request.duration);
    debug!(slots = slots.len(), "resolved with required attendees only");

    Resolution {
        phase: Phase::RequiredOnly,
        slots,
    }
}

/// Relevance predicate: the event has at least one of `people` attending.
fn involving(people: &BTreeSet<String>) -> impl Fn(&Event) -> bool + '_ {
    move |e: &Event| e.involves_any(people)
}

/// Keep the events `is_relevant` accepts and sweep them.
///
/// Returns the kept events alongside the slots so a later phase can narrow
/// them further.
fn sweep_where<'a, I, P>(
    events: I,
    is_relevant: P,
    duration: u32,
) -> (Vec<&'a Event>, Vec<TimeRange>)
where
    I: IntoIterator<Item = &'a Event>,
    P: Fn(&Event) -> bool,
{
    let relevant: Vec<&Event> = events.into_iter().filter(|e| is_relevant(*e)).collect();
    let slots = free_ranges(relevant.iter().copied(), duration);
    (relevant, slots)
}

/// Sweep `busy` events and return every gap of at least `duration` minutes.
///
/// All events passed in are treated as blocking; filter them first. The
/// trailing gap runs to the end of the day inclusive of `END_OF_DAY`.
pub fn free_ranges<'a, I>(busy: I, duration: u32) -> Vec<TimeRange>
where
    I: IntoIterator<Item = &'a Event>,
{
    let mut points: Vec<TimePoint> = busy
        .into_iter()
        .flat_map(|e| TimePoint::pair(&e.when))
        .collect();
    points.sort_unstable();
    trace!(points = points.len(), duration, "sweeping");

    let duration = i64::from(duration);
    let mut slots = Vec::new();
    let mut active = 0i32;
    let mut last_end = START_OF_DAY;

    for point in &points {
        if point.is_start() {
            active += 1;
            if active == 1 {
                let gap = point.time() - last_end;
                if i64::from(gap) >= duration {
                    slots.push(TimeRange::from_start_duration(last_end, gap));
                }
            }
        } else {
            active -= 1;
            if active == 0 {
                last_end = point.time();
            }
        }
    }

    let tail = MINUTES_PER_DAY - last_end;
    if i64::from(tail) >= duration {
        slots.push(TimeRange::from_start_duration(last_end, tail));
    }

    slots
}
