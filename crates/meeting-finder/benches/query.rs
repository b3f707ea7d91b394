use criterion::{criterion_group, criterion_main, Criterion};
use meeting_finder::{query, Event, MeetingRequest, TimeRange};
use std::hint::black_box;

/// A crowded day: 40 people, each in a staggered series of short meetings.
fn crowded_day() -> Vec<Event> {
    let mut events = Vec::new();
    for person in 0..40 {
        let name = format!("person-{person}");
        let mut start = (person * 7) % 45;
        while start + 25 <= 1440 {
            events.push(Event::new(
                "sync",
                TimeRange::from_start_duration(start, 25),
                [name.clone()],
            ));
            start += 50 + (person % 5) * 10;
        }
    }
    events
}

fn bench_query(c: &mut Criterion) {
    let events = crowded_day();

    let small = MeetingRequest::new(["person-0", "person-1"], 15);
    c.bench_function("query_two_required", |b| {
        b.iter(|| query(black_box(&events), black_box(&small)))
    });

    let everyone: Vec<String> = (0..20).map(|p| format!("person-{p}")).collect();
    let fallback =
        MeetingRequest::new(everyone, 10).with_optional((20..40).map(|p| format!("person-{p}")));
    c.bench_function("query_with_fallback", |b| {
        b.iter(|| query(black_box(&events), black_box(&fallback)))
    });
}

criterion_group!(benches, bench_query);
criterion_main!(benches);
