// seruni-client/src/storefront/events.rs

use std::cmp::Ordering;

use chrono::NaiveDate;
use shared::models::{Event, EventStatus};

/// Recompute each status from its date range; listings can be cached
/// across midnight
pub fn refresh_statuses(events: &mut [Event], today: NaiveDate) {
    for event in events {
        event.status = EventStatus::resolve(event.start_date, event.end_date, today);
    }
}

/// Display order: ongoing (ending soonest first), then upcoming (starting
/// soonest first), then past (most recently ended first)
pub fn sort_events(events: &mut [Event]) {
    events.sort_by(compare_events);
}

fn compare_events(a: &Event, b: &Event) -> Ordering {
    a.status
        .priority()
        .cmp(&b.status.priority())
        .then_with(|| match a.status {
            EventStatus::Ongoing => a.end_date.cmp(&b.end_date),
            EventStatus::Upcoming => a.start_date.cmp(&b.start_date),
            EventStatus::Past => b.end_date.cmp(&a.end_date),
        })
}

/// Case-insensitive substring match on title or description
///
/// An empty query matches everything.
pub fn search_events<'a>(events: &'a [Event], query: &str) -> Vec<&'a Event> {
    let query = query.trim().to_lowercase();
    events
        .iter()
        .filter(|event| {
            event.title.to_lowercase().contains(&query)
                || event
                    .description
                    .as_deref()
                    .is_some_and(|d| d.to_lowercase().contains(&query))
        })
        .collect()
}
