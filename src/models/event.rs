use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One recorded watering action for a plant.
///
/// The analyzer receives events for a single (plant, event-type) pair; it
/// does not filter by plant or type itself. Timestamps are strongly typed,
/// so unparseable dates are rejected at the serde boundary and can never
/// reach the interval statistics as NaN or zero-day gaps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WateringEvent {
    /// When the watering was logged (day resolution is sufficient).
    pub event_date: DateTime<Utc>,
}

impl WateringEvent {
    /// Create a new watering event.
    pub fn new(event_date: DateTime<Utc>) -> Self {
        Self { event_date }
    }

    /// Whole days between this event and another, rounded to the nearest day.
    ///
    /// Matches the behavior of rounding the absolute millisecond difference
    /// divided by 86.4M, so a 36-hour gap counts as 2 days and a 12-hour gap
    /// as 0 days.
    pub fn days_between(&self, other: &WateringEvent) -> i64 {
        let diff_secs = (self.event_date - other.event_date).num_seconds().abs() as f64;
        (diff_secs / 86_400.0).round() as i64
    }
}

/// Sort events most-recent-first in place.
///
/// The interval extraction differences adjacent pairs and assumes descending
/// date order; normalizing here makes the analyzer insensitive to the order
/// the caller fetched the rows in.
pub fn sort_most_recent_first(events: &mut [WateringEvent]) {
    events.sort_by(|a, b| b.event_date.cmp(&a.event_date));
}
