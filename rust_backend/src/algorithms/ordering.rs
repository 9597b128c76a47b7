//! Day buckets, ordering and time windows over schedule records.

use std::collections::HashSet;

use chrono::{Duration, NaiveDate};

use crate::models::{Schedule, ScheduleTime, StopId};

/// Records falling on `date`, ordered by time and then by stop.
///
/// The sort is stable, so records sharing both time and stop keep the order
/// they were given in (the store's enumeration order).
pub fn schedule_for_day(records: Vec<Schedule>, date: NaiveDate) -> Vec<Schedule> {
    let mut day: Vec<Schedule> = records
        .into_iter()
        .filter(|s| s.time.date() == date)
        .collect();
    day.sort_by(|a, b| a.time.cmp(&b.time).then(a.stop_id.cmp(&b.stop_id)));
    day
}

/// Each stop id once, in first-seen order.
pub fn distinct_stops(records: &[Schedule]) -> Vec<StopId> {
    let mut seen = HashSet::new();
    records
        .iter()
        .map(|s| s.stop_id)
        .filter(|stop_id| seen.insert(*stop_id))
        .collect()
}

/// Records for `stop_id` only, order preserved.
pub fn at_stop(records: &[Schedule], stop_id: StopId) -> Vec<Schedule> {
    records
        .iter()
        .filter(|s| s.stop_id == stop_id)
        .cloned()
        .collect()
}

/// Records for `stop_id` arriving in `[requested, requested + window)`.
pub fn arrivals_within(
    day: &[Schedule],
    stop_id: StopId,
    requested: ScheduleTime,
    window: Duration,
) -> Vec<Schedule> {
    let end = requested.saturating_add(window);
    day.iter()
        .filter(|s| s.stop_id == stop_id)
        // The equality test is already covered by the range.
        .filter(|s| s.time == requested || (requested..end).contains(&s.time))
        .cloned()
        .collect()
}
