//! Timetable queries over the full contents of a store.
//!
//! Every query reads the whole store, buckets by calendar day and orders the
//! bucket chronologically (ties by stop) before answering.

use chrono::{Days, Duration, NaiveDate};
use log::debug;

use crate::algorithms::{
    arrivals_within, at_stop, distinct_stops, first_simultaneous_group, schedule_for_day,
};
use crate::db::store::ScheduleStore;
use crate::error::ScheduleResult;
use crate::models::{Schedule, ScheduleTime, StopId};

/// Default width of the "arriving now" window, in minutes.
pub const ARRIVAL_WINDOW_MINUTES: i64 = 5;

/// All records on `date`, ordered by time then stop.
pub async fn schedule_for_date<S>(store: &S, date: NaiveDate) -> ScheduleResult<Vec<Schedule>>
where
    S: ScheduleStore + ?Sized,
{
    let records = store.read_all().await?;
    let total = records.len();
    let day = schedule_for_day(records, date);
    debug!("{} of {} records fall on {}", day.len(), total, date);
    Ok(day)
}

/// Every stop id in the store, once, in first-seen order.
pub async fn all_distinct_stops<S>(store: &S) -> ScheduleResult<Vec<StopId>>
where
    S: ScheduleStore + ?Sized,
{
    let records = store.read_all().await?;
    Ok(distinct_stops(&records))
}

/// Trains arriving at `stop_id` within five minutes of `requested_time`.
///
/// See [`trains_near_stop_and_time_within`].
pub async fn trains_near_stop_and_time<S>(
    store: &S,
    stop_id: StopId,
    requested_time: &str,
) -> ScheduleResult<Vec<Schedule>>
where
    S: ScheduleStore + ?Sized,
{
    trains_near_stop_and_time_within(
        store,
        stop_id,
        requested_time,
        Duration::minutes(ARRIVAL_WINDOW_MINUTES),
    )
    .await
}

/// Trains arriving at `stop_id` in `[requested_time, requested_time + window)`.
///
/// - A malformed `requested_time` is a [`crate::error::ScheduleError::TimeParse`].
/// - A day with no records at all yields nothing.
/// - When `requested_time` is after the day's last arrival (at any stop), the
///   next day's schedule for `stop_id` is returned instead, provided it has
///   more than one entry.
/// - Otherwise fewer than two matches yields nothing.
pub async fn trains_near_stop_and_time_within<S>(
    store: &S,
    stop_id: StopId,
    requested_time: &str,
    window: Duration,
) -> ScheduleResult<Vec<Schedule>>
where
    S: ScheduleStore + ?Sized,
{
    let requested = ScheduleTime::parse(requested_time)?;
    let today = requested.date();
    let today_schedule = schedule_for_date(store, today).await?;

    let Some(last_of_today) = today_schedule.last() else {
        debug!("No records on {}", today);
        return Ok(Vec::new());
    };

    if requested > last_of_today.time {
        if let Some(tomorrow) = today.checked_add_days(Days::new(1)) {
            let next_day = at_stop(&schedule_for_date(store, tomorrow).await?, stop_id);
            if next_day.len() > 1 {
                debug!(
                    "{} is after the last arrival of {}, returning {} records for stop {} on {}",
                    requested,
                    today,
                    next_day.len(),
                    stop_id,
                    tomorrow
                );
                return Ok(next_day);
            }
        }
    }

    let matches = arrivals_within(&today_schedule, stop_id, requested, window);
    if matches.len() < 2 {
        return Ok(Vec::new());
    }
    Ok(matches)
}

/// First group of two or more trains arriving at `stop_id` at the same time on `date`.
pub async fn first_multi_arrival_of_day<S>(
    store: &S,
    date: NaiveDate,
    stop_id: StopId,
) -> ScheduleResult<Vec<Schedule>>
where
    S: ScheduleStore + ?Sized,
{
    let day = schedule_for_date(store, date).await?;
    Ok(first_simultaneous_group(&day, stop_id))
}
