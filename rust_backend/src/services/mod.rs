//! Entry points for callers: ingestion and timetable queries.
//!
//! Every function takes the store explicitly, so any [`crate::db::ScheduleStore`]
//! implementation can back them.

pub mod ingestion;
pub mod timetable;

pub use ingestion::{ingest, ingest_at, ingest_file, read_schedule_table};
pub use timetable::{
    all_distinct_stops, first_multi_arrival_of_day, schedule_for_date, trains_near_stop_and_time,
    trains_near_stop_and_time_within, ARRIVAL_WINDOW_MINUTES,
};
