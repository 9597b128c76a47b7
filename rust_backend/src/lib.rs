//! Train schedule ingestion and timetable queries.
//!
//! Schedules arrive as delimited text (`stopID,route,trainID,time`), are
//! validated as a batch and written to a [`db::ScheduleStore`]. Queries read
//! the store back and answer per-day and per-stop questions:
//!
//! - [`services::schedule_for_date`]: one day's records in chronological order
//! - [`services::all_distinct_stops`]: every stop seen
//! - [`services::trains_near_stop_and_time`]: trains arriving within five minutes
//! - [`services::first_multi_arrival_of_day`]: first simultaneous arrivals at a stop
//!
//! # Example
//!
//! ```
//! use transit_schedule::db::LocalStore;
//! use transit_schedule::models::{parse_schedule_date, ScheduleTime};
//! use transit_schedule::services;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let store = LocalStore::new();
//! let raw = "stopID,route,trainID,time\n\
//!            1,C,865a,Jul 05 2021 02:30\n\
//!            1,21x,kpr5,Jul 05 2021 02:30\n";
//! let now = ScheduleTime::parse("Jul 01 2021 00:00")?;
//! services::ingest_at(&store, raw, now).await?;
//!
//! let date = parse_schedule_date("Jul 05 2021")?;
//! let group = services::first_multi_arrival_of_day(&store, date, 1).await?;
//! assert_eq!(group.len(), 2);
//! # Ok(())
//! # }
//! ```

pub mod algorithms;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod parsing;
pub mod preprocessing;
pub mod services;

pub use config::ScheduleConfig;
pub use error::{ScheduleError, ScheduleResult};
pub use models::{Schedule, ScheduleTime, StopId};
