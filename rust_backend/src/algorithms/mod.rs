//! Pure algorithms over in-memory schedule records.
//!
//! - [`ordering`]: day filtering, chronological ordering, arrival windows
//! - [`grouping`]: first group of simultaneous arrivals at a stop

pub mod grouping;
pub mod ordering;

pub use grouping::{first_simultaneous_group, GroupScan};
pub use ordering::{arrivals_within, at_stop, distinct_stops, schedule_for_day};
