//! Detection of simultaneous arrivals at a stop.
//!
//! The input is a day schedule already ordered by time and stop, so every
//! record sharing a time at one stop is contiguous. The scan walks adjacent
//! pairs with two states:
//!
//! ```text
//!            pair chains                pair chains
//!   ┌──────┐ ─────────────▶ ┌──────────┐ ◀──────┐
//!   │ Idle │                │ Grouping │ ───────┘
//!   └──────┘ ◀─ ─ ─ ─ ─ ─ ─ └──────────┘
//!      ▲ │   (never: the first        │ pair breaks:
//!      └─┘    group ends the scan)    ▼ take current, stop
//!   pair breaks                      done
//! ```
//!
//! A pair `(current, next)` chains when both share the same time and both are
//! at the queried stop. Every member of the returned group is therefore at the
//! queried stop.

use crate::models::{Schedule, StopId};

/// State of the pairwise scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupScan {
    Idle,
    Grouping,
}

/// What to do with the current element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Step {
    include: bool,
    next: Option<GroupScan>,
}

impl GroupScan {
    /// Transition on the current element, given whether it chains with its successor.
    ///
    /// `next: None` means the group is closed and the scan is over.
    fn step(self, chained: bool) -> Step {
        match (self, chained) {
            (GroupScan::Idle, false) => Step {
                include: false,
                next: Some(GroupScan::Idle),
            },
            (GroupScan::Idle, true) | (GroupScan::Grouping, true) => Step {
                include: true,
                next: Some(GroupScan::Grouping),
            },
            // Current element was the tail of the last chaining pair.
            (GroupScan::Grouping, false) => Step {
                include: true,
                next: None,
            },
        }
    }
}

fn chains(current: &Schedule, next: &Schedule, stop_id: StopId) -> bool {
    current.time == next.time && current.stop_id == stop_id && next.stop_id == stop_id
}

/// First run of two or more records at `stop_id` sharing one arrival time.
///
/// Returns an empty vector when no such run exists.
pub fn first_simultaneous_group(day: &[Schedule], stop_id: StopId) -> Vec<Schedule> {
    let mut state = GroupScan::Idle;
    let mut group = Vec::new();

    for (i, current) in day.iter().enumerate() {
        let chained = day
            .get(i + 1)
            .is_some_and(|next| chains(current, next, stop_id));

        let step = state.step(chained);
        if step.include {
            group.push(current.clone());
        }
        match step.next {
            Some(next) => state = next,
            None => break,
        }
    }

    // A lone arrival is not reported.
    if group.len() < 2 {
        return Vec::new();
    }
    group
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ScheduleTime;

    fn schedule(stop_id: StopId, route: &str, time: &str) -> Schedule {
        Schedule::new(stop_id, route, "865a", ScheduleTime::parse(time).unwrap())
    }

    fn routes(group: &[Schedule]) -> Vec<&str> {
        group.iter().map(|s| s.route.as_str()).collect()
    }

    #[test]
    fn test_transitions() {
        use GroupScan::*;
        assert_eq!(Idle.step(false), Step { include: false, next: Some(Idle) });
        assert_eq!(Idle.step(true), Step { include: true, next: Some(Grouping) });
        assert_eq!(Grouping.step(true), Step { include: true, next: Some(Grouping) });
        assert_eq!(Grouping.step(false), Step { include: true, next: None });
    }

    #[test]
    fn test_empty_day() {
        assert!(first_simultaneous_group(&[], 1).is_empty());
    }

    #[test]
    fn test_single_pair() {
        let day = vec![
            schedule(1, "55", "Jul 05 2021 01:30"),
            schedule(1, "C", "Jul 05 2021 02:30"),
            schedule(1, "21x", "Jul 05 2021 02:30"),
            schedule(2, "21", "Jul 05 2021 02:30"),
        ];
        assert_eq!(routes(&first_simultaneous_group(&day, 1)), vec!["C", "21x"]);
    }

    #[test]
    fn test_no_pair_at_stop() {
        let day = vec![
            schedule(1, "55", "Jul 05 2021 01:30"),
            schedule(1, "55", "Jul 05 2021 02:30"),
            schedule(2, "C", "Jul 05 2021 02:30"),
            schedule(3, "21", "Jul 05 2021 02:30"),
        ];
        assert!(first_simultaneous_group(&day, 1).is_empty());
    }

    #[test]
    fn test_chain_of_three_ends_at_sequence_end() {
        let day = vec![
            schedule(1, "a", "Jul 05 2021 08:00"),
            schedule(1, "b", "Jul 05 2021 08:00"),
            schedule(1, "c", "Jul 05 2021 08:00"),
        ];
        assert_eq!(routes(&first_simultaneous_group(&day, 1)), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_only_first_group_returned() {
        let day = vec![
            schedule(1, "a", "Jul 05 2021 08:00"),
            schedule(1, "b", "Jul 05 2021 08:00"),
            schedule(1, "solo", "Jul 05 2021 08:30"),
            schedule(1, "c", "Jul 05 2021 09:00"),
            schedule(1, "d", "Jul 05 2021 09:00"),
        ];
        assert_eq!(routes(&first_simultaneous_group(&day, 1)), vec!["a", "b"]);
    }

    #[test]
    fn test_other_stops_never_join() {
        let day = vec![
            schedule(1, "x", "Jul 05 2021 08:00"),
            schedule(1, "y", "Jul 05 2021 08:00"),
            schedule(2, "a", "Jul 05 2021 08:00"),
            schedule(2, "b", "Jul 05 2021 08:00"),
            schedule(3, "z", "Jul 05 2021 08:00"),
        ];
        let group = first_simultaneous_group(&day, 2);
        assert_eq!(routes(&group), vec!["a", "b"]);
        assert!(group.iter().all(|s| s.stop_id == 2));
    }

    #[test]
    fn test_same_stop_different_minutes_do_not_group() {
        let day = vec![
            schedule(1, "a", "Jul 05 2021 08:00"),
            schedule(1, "b", "Jul 05 2021 08:01"),
        ];
        assert!(first_simultaneous_group(&day, 1).is_empty());
    }
}
