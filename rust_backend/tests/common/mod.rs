//! Shared fixtures for integration tests.
#![allow(dead_code)]

use transit_schedule::ScheduleTime;

pub const HEADER: &str = "stopID,route,trainID,time";

/// One day of service at stop 1, plus two arrivals just after midnight.
pub const STOP_ONE_TIMETABLE: &str = r#"stopID,route,trainID,time
1,"C","865a","Jul 04 2021 07:14"
1,"C","865a","Jul 04 2021 07:42"
1,"C","865a","Jul 04 2021 08:10"
1,"C","865a","Jul 04 2021 08:34"
1,"C","865a","Jul 04 2021 09:04"
1,"C","865a","Jul 04 2021 09:20"
1,"C","865a","Jul 04 2021 09:50"
1,"C","kpr5","Jul 04 2021 10:14"
1,"C","kpr5","Jul 04 2021 10:35"
1,"C","kpr5","Jul 04 2021 10:55"
1,"C","kpr5","Jul 04 2021 11:34"
1,"C","kpr5","Jul 04 2021 11:55"
1,"C","kpr5","Jul 04 2021 12:02"
1,"C","kpr5","Jul 04 2021 12:18"
1,"55","465a","Jul 04 2021 07:42"
1,"55","465a","Jul 04 2021 12:30"
1,"55","465a","Jul 04 2021 12:50"
1,"55","465a","Jul 04 2021 13:12"
1,"55","465a","Jul 04 2021 13:35"
1,"55","465a","Jul 04 2021 14:14"
1,"55","465a","Jul 04 2021 20:30"
1,"55","465a","Jul 04 2021 21:05"
1,"55","465a","Jul 04 2021 21:40"
1,"55","465a","Jul 04 2021 22:12"
1,"55","465a","Jul 04 2021 22:50"
1,"55","465a","Jul 04 2021 23:35"
1,"55","465a","Jul 05 2021 02:30"
1,"C","314p","Jul 05 2021 02:30"
"#;

/// Two trains reach stop 1 together at 02:30.
pub const SHARED_ARRIVAL_AT_STOP_ONE: &str = r#"stopID,route,trainID,time
1,"55","465a","Jul 05 2021 01:30"
1,"C","314p","Jul 05 2021 02:30"
2,"21","159t","Jul 05 2021 02:30"
1,"21x","159t","Jul 05 2021 02:30""#;

/// Stop 1 only ever sees one train at a time.
pub const NO_SHARED_ARRIVAL_AT_STOP_ONE: &str = r#"stopID,route,trainID,time
1,"55","465a","Jul 05 2021 01:30"
2,"C","314p","Jul 05 2021 02:30"
3,"21","159t","Jul 05 2021 02:30"
1,"55","159t","Jul 05 2021 02:30""#;

pub const TWO_TRAINS: &str = r#"stopID,route,trainID,time
1,"C","865a","Jul 05 2021 13:14"
1,"55","465a","Jul 05 2021 14:14""#;

/// Reference clock placed before every fixture.
pub fn fixture_now() -> ScheduleTime {
    ScheduleTime::parse("Jul 01 2021 00:00").unwrap()
}
