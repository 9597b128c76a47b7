//! Parsers for schedule input formats.
//!
//! - [`csv_parser`]: header-checked delimited text with one schedule per row
//!
//! # Example
//!
//! ```
//! use transit_schedule::parsing::csv_parser::parse_schedule_table;
//!
//! let rows = parse_schedule_table("stopID,route,trainID,time\n1,C,865a,Jul 05 2021 13:14")
//!     .expect("valid table");
//! assert_eq!(rows[0].train_id, "865a");
//! ```

pub mod csv_parser;


pub use csv_parser::{parse_schedule_table, schedule_rows, RawScheduleRow, EXPECTED_HEADERS};
