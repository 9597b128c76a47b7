//! Scheduled arrival times.
//!
//! Times arrive as text in a single fixed layout (`Jul 04 2021 07:42`). Month
//! names do not sort lexicographically in calendar order, so the text is parsed
//! once into a [`ScheduleTime`] and every comparison, sort and day bucket works
//! on the parsed value. The layout is only used again when a time is displayed
//! or persisted.

use std::fmt;
use std::str::FromStr;

use chrono::{Duration, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ScheduleError, ScheduleResult};

/// `strftime` layout of a scheduled time, e.g. `Jul 04 2021 07:42`.
pub const SCHEDULE_TIME_LAYOUT: &str = "%b %d %Y %H:%M";

/// `strftime` layout of a schedule day, e.g. `Jul 04 2021`.
pub const SCHEDULE_DATE_LAYOUT: &str = "%b %d %Y";

/// A scheduled arrival, minute resolution, no time zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ScheduleTime(NaiveDateTime);

impl ScheduleTime {
    /// Wrap an already parsed date-time.
    pub fn new(value: NaiveDateTime) -> Self {
        Self(value)
    }

    /// Parse text in [`SCHEDULE_TIME_LAYOUT`].
    ///
    /// The text must be exactly what [`Display`](fmt::Display) would produce:
    /// zero-padded day and time, title-case month abbreviation.
    ///
    /// # Errors
    /// [`ScheduleError::TimeParse`] carrying the offending text.
    pub fn parse(value: &str) -> ScheduleResult<Self> {
        parse_exact(
            value,
            SCHEDULE_TIME_LAYOUT,
            NaiveDateTime::parse_from_str,
            |t, layout| t.format(layout).to_string(),
        )
        .map(Self)
    }

    /// Current UTC wall-clock time.
    pub fn now() -> Self {
        Self(Utc::now().naive_utc())
    }

    /// The calendar day this time falls on.
    pub fn date(&self) -> NaiveDate {
        self.0.date()
    }

    pub fn as_naive(&self) -> NaiveDateTime {
        self.0
    }

    /// Shift by `duration`, saturating at the ends of the representable range.
    pub fn saturating_add(&self, duration: Duration) -> Self {
        Self(self.0.checked_add_signed(duration).unwrap_or(NaiveDateTime::MAX))
    }
}

impl fmt::Display for ScheduleTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(SCHEDULE_TIME_LAYOUT))
    }
}

impl FromStr for ScheduleTime {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<NaiveDateTime> for ScheduleTime {
    fn from(value: NaiveDateTime) -> Self {
        Self(value)
    }
}

// Persisted in the display layout.
impl Serialize for ScheduleTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ScheduleTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}

/// Parse a day in [`SCHEDULE_DATE_LAYOUT`].
pub fn parse_schedule_date(value: &str) -> ScheduleResult<NaiveDate> {
    parse_exact(
        value,
        SCHEDULE_DATE_LAYOUT,
        NaiveDate::parse_from_str,
        |d, layout| d.format(layout).to_string(),
    )
}

/// Parse `value` with `layout` and require it to format back to the same text.
fn parse_exact<T>(
    value: &str,
    layout: &'static str,
    parse: fn(&str, &str) -> chrono::ParseResult<T>,
    format: fn(&T, &str) -> String,
) -> ScheduleResult<T> {
    let error = |source| ScheduleError::TimeParse {
        value: value.to_string(),
        layout,
        source,
    };

    let parsed = parse(value, layout).map_err(|e| error(Some(e)))?;
    if format(&parsed, layout) != value {
        return Err(error(None));
    }
    Ok(parsed)
}

/// Format a day in [`SCHEDULE_DATE_LAYOUT`].
pub fn format_schedule_date(date: NaiveDate) -> String {
    date.format(SCHEDULE_DATE_LAYOUT).to_string()
}

#[cfg(test)]
#[path = "time_tests.rs"]
mod time_tests;
