//! Delimited-text reader for schedule tables.
//!
//! The first row must be exactly `stopID,route,trainID,time`. Every later row
//! must carry exactly four fields. Quoting follows the usual CSV rules and
//! blank lines are skipped. Field contents are not interpreted here; see
//! [`crate::preprocessing::validator`].

use csv::{ReaderBuilder, StringRecord};

use crate::error::{HeaderMismatch, ScheduleError, ScheduleResult};

/// Column names, in order, of the header row.
pub const EXPECTED_HEADERS: [&str; 4] = ["stopID", "route", "trainID", "time"];

/// One data row, still as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawScheduleRow {
    /// 0-based index among data rows (the header is not counted).
    pub row: usize,
    pub stop_id: String,
    pub route: String,
    pub train_id: String,
    pub time: String,
}

/// Check a header row against [`EXPECTED_HEADERS`].
///
/// A count mismatch is reported before any name is compared; otherwise the
/// first differing position is reported.
pub fn verify_headers(headers: &[&str]) -> ScheduleResult<()> {
    if headers.len() != EXPECTED_HEADERS.len() {
        return Err(ScheduleError::HeaderMismatch(HeaderMismatch::Count {
            expected: EXPECTED_HEADERS.len(),
            actual: headers.len(),
        }));
    }

    for (position, (actual, expected)) in headers.iter().zip(EXPECTED_HEADERS).enumerate() {
        if *actual != expected {
            return Err(ScheduleError::HeaderMismatch(HeaderMismatch::Column {
                position,
                expected: expected.to_string(),
                actual: actual.to_string(),
            }));
        }
    }
    Ok(())
}

/// Lazily read the data rows of `raw`.
///
/// The header is checked before this returns; each data row is shape-checked
/// as it is pulled, so a caller stops at the first bad row. Empty input and a
/// header-only table both yield no rows.
pub fn schedule_rows(
    raw: &str,
) -> ScheduleResult<impl Iterator<Item = ScheduleResult<RawScheduleRow>> + '_> {
    let mut records = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(raw.as_bytes())
        .into_records();

    if let Some(header) = records.next() {
        let header = header?;
        verify_headers(&header.iter().collect::<Vec<_>>())?;
    }

    Ok(records
        .enumerate()
        .map(|(row, record)| to_raw_row(row, record?)))
}

/// Read every data row of `raw`, stopping at the first error.
pub fn parse_schedule_table(raw: &str) -> ScheduleResult<Vec<RawScheduleRow>> {
    schedule_rows(raw)?.collect()
}

fn to_raw_row(row: usize, record: StringRecord) -> ScheduleResult<RawScheduleRow> {
    if record.len() != EXPECTED_HEADERS.len() {
        return Err(ScheduleError::RowShape {
            row,
            expected: EXPECTED_HEADERS.len(),
            actual: record.len(),
        });
    }

    Ok(RawScheduleRow {
        row,
        stop_id: record[0].to_string(),
        route: record[1].to_string(),
        train_id: record[2].to_string(),
        time: record[3].to_string(),
    })
}
