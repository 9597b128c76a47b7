//! Error types for ingestion and schedule queries.

use std::fmt;
use std::num::ParseIntError;
use std::path::PathBuf;

use crate::db::store::StoreError;

/// Result type for ingestion and query operations
pub type ScheduleResult<T> = Result<T, ScheduleError>;

/// Which way a header row differs from the expected columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderMismatch {
    /// Wrong number of columns.
    Count { expected: usize, actual: usize },
    /// Right count, wrong name or order at `position`.
    Column {
        position: usize,
        expected: String,
        actual: String,
    },
}

impl fmt::Display for HeaderMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeaderMismatch::Count { expected, actual } => {
                write!(f, "Expected {} headers, got {}", expected, actual)
            }
            HeaderMismatch::Column {
                expected, actual, ..
            } => write!(f, "Incorrect header. Expected {}, Got: {}", expected, actual),
        }
    }
}

/// Why a train identifier was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrainIdProblem {
    TooFew,
    TooMany,
    NotAlphanumeric,
}

/// Error type for ingestion and query operations.
///
/// Row numbers are 0-based data-row indices, the same index used in record ids.
#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    #[error("{0}")]
    HeaderMismatch(HeaderMismatch),

    #[error("Incorrect number of columns on row {row}. Expected: {expected}, Got: {actual}")]
    RowShape {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid {field} on row {row}: {value:?} ({source})")]
    FieldParse {
        row: usize,
        field: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("{}", train_id_message(.problem, .value))]
    InvalidTrainId {
        value: String,
        problem: TrainIdProblem,
    },

    #[error("Scheduled time must be in the future: {value}")]
    PastScheduleTime { value: String },

    /// `source` is `None` when the text parsed but is not written exactly in
    /// `layout` (unpadded fields, lower-case month).
    #[error("Cannot parse {value:?} as {layout:?}{}", parse_detail(.source))]
    TimeParse {
        value: String,
        layout: &'static str,
        #[source]
        source: Option<chrono::ParseError>,
    },

    #[error("Malformed CSV: {0}")]
    MalformedCsv(#[from] csv::Error),

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Store(#[from] StoreError),
}

fn parse_detail(source: &Option<chrono::ParseError>) -> String {
    match source {
        Some(e) => format!(": {}", e),
        None => ": not in canonical form".to_string(),
    }
}

fn train_id_message(problem: &TrainIdProblem, value: &str) -> String {
    match problem {
        TrainIdProblem::TooFew => format!("Train Id is invalid, too few characters: {}", value),
        TrainIdProblem::TooMany => format!("Train Id is invalid, too many characters: {}", value),
        TrainIdProblem::NotAlphanumeric => format!("Train Id must be alphanumeric: {}", value),
    }
}
