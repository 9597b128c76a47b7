//! Field-level validation of schedule rows.
//!
//! Each raw row is checked field by field in column order (`stopID`, then
//! `trainID`, then `time`) and the first problem is returned. Nothing here
//! touches the store.

use log::warn;

use crate::error::{ScheduleError, ScheduleResult, TrainIdProblem};
use crate::models::{Schedule, ScheduleTime, StopId};
use crate::parsing::RawScheduleRow;

/// Required length of a train identifier, in characters.
pub const TRAIN_ID_LEN: usize = 4;

/// Validator for schedule rows.
///
/// Holds the reference time that scheduled times must lie after. Pass a fixed
/// time to make validation deterministic.
///
/// # Examples
///
/// ```
/// use transit_schedule::models::ScheduleTime;
/// use transit_schedule::parsing::RawScheduleRow;
/// use transit_schedule::preprocessing::validator::ScheduleValidator;
///
/// let now = ScheduleTime::parse("Jul 01 2021 00:00").unwrap();
/// let validator = ScheduleValidator::new(now);
///
/// let row = RawScheduleRow {
///     row: 0,
///     stop_id: "1".to_string(),
///     route: "C".to_string(),
///     train_id: "865a".to_string(),
///     time: "Jul 05 2021 13:14".to_string(),
/// };
/// let schedule = validator.validate_row(&row).unwrap();
/// assert_eq!(schedule.stop_id, 1);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ScheduleValidator {
    now: ScheduleTime,
}

impl ScheduleValidator {
    pub fn new(now: ScheduleTime) -> Self {
        Self { now }
    }

    /// Validator referenced to the current UTC wall clock.
    pub fn at_current_time() -> Self {
        Self::new(ScheduleTime::now())
    }

    pub fn now(&self) -> ScheduleTime {
        self.now
    }

    /// Turn one raw row into a typed record. The record has no id yet.
    pub fn validate_row(&self, raw: &RawScheduleRow) -> ScheduleResult<Schedule> {
        let result = self.check_row(raw);
        if let Err(ref e) = result {
            warn!("Rejected schedule row {}: {}", raw.row, e);
        }
        result
    }

    fn check_row(&self, raw: &RawScheduleRow) -> ScheduleResult<Schedule> {
        let stop_id = Self::validate_stop_id(raw.row, &raw.stop_id)?;
        let train_id = Self::validate_train_id(&raw.train_id)?;
        let time = self.validate_time(&raw.time)?;

        Ok(Schedule::new(stop_id, raw.route.clone(), train_id, time))
    }

    /// Parse a base-10 signed 64-bit stop identifier.
    pub fn validate_stop_id(row: usize, value: &str) -> ScheduleResult<StopId> {
        value
            .parse::<StopId>()
            .map_err(|source| ScheduleError::FieldParse {
                row,
                field: "stopID",
                value: value.to_string(),
                source,
            })
    }

    /// Check a train identifier: exactly [`TRAIN_ID_LEN`] ASCII letters or digits.
    pub fn validate_train_id(value: &str) -> ScheduleResult<String> {
        let problem = match value.chars().count() {
            n if n < TRAIN_ID_LEN => Some(TrainIdProblem::TooFew),
            n if n > TRAIN_ID_LEN => Some(TrainIdProblem::TooMany),
            _ if !value.chars().all(|c| c.is_ascii_alphanumeric()) => {
                Some(TrainIdProblem::NotAlphanumeric)
            }
            _ => None,
        };

        match problem {
            Some(problem) => Err(ScheduleError::InvalidTrainId {
                value: value.to_string(),
                problem,
            }),
            None => Ok(value.to_string()),
        }
    }

    /// Parse a scheduled time and require it to be strictly after `now`.
    pub fn validate_time(&self, value: &str) -> ScheduleResult<ScheduleTime> {
        let time = ScheduleTime::parse(value)?;
        if time <= self.now {
            return Err(ScheduleError::PastScheduleTime {
                value: value.to_string(),
            });
        }
        Ok(time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator() -> ScheduleValidator {
        ScheduleValidator::new(ScheduleTime::parse("Jul 01 2021 00:00").unwrap())
    }

    fn raw(stop_id: &str, train_id: &str, time: &str) -> RawScheduleRow {
        RawScheduleRow {
            row: 3,
            stop_id: stop_id.to_string(),
            route: "C".to_string(),
            train_id: train_id.to_string(),
            time: time.to_string(),
        }
    }

    #[test]
    fn test_valid_row() {
        let schedule = validator()
            .validate_row(&raw("42", "865a", "Jul 05 2021 13:14"))
            .unwrap();
        assert_eq!(schedule.stop_id, 42);
        assert_eq!(schedule.route, "C");
        assert_eq!(schedule.train_id, "865a");
        assert_eq!(schedule.time.to_string(), "Jul 05 2021 13:14");
        assert!(schedule.id.is_none());
    }

    #[test]
    fn test_stop_id_must_be_integer() {
        for bad in ["not-a-number", "1.5", "", "0x10", "99999999999999999999"] {
            let err = validator()
                .validate_row(&raw(bad, "865a", "Jul 05 2021 13:14"))
                .unwrap_err();
            match err {
                ScheduleError::FieldParse {
                    row, field, value, ..
                } => {
                    assert_eq!(row, 3);
                    assert_eq!(field, "stopID");
                    assert_eq!(value, bad);
                }
                other => panic!("unexpected error for {bad:?}: {other:?}"),
            }
        }
    }

    #[test]
    fn test_signed_stop_ids_accepted() {
        assert_eq!(ScheduleValidator::validate_stop_id(0, "-7").unwrap(), -7);
        assert_eq!(ScheduleValidator::validate_stop_id(0, "+7").unwrap(), 7);
    }

    #[test]
    fn test_train_id_too_few_characters() {
        let err = ScheduleValidator::validate_train_id("865").unwrap_err();
        assert_eq!(err.to_string(), "Train Id is invalid, too few characters: 865");
    }

    #[test]
    fn test_train_id_too_many_characters() {
        let err = ScheduleValidator::validate_train_id("865ab").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Train Id is invalid, too many characters: 865ab"
        );
    }

    #[test]
    fn test_train_id_must_be_alphanumeric() {
        let err = ScheduleValidator::validate_train_id("a_b@").unwrap_err();
        assert_eq!(err.to_string(), "Train Id must be alphanumeric: a_b@");

        let err = ScheduleValidator::validate_train_id("ab c").unwrap_err();
        assert!(matches!(
            err,
            ScheduleError::InvalidTrainId {
                problem: TrainIdProblem::NotAlphanumeric,
                ..
            }
        ));
    }

    #[test]
    fn test_train_id_length_counts_characters() {
        // Four characters, eight bytes.
        let err = ScheduleValidator::validate_train_id("ééé1").unwrap_err();
        assert!(matches!(
            err,
            ScheduleError::InvalidTrainId {
                problem: TrainIdProblem::NotAlphanumeric,
                ..
            }
        ));
    }

    #[test]
    fn test_unparseable_time() {
        let err = validator()
            .validate_row(&raw("1", "865a", "2021-07-05 13:14"))
            .unwrap_err();
        assert!(matches!(err, ScheduleError::TimeParse { .. }));

        let err = validator()
            .validate_row(&raw("1", "865a", "Jul 5 2021 13:14"))
            .unwrap_err();
        assert!(matches!(err, ScheduleError::TimeParse { source: None, .. }));
    }

    #[test]
    fn test_past_and_present_times_rejected() {
        let v = validator();
        let err = v.validate_time("Jun 30 2021 23:59").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Scheduled time must be in the future: Jun 30 2021 23:59"
        );
        assert!(matches!(
            v.validate_time("Jul 01 2021 00:00"),
            Err(ScheduleError::PastScheduleTime { .. })
        ));
        assert!(v.validate_time("Jul 01 2021 00:01").is_ok());
    }

    #[test]
    fn test_fields_checked_in_column_order() {
        // Both stopID and trainID are bad; stopID wins.
        let err = validator()
            .validate_row(&raw("x", "1", "Jul 05 2021 13:14"))
            .unwrap_err();
        assert!(matches!(err, ScheduleError::FieldParse { .. }));

        // trainID and time are bad; trainID wins.
        let err = validator().validate_row(&raw("1", "1", "garbage")).unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidTrainId { .. }));
    }
}
