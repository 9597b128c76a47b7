//! The schedule record.

use serde::{Deserialize, Serialize};

use super::time::ScheduleTime;
use super::StopId;

/// One stop/route/train/time tuple.
///
/// Field names on the wire match the tabular header (`stopID`, `route`,
/// `trainID`, `time`) plus the synthesized `ID`:
///
/// ```json
/// {"stopID": 1, "route": "C", "trainID": "865a", "time": "Jul 05 2021 13:14", "ID": "0_865a"}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    #[serde(rename = "stopID")]
    pub stop_id: StopId,
    pub route: String,
    #[serde(rename = "trainID")]
    pub train_id: String,
    pub time: ScheduleTime,
    /// `"{row}_{trainID}"`, assigned at ingestion. Only unique within a batch.
    #[serde(rename = "ID", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl Schedule {
    pub fn new(
        stop_id: StopId,
        route: impl Into<String>,
        train_id: impl Into<String>,
        time: ScheduleTime,
    ) -> Self {
        Self {
            stop_id,
            route: route.into(),
            train_id: train_id.into(),
            time,
            id: None,
        }
    }

    /// Record id for the `row`-th data row of a batch.
    pub fn batch_id(row: usize, train_id: &str) -> String {
        format!("{}_{}", row, train_id)
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}
