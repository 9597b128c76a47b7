//! Ingestion of delimited schedule tables into a store.
//!
//! A batch is read and validated completely before anything is written; the
//! first bad row aborts the batch and the store is left untouched. Valid
//! batches are written with a single [`ScheduleStore::write_batch`] call.
//!
//! Storage keys are `{sequence:012}-{tag}-{row:06}_{trainID}`. The sequence
//! grows by one per new batch across the whole store, so enumerating keys in
//! order gives insertion order. The tag is a prefix of the batch checksum; a
//! batch whose tag is already stored keeps its sequence and rewrites its keys.

use std::path::Path;

use log::{debug, info};

use crate::db::checksum::{batch_tag, calculate_checksum};
use crate::db::store::ScheduleStore;
use crate::error::{ScheduleError, ScheduleResult};
use crate::models::{Schedule, ScheduleTime};
use crate::parsing::schedule_rows;
use crate::preprocessing::ScheduleValidator;

/// Parse and validate a raw table without touching any store.
///
/// Every returned record carries its batch id `"{row}_{trainID}"`.
pub fn read_schedule_table(raw: &str, now: ScheduleTime) -> ScheduleResult<Vec<Schedule>> {
    let validator = ScheduleValidator::new(now);

    schedule_rows(raw)?
        .map(|row| {
            let row = row?;
            let schedule = validator.validate_row(&row)?;
            Ok(schedule.with_id(Schedule::batch_id(row.row, &row.train_id)))
        })
        .collect()
}

/// Storage key of the `row`-th record of batch `sequence` tagged `tag`.
pub fn storage_key(sequence: u64, tag: &str, row: usize, train_id: &str) -> String {
    format!("{:012}-{}-{:06}_{}", sequence, tag, row, train_id)
}

/// Sequence and batch tag at the front of a storage key.
fn key_batch(key: &str) -> Option<(u64, &str)> {
    let mut parts = key.splitn(3, '-');
    let sequence = parts.next()?.parse().ok()?;
    let tag = parts.next()?;
    Some((sequence, tag))
}

/// Sequence for the batch tagged `tag`, given the keys already stored.
///
/// Reuses the sequence of an earlier copy of the same batch, otherwise one
/// past the highest sequence in use.
pub fn batch_sequence(existing_keys: &[String], tag: &str) -> u64 {
    let batches: Vec<(u64, &str)> = existing_keys.iter().filter_map(|k| key_batch(k)).collect();

    if let Some((sequence, _)) = batches.iter().find(|(_, t)| *t == tag) {
        return *sequence;
    }
    batches.iter().map(|(sequence, _)| sequence + 1).max().unwrap_or(0)
}

/// Ingest `raw`, requiring scheduled times to be after `now`.
///
/// Returns the records written, in input order.
pub async fn ingest_at<S>(store: &S, raw: &str, now: ScheduleTime) -> ScheduleResult<Vec<Schedule>>
where
    S: ScheduleStore + ?Sized,
{
    let schedules = read_schedule_table(raw, now)?;
    if schedules.is_empty() {
        debug!("Schedule table has no data rows, nothing to write");
        return Ok(schedules);
    }

    let checksum = calculate_checksum(raw);
    let tag = batch_tag(&checksum);
    let sequence = batch_sequence(&store.keys().await?, tag);

    let entries: Vec<(String, Schedule)> = schedules
        .iter()
        .enumerate()
        .map(|(row, schedule)| {
            (
                storage_key(sequence, tag, row, &schedule.train_id),
                schedule.clone(),
            )
        })
        .collect();

    store.write_batch(&entries).await?;

    info!(
        "Ingested {} schedule records as batch {} (checksum: {})",
        schedules.len(),
        sequence,
        checksum
    );
    Ok(schedules)
}

/// Ingest `raw` against the current UTC wall clock.
pub async fn ingest<S>(store: &S, raw: &str) -> ScheduleResult<Vec<Schedule>>
where
    S: ScheduleStore + ?Sized,
{
    ingest_at(store, raw, ScheduleTime::now()).await
}

/// Read a table from `path` and ingest it.
pub async fn ingest_file<S>(store: &S, path: impl AsRef<Path>) -> ScheduleResult<Vec<Schedule>>
where
    S: ScheduleStore + ?Sized,
{
    let path = path.as_ref();
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ScheduleError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    info!("Ingesting schedule table from {}", path.display());
    ingest(store, &raw).await
}
