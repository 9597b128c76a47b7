//! In-memory local store implementation.
//!
//! This module provides a local implementation of [`ScheduleStore`] suitable
//! for unit testing and local development. Records live in a `Vec` in
//! insertion order with a `HashMap` index by key, giving fast, deterministic
//! and isolated execution.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::db::store::{ScheduleStore, StoreError, StoreResult};
use crate::models::Schedule;

/// In-memory local store.
///
/// Clones share the same underlying data.
///
/// # Example
/// ```
/// use transit_schedule::db::stores::LocalStore;
/// use transit_schedule::db::store::ScheduleStore;
///
/// # #[tokio::main]
/// # async fn main() {
/// let store = LocalStore::new();
/// assert!(store.read_all().await.unwrap().is_empty());
/// # }
/// ```
#[derive(Clone)]
pub struct LocalStore {
    data: Arc<RwLock<LocalData>>,
}

struct LocalData {
    records: Vec<(String, Schedule)>,
    index: HashMap<String, usize>,

    // Connection health
    is_healthy: bool,
}

impl Default for LocalData {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            index: HashMap::new(),
            is_healthy: true,
        }
    }
}

impl LocalData {
    fn upsert(&mut self, key: &str, record: &Schedule) {
        match self.index.get(key) {
            Some(&slot) => self.records[slot].1 = record.clone(),
            None => {
                self.index.insert(key.to_string(), self.records.len());
                self.records.push((key.to_string(), record.clone()));
            }
        }
    }
}

impl LocalStore {
    /// Create a new empty local store.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(LocalData::default())),
        }
    }

    /// Set the health status for testing connection failures.
    pub fn set_healthy(&self, healthy: bool) -> StoreResult<()> {
        self.write_data()?.is_healthy = healthy;
        Ok(())
    }

    /// Number of stored records.
    pub fn len(&self) -> StoreResult<usize> {
        Ok(self.read_data()?.records.len())
    }

    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }

    fn read_data(&self) -> StoreResult<RwLockReadGuard<'_, LocalData>> {
        self.data
            .read()
            .map_err(|_| StoreError::InternalError("local store lock poisoned".to_string()))
    }

    fn write_data(&self) -> StoreResult<RwLockWriteGuard<'_, LocalData>> {
        self.data
            .write()
            .map_err(|_| StoreError::InternalError("local store lock poisoned".to_string()))
    }

    /// Helper to check health and return error if unhealthy.
    fn check_health(data: &LocalData) -> StoreResult<()> {
        if !data.is_healthy {
            return Err(StoreError::ConnectionError(
                "Store is not healthy".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for LocalStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ScheduleStore for LocalStore {
    async fn health_check(&self) -> StoreResult<bool> {
        Ok(self.read_data()?.is_healthy)
    }

    async fn write(&self, key: &str, record: &Schedule) -> StoreResult<()> {
        let mut data = self.write_data()?;
        Self::check_health(&data)?;
        data.upsert(key, record);
        Ok(())
    }

    // One lock for the whole batch: readers never observe half of it.
    async fn write_batch(&self, records: &[(String, Schedule)]) -> StoreResult<()> {
        let mut data = self.write_data()?;
        Self::check_health(&data)?;
        for (key, record) in records {
            data.upsert(key, record);
        }
        Ok(())
    }

    async fn read_all(&self) -> StoreResult<Vec<Schedule>> {
        let data = self.read_data()?;
        Self::check_health(&data)?;
        Ok(data.records.iter().map(|(_, r)| r.clone()).collect())
    }

    async fn keys(&self) -> StoreResult<Vec<String>> {
        let data = self.read_data()?;
        Self::check_health(&data)?;
        Ok(data.records.iter().map(|(k, _)| k.clone()).collect())
    }

    async fn clear(&self) -> StoreResult<()> {
        let mut data = self.write_data()?;
        Self::check_health(&data)?;
        let is_healthy = data.is_healthy;
        *data = LocalData {
            is_healthy,
            ..Default::default()
        };
        Ok(())
    }
}
