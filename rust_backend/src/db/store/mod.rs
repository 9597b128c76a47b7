//! Store capability required by ingestion and queries.
//!
//! The core only needs a keyed, enumerable store that can be wiped as a whole:
//!
//! ```ignore
//! store.write("000000000001-3f2a9c1d0b7e-000000_865a", &schedule).await?;
//! let everything = store.read_all().await?;
//! store.clear().await?;
//! ```
//!
//! Records are never updated or deleted individually. Any backend providing
//! these operations is interchangeable; see [`crate::db::stores`].

use async_trait::async_trait;

pub mod error;

pub use error::{StoreError, StoreResult};

use crate::models::Schedule;

/// Keyed, enumerable, append-only schedule storage.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust. The store is
/// expected to serialize its own writers; callers run one ingestion at a time.
#[async_trait]
pub trait ScheduleStore: Send + Sync {
    /// Check that the store is reachable.
    ///
    /// # Returns
    /// - `Ok(true)` if the store can be used
    /// - `Ok(false)` if it is unhealthy but no error occurred
    /// - `Err(StoreError)` if the check itself failed
    async fn health_check(&self) -> StoreResult<bool>;

    /// Persist `record` under `key`.
    async fn write(&self, key: &str, record: &Schedule) -> StoreResult<()>;

    /// Persist a whole batch.
    ///
    /// The default writes records one by one, so a failure part way through
    /// leaves the earlier records in place. Stores that can apply a batch
    /// atomically should override it.
    async fn write_batch(&self, records: &[(String, Schedule)]) -> StoreResult<()> {
        for (key, record) in records {
            self.write(key, record).await?;
        }
        Ok(())
    }

    /// Every stored record, in the store's enumeration order.
    ///
    /// An empty store yields an empty vector, not an error.
    async fn read_all(&self) -> StoreResult<Vec<Schedule>>;

    /// Every stored key, in the store's enumeration order.
    async fn keys(&self) -> StoreResult<Vec<String>>;

    /// Remove every record.
    async fn clear(&self) -> StoreResult<()>;
}
