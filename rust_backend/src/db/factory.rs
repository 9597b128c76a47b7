//! Store factory for dependency injection.
//!
//! This module provides utilities for creating and configuring store instances
//! based on runtime configuration. Callers hold the returned handle and pass it
//! to ingestion and query functions explicitly.

use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use log::info;

use super::store::{ScheduleStore, StoreError, StoreResult};
#[cfg(feature = "json-store")]
use super::stores::JsonFileStore;
#[cfg(feature = "local-store")]
use super::stores::LocalStore;
use crate::config::ScheduleConfig;

/// Store type configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreType {
    /// In-memory store
    Local,
    /// Directory of JSON documents
    Json,
}

impl FromStr for StoreType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" | "memory" => Ok(Self::Local),
            "json" | "file" => Ok(Self::Json),
            _ => Err(format!("Unknown store type: {}", s)),
        }
    }
}

impl fmt::Display for StoreType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreType::Local => write!(f, "local"),
            StoreType::Json => write!(f, "json"),
        }
    }
}

/// Store factory for creating store instances.
///
/// # Example
/// ```no_run
/// use transit_schedule::config::ScheduleConfig;
/// use transit_schedule::db::factory::StoreFactory;
/// use transit_schedule::db::store::ScheduleStore;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = ScheduleConfig::from_default_location()?;
///     let store = StoreFactory::from_config(&config).await?;
///     assert!(store.health_check().await?);
///     Ok(())
/// }
/// ```
pub struct StoreFactory;

impl StoreFactory {
    /// Create a store instance based on type.
    ///
    /// # Arguments
    /// * `store_type` - Type of store to create
    /// * `directory` - Root directory, used by the JSON file store
    pub async fn create(
        store_type: StoreType,
        directory: &Path,
    ) -> StoreResult<Arc<dyn ScheduleStore>> {
        info!("Creating {} store", store_type);
        match store_type {
            #[cfg(feature = "local-store")]
            StoreType::Local => Ok(Self::create_local()),
            #[cfg(feature = "json-store")]
            StoreType::Json => {
                let store = Self::create_json(directory).await?;
                Ok(store as Arc<dyn ScheduleStore>)
            }
            #[allow(unreachable_patterns)]
            other => {
                let _ = directory;
                Err(StoreError::ConfigurationError(format!(
                    "{} store support is not compiled in",
                    other
                )))
            }
        }
    }

    /// Create an in-memory store.
    #[cfg(feature = "local-store")]
    pub fn create_local() -> Arc<dyn ScheduleStore> {
        Arc::new(LocalStore::new())
    }

    /// Create a JSON file store rooted at `directory`, creating it if needed.
    #[cfg(feature = "json-store")]
    pub async fn create_json(directory: &Path) -> StoreResult<Arc<JsonFileStore>> {
        Ok(Arc::new(JsonFileStore::open(directory).await?))
    }

    /// Create a store from configuration, honoring the `SCHEDULE_STORE` override.
    pub async fn from_config(config: &ScheduleConfig) -> StoreResult<Arc<dyn ScheduleStore>> {
        let store_type = config.resolved_store_type()?;
        Self::create(store_type, &config.json.directory).await
    }
}
