//! Storage for schedule records.
//!
//! Ingestion and queries never touch a global handle: callers build a store
//! (usually through [`factory::StoreFactory`]) and pass it in explicitly.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Callers (CLI, tests, embedding application)            │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Services (services/) - ingestion + temporal queries    │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  ScheduleStore trait (store/) - write/read_all/clear    │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌───────────────┴────────────────┐
//!     │                                 │
//! ┌───▼──────────────┐     ┌──────────▼──────────────┐
//! │ Local Store      │     │ JSON File Store         │
//! │ (in-memory)      │     │ (one file per record)   │
//! └──────────────────┘     └─────────────────────────┘
//! ```

#[cfg(not(any(feature = "local-store", feature = "json-store")))]
compile_error!("Enable at least one store backend feature.");

pub mod checksum;
pub mod factory;
pub mod store;
pub mod stores;

pub use checksum::calculate_checksum;
pub use factory::{StoreFactory, StoreType};
pub use store::{ScheduleStore, StoreError, StoreResult};
#[cfg(feature = "json-store")]
pub use stores::JsonFileStore;
#[cfg(feature = "local-store")]
pub use stores::LocalStore;
