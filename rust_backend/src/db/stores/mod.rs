//! Store implementations module.
//!
//! This module contains the implementations of the `ScheduleStore` trait:
//! - `local`: In-memory implementation for unit testing and local development
//! - `json_file`: One JSON document per record inside a directory

#[cfg(feature = "json-store")]
pub mod json_file;
#[cfg(feature = "local-store")]
pub mod local;

#[cfg(feature = "json-store")]
pub use json_file::JsonFileStore;
#[cfg(feature = "local-store")]
pub use local::LocalStore;
