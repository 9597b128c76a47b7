pub mod schedule;
pub mod time;

pub use schedule::*;
pub use time::*;

/// Identifier of a physical stop. Not unique per record.
pub type StopId = i64;
