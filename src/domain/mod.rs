pub mod reading;
pub mod snapshot;

pub use reading::{StationReading, Threshold};
pub use snapshot::Snapshot;
