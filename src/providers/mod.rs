pub mod compute;
pub mod traits;
pub mod types;
pub mod volume;

pub use traits::{ComputeZoneSource, VolumeZoneSource};
