//! Availability zone report CLI.
//!
//! Queries the compute and block storage services for their availability
//! zone topology, flattens the per-host service breakdown into rows, and
//! renders a unified table. The report logic lives in [`report`]; the HTTP
//! clients in [`providers`] are swappable behind the
//! [`providers::ComputeZoneSource`] and [`providers::VolumeZoneSource`]
//! traits.

pub mod cli;
pub mod functions;
pub mod output;
pub mod providers;
pub mod report;
pub mod settings;
