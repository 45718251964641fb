// 3rd party crates
use thiserror::Error;

// Project imports
use crate::providers::compute::errors::ComputeError;

/// Errors that abort report building.
///
/// Only the compute branch can fail the report; block storage failures are
/// downgraded to a warning and an empty branch.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to list compute availability zones: {0}")]
    Compute(#[from] ComputeError),
}
