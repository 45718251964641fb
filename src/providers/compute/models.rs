// 3rd party crates
use serde::Deserialize;

// Project imports
use crate::providers::compute::types::ComputeZone;

/// Envelope of the compute availability zone listing.
#[derive(Debug, Deserialize)]
pub struct ComputeZoneListResponse {
    #[serde(rename = "availabilityZoneInfo", default)]
    pub availability_zone_info: Vec<ComputeZone>,
}
