// 3rd party crates
use serde::Deserialize;

// Project imports
use crate::providers::volume::types::VolumeZone;

/// Envelope of the block storage availability zone listing.
#[derive(Debug, Deserialize)]
pub struct VolumeZoneListResponse {
    #[serde(rename = "availabilityZoneInfo", default)]
    pub availability_zone_info: Vec<VolumeZone>,
}
