// 3rd party crates
use reqwest::Client;
use serde::Deserialize;

// Project imports
use crate::providers::types::ZoneState;
use crate::settings::models::EndpointConfig;

/// Represents a client for the block storage service's availability zone API.
#[derive(Debug, Clone)]
pub struct VolumeClient {
    pub config: EndpointConfig,
    pub client: Client,
}

/// One availability zone as reported by the block storage service.
///
/// Storage zones have no host topology.
#[derive(Debug, Clone, Deserialize)]
pub struct VolumeZone {
    #[serde(rename = "zoneName")]
    pub zone_name: Option<String>,
    #[serde(rename = "zoneState")]
    pub zone_state: Option<ZoneState>,
}
