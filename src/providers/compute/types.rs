// 3rd party crates
use reqwest::Client;
use serde::Deserialize;

// Project imports
use crate::providers::types::{HostMap, ZoneState};
use crate::settings::models::EndpointConfig;

/// Represents a client for the compute service's availability zone API.
#[derive(Debug, Clone)]
pub struct ComputeClient {
    pub config: EndpointConfig,
    pub client: Client,
}

/// One availability zone as reported by the compute service.
///
/// Every field is optional on the wire; `hosts` is only populated by the
/// detailed listing and may additionally be null for zones without hosts.
#[derive(Debug, Clone, Deserialize)]
pub struct ComputeZone {
    #[serde(rename = "zoneName")]
    pub zone_name: Option<String>,
    #[serde(rename = "zoneState")]
    pub zone_state: Option<ZoneState>,
    #[serde(default)]
    pub hosts: Option<HostMap>,
}
