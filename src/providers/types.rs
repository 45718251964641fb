// Standard library
use std::collections::HashMap;

// 3rd party crates
use serde::Deserialize;

/// Availability state reported for a whole zone.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ZoneState {
    pub available: bool,
}

/// State of a single service daemon running on a host inside a compute zone.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServiceState {
    pub active: bool,
    pub available: bool,
    /// Timestamp of the last state report; the API may send null.
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Host topology of a detailed compute zone: host name to service name to state.
pub type HostMap = HashMap<String, HashMap<String, ServiceState>>;
