// Project imports
use crate::providers::compute::types::ComputeZone;
use crate::providers::types::{ServiceState, ZoneState};
use crate::providers::volume::types::VolumeZone;

// Current module imports
use super::types::ZoneInfo;

/// Extracts the two attributes present on every zone shape into a base row.
/// Attributes absent on the input stay absent on the output.
pub fn project_common(zone_name: Option<&str>, zone_state: Option<&ZoneState>) -> ZoneInfo {
    ZoneInfo {
        zone_status: zone_state.map(|state| {
            if state.available {
                "available".to_string()
            } else {
                "not available".to_string()
            }
        }),
        zone_name: zone_name.map(str::to_string),
        ..ZoneInfo::default()
    }
}

/// Renders one service's state as "{enabled|disabled} {:-)|XXX} {updated_at}".
fn service_status(state: &ServiceState) -> String {
    format!(
        "{} {} {}",
        if state.active { "enabled" } else { "disabled" },
        if state.available { ":-)" } else { "XXX" },
        state.updated_at.as_deref().unwrap_or("")
    )
}

/// Expands one compute zone into report rows.
///
/// Without `verbose` this is a single base row. With `verbose` and a
/// non-empty host map, one row per (host, service) pair; rows follow the host
/// and service map iteration order, which is unordered. A verbose zone with
/// no hosts still yields one row, with empty host and service cells.
pub fn expand_compute(zone: &ComputeZone, verbose: bool) -> Vec<ZoneInfo> {
    let base = project_common(zone.zone_name.as_deref(), zone.zone_state.as_ref());

    if !verbose {
        return vec![base];
    }

    match &zone.hosts {
        Some(hosts) if !hosts.is_empty() => {
            let mut result: Vec<ZoneInfo> = Vec::new();
            for (host, services) in hosts {
                let mut host_info = base.clone();
                host_info.host_name = Some(host.clone());

                for (service, state) in services {
                    let mut info = host_info.clone();
                    info.service_name = Some(service.clone());
                    info.service_status = Some(service_status(state));
                    result.push(info);
                }
            }
            result
        }
        _ => {
            let mut info = base;
            info.host_name = Some(String::new());
            info.service_name = Some(String::new());
            info.service_status = Some(String::new());
            vec![info]
        }
    }
}

/// Expands one block storage zone into report rows: always exactly one row,
/// storage zones have no host topology.
pub fn expand_volume(zone: &VolumeZone) -> Vec<ZoneInfo> {
    vec![project_common(zone.zone_name.as_deref(), zone.zone_state.as_ref())]
}
