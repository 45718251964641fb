// 3rd party crates
use tracing::{debug, warn};

// Project imports
use crate::providers::compute::errors::ComputeError;
use crate::providers::traits::{ComputeZoneSource, VolumeZoneSource};

// Current module imports
use super::errors::ReportError;
use super::expand::{expand_compute, expand_volume};
use super::types::{ColumnSet, Report, ReportRequest, ZoneInfo};

/// Builds the availability zone report.
///
/// Branches run sequentially, compute first. When neither branch is
/// requested, both run. The compute branch is fatal-by-default: a
/// permission-denied on the detailed listing gets one non-detailed retry, and
/// if that retry also fails the original error propagates; any other compute
/// failure propagates immediately. The volume branch never fails the report.
pub async fn build_report<C, V>(
    compute_client: &C,
    volume_client: &V,
    request: &ReportRequest,
) -> Result<Report, ReportError>
where
    C: ComputeZoneSource,
    V: VolumeZoneSource,
{
    // Show everything by default.
    let show_all = !request.compute && !request.volume;

    let columns = if request.long {
        ColumnSet::Long
    } else {
        ColumnSet::Short
    };

    let mut rows: Vec<ZoneInfo> = Vec::new();

    if request.compute || show_all {
        rows.extend(compute_rows(compute_client, request.long).await?);
    }
    if request.volume || show_all {
        rows.extend(volume_rows(volume_client).await);
    }

    Ok(Report { columns, rows })
}

/// Lists and expands compute zones, downgrading the detail level once when
/// policy forbids the detailed listing.
async fn compute_rows<C: ComputeZoneSource>(
    client: &C,
    verbose: bool,
) -> Result<Vec<ZoneInfo>, ReportError> {
    let zones = match client.list_availability_zones(true).await {
        Ok(zones) => zones,
        Err(original @ ComputeError::PermissionDenied { .. }) => {
            warn!("Policy forbids the detailed compute listing, retrying without detail");
            match client.list_availability_zones(false).await {
                Ok(zones) => zones,
                Err(retry) => {
                    // The detailed call's refusal is the primary diagnostic;
                    // the retry's own error is only logged.
                    debug!(error = %retry, "Downgraded compute listing failed as well");
                    return Err(ReportError::Compute(original));
                }
            }
        }
        Err(e) => return Err(ReportError::Compute(e)),
    };

    let mut rows: Vec<ZoneInfo> = Vec::new();
    for zone in &zones {
        rows.extend(expand_compute(zone, verbose));
    }
    Ok(rows)
}

/// Lists and expands block storage zones. Any failure means the backend does
/// not support the listing and contributes zero rows.
async fn volume_rows<V: VolumeZoneSource>(client: &V) -> Vec<ZoneInfo> {
    let zones = match client.list_availability_zones().await {
        Ok(zones) => zones,
        Err(e) => {
            warn!(
                error = %e,
                "Availability zones list not supported by the block storage API"
            );
            Vec::new()
        }
    };

    let mut rows: Vec<ZoneInfo> = Vec::new();
    for zone in &zones {
        rows.extend(expand_volume(zone));
    }
    rows
}
