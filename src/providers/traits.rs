// 3rd party crates
use async_trait::async_trait;

// Project imports
use crate::providers::compute::errors::ComputeError;
use crate::providers::compute::types::ComputeZone;
use crate::providers::volume::errors::VolumeError;
use crate::providers::volume::types::VolumeZone;

/// A source of compute availability zones.
///
/// The report builder is generic over this trait so that the HTTP client can
/// be swapped for an in-memory implementation in tests.
///
/// # Implementation Requirements
///
/// Implementors must:
/// - Return the zone list for a single, independent read; no caching and no
///   pagination are expected.
/// - Surface a policy refusal of the detailed listing as
///   `ComputeError::PermissionDenied`, since the builder's downgrade-and-retry
///   logic keys on that variant.
#[async_trait]
pub trait ComputeZoneSource: Send + Sync {
    /// Lists availability zones known to the compute service.
    ///
    /// # Arguments
    ///
    /// * `detailed` - Request the per-host, per-service breakdown. The
    ///   detailed listing is policy-gated and may be refused.
    ///
    /// # Returns
    ///
    /// * `Ok(zones)` - Zones as returned by the service, in service order
    /// * `Err(ComputeError)` - The listing failed; `PermissionDenied` is the
    ///   one recoverable condition
    async fn list_availability_zones(
        &self,
        detailed: bool,
    ) -> Result<Vec<ComputeZone>, ComputeError>;
}

/// A source of block storage availability zones.
///
/// Not every storage backend implements the zone listing at all; callers are
/// expected to treat any error as "no zones to report".
#[async_trait]
pub trait VolumeZoneSource: Send + Sync {
    /// Lists availability zones known to the block storage service.
    async fn list_availability_zones(&self) -> Result<Vec<VolumeZone>, VolumeError>;
}
