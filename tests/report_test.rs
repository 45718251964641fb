//! End-to-end report builder scenarios driven by in-memory zone sources.

// Standard library
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

// 3rd party crates
use async_trait::async_trait;

// Crate under test
use cloudzones::providers::compute::errors::ComputeError;
use cloudzones::providers::compute::types::ComputeZone;
use cloudzones::providers::traits::{ComputeZoneSource, VolumeZoneSource};
use cloudzones::providers::types::{HostMap, ServiceState, ZoneState};
use cloudzones::providers::volume::errors::VolumeError;
use cloudzones::providers::volume::types::VolumeZone;
use cloudzones::report::errors::ReportError;
use cloudzones::report::{build_report, ColumnSet, ReportRequest};

fn service(updated_at: &str) -> ServiceState {
    ServiceState {
        active: true,
        available: true,
        updated_at: Some(updated_at.to_string()),
    }
}

fn compute_zone(name: &str, hosts: Option<HostMap>) -> ComputeZone {
    ComputeZone {
        zone_name: Some(name.to_string()),
        zone_state: Some(ZoneState { available: true }),
        hosts,
    }
}

fn volume_zone(name: &str) -> VolumeZone {
    VolumeZone {
        zone_name: Some(name.to_string()),
        zone_state: Some(ZoneState { available: true }),
    }
}

/// Compute source that answers every listing from a fixed zone set.
struct FixedCompute {
    zones: Vec<ComputeZone>,
}

#[async_trait]
impl ComputeZoneSource for FixedCompute {
    async fn list_availability_zones(
        &self,
        _detailed: bool,
    ) -> Result<Vec<ComputeZone>, ComputeError> {
        Ok(self.zones.clone())
    }
}

/// Compute source whose detailed listing is always refused by policy.
struct DeniedDetailCompute {
    fallback: Vec<ComputeZone>,
    detailed_calls: AtomicUsize,
}

#[async_trait]
impl ComputeZoneSource for DeniedDetailCompute {
    async fn list_availability_zones(
        &self,
        detailed: bool,
    ) -> Result<Vec<ComputeZone>, ComputeError> {
        if detailed {
            self.detailed_calls.fetch_add(1, Ordering::SeqCst);
            Err(ComputeError::PermissionDenied {
                message: "policy forbids detail".to_string(),
            })
        } else {
            Ok(self.fallback.clone())
        }
    }
}

/// Compute source where the detailed listing is refused and the downgraded
/// retry breaks differently.
struct AlwaysFailingCompute;

#[async_trait]
impl ComputeZoneSource for AlwaysFailingCompute {
    async fn list_availability_zones(
        &self,
        detailed: bool,
    ) -> Result<Vec<ComputeZone>, ComputeError> {
        if detailed {
            Err(ComputeError::PermissionDenied {
                message: "original denial".to_string(),
            })
        } else {
            Err(ComputeError::FetchFailed {
                message: "retry transport failure".to_string(),
            })
        }
    }
}

/// Volume source that answers from a fixed zone set and records being asked.
struct FixedVolume {
    zones: Vec<VolumeZone>,
    called: AtomicBool,
}

impl FixedVolume {
    fn new(zones: Vec<VolumeZone>) -> Self {
        Self {
            zones,
            called: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl VolumeZoneSource for FixedVolume {
    async fn list_availability_zones(&self) -> Result<Vec<VolumeZone>, VolumeError> {
        self.called.store(true, Ordering::SeqCst);
        Ok(self.zones.clone())
    }
}

/// Volume source backed by a service that does not implement the listing.
struct BrokenVolume;

#[async_trait]
impl VolumeZoneSource for BrokenVolume {
    async fn list_availability_zones(&self) -> Result<Vec<VolumeZone>, VolumeError> {
        Err(VolumeError::FetchFailed {
            message: "HTTP 404 - not implemented".to_string(),
        })
    }
}

#[tokio::test]
async fn no_flags_reports_both_branches_compute_first() {
    let compute = FixedCompute {
        zones: vec![compute_zone("nova", None)],
    };
    let volume = FixedVolume::new(vec![volume_zone("ceph")]);

    let report = build_report(&compute, &volume, &ReportRequest::default())
        .await
        .unwrap();

    assert_eq!(report.columns, ColumnSet::Short);
    assert_eq!(report.rows.len(), 2);
    assert_eq!(report.rows[0].zone_name.as_deref(), Some("nova"));
    assert_eq!(report.rows[1].zone_name.as_deref(), Some("ceph"));
}

#[tokio::test]
async fn compute_flag_skips_the_volume_branch() {
    let compute = FixedCompute {
        zones: vec![compute_zone("nova", None)],
    };
    let volume = FixedVolume::new(vec![volume_zone("ceph")]);

    let request = ReportRequest {
        compute: true,
        ..Default::default()
    };
    let report = build_report(&compute, &volume, &request).await.unwrap();

    assert_eq!(report.rows.len(), 1);
    assert!(!volume.called.load(Ordering::SeqCst));
}

#[tokio::test]
async fn long_request_selects_long_columns_and_expands_hosts() {
    let hosts: HostMap = HashMap::from([
        (
            "h1".to_string(),
            HashMap::from([
                ("svcA".to_string(), service("t1")),
                ("svcB".to_string(), service("t2")),
            ]),
        ),
        (
            "h2".to_string(),
            HashMap::from([("svcC".to_string(), service("t3"))]),
        ),
    ]);
    let compute = FixedCompute {
        zones: vec![
            compute_zone("nova", Some(hosts)),
            compute_zone("empty", None),
        ],
    };
    let volume = FixedVolume::new(Vec::new());

    let request = ReportRequest {
        compute: true,
        long: true,
        ..Default::default()
    };
    let report = build_report(&compute, &volume, &request).await.unwrap();

    assert_eq!(report.columns, ColumnSet::Long);
    // Three (host, service) pairs plus one padded row for the hostless zone.
    assert_eq!(report.rows.len(), 4);
    let hostless: Vec<_> = report
        .rows
        .iter()
        .filter(|r| r.zone_name.as_deref() == Some("empty"))
        .collect();
    assert_eq!(hostless.len(), 1);
    assert_eq!(hostless[0].host_name.as_deref(), Some(""));
}

#[tokio::test]
async fn permission_denied_downgrades_to_the_plain_listing() {
    let compute = DeniedDetailCompute {
        fallback: vec![compute_zone("nova", None)],
        detailed_calls: AtomicUsize::new(0),
    };
    let volume = FixedVolume::new(Vec::new());

    let request = ReportRequest {
        compute: true,
        long: true,
        ..Default::default()
    };
    let report = build_report(&compute, &volume, &request).await.unwrap();

    // One detailed attempt, then the downgraded listing's zones.
    assert_eq!(compute.detailed_calls.load(Ordering::SeqCst), 1);
    assert_eq!(report.rows.len(), 1);
    assert_eq!(report.rows[0].zone_name.as_deref(), Some("nova"));
    // The downgraded listing has no hosts, so verbose rows are padded.
    assert_eq!(report.rows[0].host_name.as_deref(), Some(""));
}

#[tokio::test]
async fn double_failure_propagates_the_original_denial() {
    let compute = AlwaysFailingCompute;
    let volume = FixedVolume::new(vec![volume_zone("ceph")]);

    let result = build_report(&compute, &volume, &ReportRequest::default()).await;

    match result {
        Err(ReportError::Compute(ComputeError::PermissionDenied { message })) => {
            assert_eq!(message, "original denial");
        }
        other => panic!("expected the original permission denial, got {:?}", other),
    }
    // The compute failure aborts the report before the volume branch runs.
    assert!(!volume.called.load(Ordering::SeqCst));
}

#[tokio::test]
async fn volume_failure_shrinks_the_report_instead_of_failing_it() {
    let compute = FixedCompute {
        zones: vec![compute_zone("nova", None)],
    };

    let report = build_report(&compute, &BrokenVolume, &ReportRequest::default())
        .await
        .unwrap();

    assert_eq!(report.rows.len(), 1);
    assert_eq!(report.rows[0].zone_name.as_deref(), Some("nova"));
}

#[tokio::test]
async fn verbose_row_count_is_the_sum_of_services_per_host() {
    let zone_a: HostMap = HashMap::from([
        (
            "a1".to_string(),
            HashMap::from([
                ("s1".to_string(), service("t1")),
                ("s2".to_string(), service("t2")),
                ("s3".to_string(), service("t3")),
            ]),
        ),
        (
            "a2".to_string(),
            HashMap::from([("s4".to_string(), service("t4"))]),
        ),
    ]);
    let compute = FixedCompute {
        zones: vec![
            compute_zone("za", Some(zone_a)),
            compute_zone("zb", Some(HostMap::new())),
            compute_zone("zc", None),
        ],
    };
    let volume = FixedVolume::new(Vec::new());

    let request = ReportRequest {
        compute: true,
        long: true,
        ..Default::default()
    };
    let report = build_report(&compute, &volume, &request).await.unwrap();

    // 3 + 1 services for za, and one padded row each for zb and zc.
    assert_eq!(report.rows.len(), 6);
}
