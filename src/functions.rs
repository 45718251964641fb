// Standard library
use std::error::Error;

// 3rd party crates
use tracing::debug;

// Project imports
use crate::cli::Cli;
use crate::output::render_table;
use crate::providers::compute::types::ComputeClient;
use crate::providers::volume::types::VolumeClient;
use crate::report::build_report;
use crate::settings::models::Settings;

/// Runs one report: build the clients, query the requested branches, print
/// the table. A compute-branch failure propagates to the caller; the volume
/// branch can only shrink the report.
pub async fn run(cli: &Cli, settings: &Settings) -> Result<(), Box<dyn Error>> {
    let compute_client = ComputeClient::new(settings.compute.clone())?;
    let volume_client = VolumeClient::new(settings.volume.clone())?;

    let request = cli.to_request();
    debug!(
        compute = request.compute,
        volume = request.volume,
        long = request.long,
        "Building availability zone report"
    );

    let report = build_report(&compute_client, &volume_client, &request).await?;
    println!("{}", render_table(&report));

    Ok(())
}
