// 3rd party crates
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, StatusCode};
use tracing::{debug, error};

// Project modules
use crate::providers::compute::functions::AUTH_HEADER;
use crate::settings::models::EndpointConfig;

use super::errors::VolumeError;
use super::models::VolumeZoneListResponse;
use super::types::{VolumeClient, VolumeZone};

/// Creates a reqwest client with the auth token header preinstalled.
///
/// Construction never touches the endpoint: a client may be built for a
/// branch that is not requested on this run.
pub(super) fn create_reqwest_client(config: &EndpointConfig) -> Result<Client, VolumeError> {
    let mut headers: HeaderMap = HeaderMap::new();
    let mut auth_value: HeaderValue = HeaderValue::from_str(&config.token).map_err(|e| {
        error!("Invalid auth token format: {}", e);
        VolumeError::InvalidHeaderValue(e)
    })?;
    auth_value.set_sensitive(true);
    headers.insert(AUTH_HEADER, auth_value);

    let client: Client = Client::builder()
        .default_headers(headers)
        .build()
        .map_err(|e| {
            error!("Failed to build HTTP client: {}", e);
            VolumeError::HttpClientBuild(e)
        })?;

    Ok(client)
}

/// Fetches the availability zone list from the block storage service.
pub async fn fetch_availability_zones(
    volume: &VolumeClient,
) -> Result<Vec<VolumeZone>, VolumeError> {
    if volume.config.endpoint.trim().is_empty() {
        error!("Block storage endpoint is not set");
        return Err(VolumeError::MissingEndpoint);
    }

    let url = format!(
        "{}/os-availability-zone",
        volume.config.endpoint.trim_end_matches('/')
    );

    debug!(url = %url, "Sending availability zone request");

    let response = tokio::time::timeout(
        tokio::time::Duration::from_secs(10),
        volume.client.get(&url).send(),
    )
    .await
    .map_err(|_| VolumeError::Timeout)?
    .map_err(|e| VolumeError::FetchFailed {
        message: format!("Failed to send request: {}", e),
    })?;

    let status = response.status();
    match status {
        StatusCode::OK => {
            let body: VolumeZoneListResponse =
                response.json().await.map_err(|e| VolumeError::FetchFailed {
                    message: format!("Failed to parse response: {}", e),
                })?;
            Ok(body.availability_zone_info)
        }
        StatusCode::UNAUTHORIZED => Err(VolumeError::InvalidAuthToken),
        _ => {
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(VolumeError::FetchFailed {
                message: format!("HTTP {} - {}", status, error_body),
            })
        }
    }
}
