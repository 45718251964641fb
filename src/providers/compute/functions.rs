// 3rd party crates
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, StatusCode};
use tracing::{debug, error};

// Project modules
use crate::settings::models::EndpointConfig;

use super::errors::ComputeError;
use super::models::ComputeZoneListResponse;
use super::types::{ComputeClient, ComputeZone};

/// Name of the authentication header expected by the service.
pub(crate) const AUTH_HEADER: &str = "X-Auth-Token";

/// Creates a reqwest client with the auth token header preinstalled.
///
/// Construction never touches the endpoint: a client may be built for a
/// branch that is not requested on this run.
pub(super) fn create_reqwest_client(config: &EndpointConfig) -> Result<Client, ComputeError> {
    // Create headers; the token is security-sensitive.
    let mut headers: HeaderMap = HeaderMap::new();
    let mut auth_value: HeaderValue = HeaderValue::from_str(&config.token).map_err(|e| {
        error!("Invalid auth token format: {}", e);
        ComputeError::InvalidHeaderValue(e)
    })?;
    auth_value.set_sensitive(true);
    headers.insert(AUTH_HEADER, auth_value);

    // Build the client.
    let client: Client = Client::builder()
        .default_headers(headers)
        .build()
        .map_err(|e| {
            error!("Failed to build HTTP client: {}", e);
            ComputeError::HttpClientBuild(e)
        })?;

    Ok(client)
}

/// Fetches the availability zone list from the compute service.
///
/// The detailed variant includes the per-host service breakdown and is
/// policy-gated; a 403 from the service maps to `PermissionDenied` so the
/// caller can downgrade the request.
pub async fn fetch_availability_zones(
    compute: &ComputeClient,
    detailed: bool,
) -> Result<Vec<ComputeZone>, ComputeError> {
    if compute.config.endpoint.trim().is_empty() {
        error!("Compute endpoint is not set");
        return Err(ComputeError::MissingEndpoint);
    }

    let url = format!(
        "{}/os-availability-zone{}",
        compute.config.endpoint.trim_end_matches('/'),
        if detailed { "/detail" } else { "" }
    );

    debug!(url = %url, detailed = detailed, "Sending availability zone request");

    let response = tokio::time::timeout(
        tokio::time::Duration::from_secs(10),
        compute.client.get(&url).send(),
    )
    .await
    .map_err(|_| ComputeError::Timeout)?
    .map_err(|e| ComputeError::FetchFailed {
        message: format!("Failed to send request: {}", e),
    })?;

    let status = response.status();
    match status {
        StatusCode::OK => {
            let body: ComputeZoneListResponse =
                response.json().await.map_err(|e| ComputeError::FetchFailed {
                    message: format!("Failed to parse response: {}", e),
                })?;
            Ok(body.availability_zone_info)
        }
        StatusCode::FORBIDDEN => {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "policy does not allow this request".to_string());
            Err(ComputeError::PermissionDenied { message })
        }
        StatusCode::UNAUTHORIZED => Err(ComputeError::InvalidAuthToken),
        _ => {
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(ComputeError::FetchFailed {
                message: format!("HTTP {} - {}", status, error_body),
            })
        }
    }
}
