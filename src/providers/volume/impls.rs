// 3rd party crates
use async_trait::async_trait;

// Project imports
use crate::providers::traits::VolumeZoneSource;
use crate::settings::models::EndpointConfig;

// Current module imports
use super::errors::VolumeError;
use super::functions::{create_reqwest_client, fetch_availability_zones};
use super::types::{VolumeClient, VolumeZone};

impl VolumeClient {
    /// Creates a new client from the configured endpoint and token.
    pub fn new(config: EndpointConfig) -> Result<Self, VolumeError> {
        let client = create_reqwest_client(&config)?;
        Ok(Self { config, client })
    }
}

#[async_trait]
impl VolumeZoneSource for VolumeClient {
    async fn list_availability_zones(&self) -> Result<Vec<VolumeZone>, VolumeError> {
        fetch_availability_zones(self).await
    }
}
