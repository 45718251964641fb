// 3rd party crates
use async_trait::async_trait;

// Project imports
use crate::providers::traits::ComputeZoneSource;
use crate::settings::models::EndpointConfig;

// Current module imports
use super::errors::ComputeError;
use super::functions::{create_reqwest_client, fetch_availability_zones};
use super::types::{ComputeClient, ComputeZone};

impl ComputeClient {
    /// Creates a new client from the configured endpoint and token.
    pub fn new(config: EndpointConfig) -> Result<Self, ComputeError> {
        let client = create_reqwest_client(&config)?;
        Ok(Self { config, client })
    }
}

#[async_trait]
impl ComputeZoneSource for ComputeClient {
    async fn list_availability_zones(
        &self,
        detailed: bool,
    ) -> Result<Vec<ComputeZone>, ComputeError> {
        fetch_availability_zones(self, detailed).await
    }
}
