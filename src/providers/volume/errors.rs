// 3rd party crates
use thiserror::Error;

/// Custom error type for block storage availability zone operations.
///
/// The report builder treats every variant the same way (the backend may not
/// implement the listing at all), but the variants keep the log messages
/// useful.
#[derive(Debug, Error)]
pub enum VolumeError {
    #[error("Invalid authentication token for the block storage endpoint")]
    InvalidAuthToken,

    #[error("HTTP client error: {0}")]
    HttpClientBuild(#[from] reqwest::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeaderValue(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Failed to fetch block storage availability zones: {message}")]
    FetchFailed { message: String },

    #[error("Block storage availability zone request timed out")]
    Timeout,

    #[error("Block storage endpoint is not configured")]
    MissingEndpoint,
}
