// 3rd party crates
use thiserror::Error;

/// Custom error type for compute availability zone operations.
#[derive(Debug, Error)]
pub enum ComputeError {
    #[error("Policy does not allow the requested compute listing: {message}")]
    PermissionDenied { message: String },

    #[error("Invalid authentication token for the compute endpoint")]
    InvalidAuthToken,

    #[error("HTTP client error: {0}")]
    HttpClientBuild(#[from] reqwest::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeaderValue(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Failed to fetch compute availability zones: {message}")]
    FetchFailed { message: String },

    #[error("Compute availability zone request timed out")]
    Timeout,

    #[error("Compute endpoint is not configured")]
    MissingEndpoint,
}
