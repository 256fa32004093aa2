//! Client error types.

use qualitics_core::ServiceError;
use thiserror::Error;

/// Error type for client operations.
///
/// Every failure is returned to the caller immediately; nothing is retried
/// or recovered internally. Retry and backoff policy belong to the caller.
#[derive(Debug, Error)]
pub enum ClientError {
    /// No access token configured.
    #[error("access token needs to be set")]
    MissingCredential,

    /// The HTTP round trip failed: network error, timeout, or a request
    /// that could not be constructed.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body is not valid JSON for the shape being decoded.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The service answered with a structured error payload.
    #[error(transparent)]
    Service(#[from] ServiceError),
}
