//! Service error envelope.
//!
//! On failure the service answers with a `{message, description}` body
//! instead of the operation's payload. [`ServiceError`] is that envelope,
//! doubling as an error type so operations can return it directly.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The literal message the service uses to report a missing resource.
///
/// Lookups treat this one message as a defined empty outcome rather than a
/// failure; every other envelope is an error.
pub const NOT_FOUND_MESSAGE: &str = "Not Found";

/// Structured failure payload returned by the service.
///
/// A response body is an error envelope exactly when it decodes to this
/// shape with both fields non-empty. The display format `"<message>,
/// <description>"` is relied on by callers and must not change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{message}, {description}")]
pub struct ServiceError {
    /// Short error message.
    pub message: String,
    /// Human-readable description.
    pub description: String,
}

impl ServiceError {
    /// Returns true when the envelope reports a missing resource.
    pub fn is_not_found(&self) -> bool {
        self.message == NOT_FOUND_MESSAGE
    }
}
