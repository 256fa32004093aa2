//! Access token credential.

use std::fmt;

use crate::error::ClientError;

/// Access token for the Qualitics API.
///
/// Wraps the secret issued in the service's profile settings. Immutable
/// after construction and safe to share across tasks; the library never
/// persists it.
#[derive(Clone)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates a token from the raw secret.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Checks that a token is actually present.
    ///
    /// Every domain operation calls this before touching the network.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::MissingCredential`] if the token is empty.
    pub fn validate(&self) -> Result<(), ClientError> {
        if self.0.is_empty() {
            return Err(ClientError::MissingCredential);
        }
        Ok(())
    }

    /// Returns the raw secret for URL construction.
    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AccessToken {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl From<String> for AccessToken {
    fn from(token: String) -> Self {
        Self(token)
    }
}

// The token is a secret; keep it out of Debug output.
impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(***)")
    }
}
