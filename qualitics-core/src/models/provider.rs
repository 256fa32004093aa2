//! Provider types.
//!
//! This module contains the closed set of source-hosting platforms the
//! service can analyze:
//! - [`Provider`] - Enum of supported hosting providers

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported source-hosting providers.
///
/// The set is closed: the service only monitors repositories hosted on one
/// of these platforms, and each variant maps to a fixed single-character
/// path segment in API URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    /// GitHub-hosted repository.
    GitHub,
    /// Bitbucket-hosted repository.
    Bitbucket,
}

impl Provider {
    /// Returns the URL path segment for this provider.
    ///
    /// These segments are part of the remote API contract and must not be
    /// renamed: `"g"` for GitHub, `"b"` for Bitbucket.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::GitHub => "g",
            Self::Bitbucket => "b",
        }
    }

    /// Returns the display name for this provider.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::GitHub => "GitHub",
            Self::Bitbucket => "Bitbucket",
        }
    }

    /// Returns all supported providers.
    pub fn all() -> &'static [Provider] {
        &[Self::GitHub, Self::Bitbucket]
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_tags() {
        assert_eq!(Provider::GitHub.tag(), "g");
        assert_eq!(Provider::Bitbucket.tag(), "b");
    }

    #[test]
    fn test_provider_display_name() {
        assert_eq!(Provider::GitHub.display_name(), "GitHub");
        assert_eq!(Provider::Bitbucket.to_string(), "Bitbucket");
    }

    #[test]
    fn test_all_covers_every_variant() {
        assert_eq!(Provider::all().len(), 2);
    }
}
