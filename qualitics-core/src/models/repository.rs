//! Repository payload types.
//!
//! This module contains the repository-level payloads:
//! - [`RepositorySummary`] - Service-reported repository metadata
//! - [`AddRepositoryRequest`] - Outbound body for repository registration

use serde::{Deserialize, Serialize};

/// Repository metadata as reported by the service.
///
/// A read-only projection of server state, created fresh on each fetch and
/// never cached by the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositorySummary {
    /// Repository kind as reported by the service.
    #[serde(rename = "type")]
    pub kind: String,
    /// When the repository was registered, in the service's own format.
    pub created_at: String,
    /// Whether the repository is private.
    pub private: bool,
    /// Default branch name.
    pub default_branch: String,
    /// Login of the authenticated owner.
    #[serde(rename = "your-login")]
    pub login: String,
    /// Repository name.
    pub name: String,
}

/// Request body for registering a repository with the service.
///
/// Built per call from caller arguments and discarded once the request has
/// been sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddRepositoryRequest {
    /// Repository name.
    pub name: String,
    /// Owning organization or user.
    pub organization: String,
    /// Repository-level configuration blob.
    pub config: String,
    /// Account-level configuration blob.
    pub global_config: String,
}

impl AddRepositoryRequest {
    /// Creates a registration request for `organization/name`.
    pub fn new(
        name: impl Into<String>,
        organization: impl Into<String>,
        config: impl Into<String>,
        global_config: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            organization: organization.into(),
            config: config.into(),
            global_config: global_config.into(),
        }
    }
}
