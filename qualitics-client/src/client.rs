//! Qualitics API client and domain operations.
//!
//! Every operation follows the same flow: validate the credential, build
//! the endpoint URL, append the access token, send the request, and decode
//! the body once into either the service's error envelope or the
//! operation's payload. A `"Not Found"` envelope is a defined empty
//! outcome, not an error.

use std::sync::Arc;

use reqwest::Method;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use qualitics_core::{
    AddRepositoryRequest, Provider, ReportDetails, RepositorySummary, ServiceError,
};

use crate::auth::AccessToken;
use crate::error::ClientError;
use crate::transport::{HttpTransport, RawResponse, Transport, authenticated_url};

/// Default base endpoint of the hosted service.
///
/// URLs are built by plain concatenation (`<endpoint><provider-tag>...`),
/// so the endpoint keeps its trailing slash.
pub const DEFAULT_ENDPOINT: &str = "https://qualitics.dev/api/";

/// Client for the Qualitics code-quality analysis API.
///
/// Holds the configured endpoint, the access token, and the transport.
/// Operations are independent single round trips; the client is immutable
/// after construction and safe to share across tasks.
///
/// # Example
///
/// ```ignore
/// use qualitics_client::{Client, Provider};
///
/// let client = Client::new("my-access-token")?;
/// client
///     .add_repository(Provider::GitHub, "acme", "widget", "", "")
///     .await?;
/// ```
pub struct Client {
    endpoint: String,
    token: AccessToken,
    transport: Arc<dyn Transport>,
}

impl Client {
    /// Creates a client against [`DEFAULT_ENDPOINT`].
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] if the HTTP transport cannot be
    /// created.
    pub fn new(token: impl Into<AccessToken>) -> Result<Self, ClientError> {
        Self::with_endpoint(DEFAULT_ENDPOINT, token)
    }

    /// Creates a client against a custom endpoint.
    ///
    /// The endpoint is used verbatim as the URL prefix and should keep its
    /// trailing separator.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] if the HTTP transport cannot be
    /// created.
    pub fn with_endpoint(
        endpoint: impl Into<String>,
        token: impl Into<AccessToken>,
    ) -> Result<Self, ClientError> {
        Ok(Self::with_transport(
            endpoint,
            token,
            Arc::new(HttpTransport::new()?),
        ))
    }

    /// Creates a client with an injected transport.
    ///
    /// Used by tests to substitute a recording stub for the network.
    pub fn with_transport(
        endpoint: impl Into<String>,
        token: impl Into<AccessToken>,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            token: token.into(),
            transport,
        }
    }

    /// Returns the configured endpoint.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetches metadata for a repository.
    ///
    /// Returns `Ok(None)` when the service reports the repository does not
    /// exist.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::MissingCredential`] before any network
    /// activity if no token is set, [`ClientError::Transport`] on network
    /// failure or timeout, [`ClientError::Decode`] on a malformed body,
    /// and [`ClientError::Service`] when the service answers with an error
    /// envelope other than `"Not Found"`.
    pub async fn get_repository(
        &self,
        provider: Provider,
        owner: &str,
        name: &str,
    ) -> Result<Option<RepositorySummary>, ClientError> {
        self.token.validate()?;
        debug!(provider = %provider, owner, name, "fetching repository");

        let url = format!(
            "{}{}/repositories/{}/{}",
            self.endpoint,
            provider.tag(),
            owner,
            name
        );
        let response = self.send_authenticated(Method::GET, &url, None).await?;

        decode_payload(&response.body)
    }

    /// Registers a repository for monitoring.
    ///
    /// The serialized registration request is always sent as the POST
    /// body.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`Client::get_repository`]; a success payload of
    /// any shape maps to `Ok(())`.
    pub async fn add_repository(
        &self,
        provider: Provider,
        owner: &str,
        name: &str,
        config: &str,
        global_config: &str,
    ) -> Result<(), ClientError> {
        self.token.validate()?;
        debug!(provider = %provider, owner, name, "registering repository");

        let request = AddRepositoryRequest::new(name, owner, config, global_config);
        let body = serde_json::to_string(&request)?;

        let url = format!("{}{}", self.endpoint, provider.tag());
        let response = self
            .send_authenticated(Method::POST, &url, Some(body))
            .await?;

        decode_payload::<serde_json::Value>(&response.body).map(|_| ())
    }

    /// Fetches the latest quality report details for a repository.
    ///
    /// Returns `Ok(None)` when the service reports the repository does not
    /// exist.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`Client::get_repository`].
    pub async fn get_report_details(
        &self,
        provider: Provider,
        owner: &str,
        name: &str,
    ) -> Result<Option<ReportDetails>, ClientError> {
        self.token.validate()?;
        debug!(provider = %provider, owner, name, "fetching report details");

        let url = format!(
            "{}{}/repositories/{}/{}",
            self.endpoint,
            provider.tag(),
            owner,
            name
        );
        let response = self.send_authenticated(Method::GET, &url, None).await?;

        decode_payload(&response.body)
    }

    /// Appends the access token to the URL and delegates to the transport.
    async fn send_authenticated(
        &self,
        method: Method,
        url: &str,
        body: Option<String>,
    ) -> Result<RawResponse, ClientError> {
        let url = authenticated_url(url, self.token.as_str());
        self.transport.send(method, &url, body).await
    }
}

/// One decode, two shapes: the error envelope or the operation's payload.
#[derive(Deserialize)]
#[serde(untagged)]
enum Payload<T> {
    Error(ServiceError),
    Success(T),
}

/// Decodes a response body into the operation's success shape.
///
/// A body carrying a complete error envelope is branched on first: the
/// `"Not Found"` message maps to `Ok(None)`, everything else to
/// [`ClientError::Service`]. An envelope with an empty field is not a
/// service failure and is re-read as the success shape.
fn decode_payload<T: DeserializeOwned>(body: &str) -> Result<Option<T>, ClientError> {
    match serde_json::from_str::<Payload<T>>(body)? {
        Payload::Error(envelope)
            if envelope.message.is_empty() || envelope.description.is_empty() =>
        {
            Ok(Some(serde_json::from_str(body)?))
        }
        Payload::Error(envelope) if envelope.is_not_found() => Ok(None),
        Payload::Error(envelope) => Err(ClientError::Service(envelope)),
        Payload::Success(value) => Ok(Some(value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_envelope_decodes_to_none() {
        let body = r#"{"message":"Not Found","description":"repository does not exist"}"#;

        let result = decode_payload::<RepositorySummary>(body).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_error_envelope_becomes_service_error() {
        let body = r#"{"message":"Forbidden","description":"no access"}"#;

        let err = decode_payload::<RepositorySummary>(body).unwrap_err();
        assert_eq!(err.to_string(), "Forbidden, no access");
        assert!(matches!(err, ClientError::Service(_)));
    }

    #[test]
    fn test_success_shape_decodes() {
        let body = r#"{
            "type": "git",
            "created_at": "2024-03-01T10:00:00+00:00",
            "private": true,
            "default_branch": "main",
            "your-login": "acme-bot",
            "name": "widget"
        }"#;

        let repo = decode_payload::<RepositorySummary>(body).unwrap().unwrap();
        assert_eq!(repo.name, "widget");
        assert_eq!(repo.login, "acme-bot");
    }

    #[test]
    fn test_blank_envelope_fields_fall_through_to_success_shape() {
        // Envelope keys with empty values do not count as a service
        // failure; the body is read as the operation's shape instead.
        let body = r#"{"message":"","description":""}"#;

        let err = decode_payload::<RepositorySummary>(body).unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));

        let value = decode_payload::<serde_json::Value>(body).unwrap();
        assert!(value.is_some());
    }

    #[test]
    fn test_malformed_body_is_a_decode_error() {
        let err = decode_payload::<RepositorySummary>("<html>down</html>").unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
    }
}
