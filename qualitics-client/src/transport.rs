//! Authenticated HTTP transport.
//!
//! The transport executes exactly one HTTP round trip per call: no
//! retries, no redirect policy beyond reqwest defaults, connection reuse
//! is whatever the underlying pool provides. Interpreting the response -
//! status code, error envelope, payload - is the domain operation's job.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, StatusCode, header};
use tracing::debug;

use crate::error::ClientError;

/// Fixed client-side timeout for a whole round trip, in seconds.
pub const REQUEST_TIMEOUT_SECS: u64 = 5;

/// A raw service response: status code and full body text.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Full response body.
    pub body: String,
}

/// Executes one HTTP request against the service.
///
/// This is the seam between domain operations and the network; tests
/// substitute a recording stub.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends a single request and collects the response.
    ///
    /// `None` sends no request body; `Some` sends the literal bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] on network failure or timeout.
    async fn send(
        &self,
        method: Method,
        url: &str,
        body: Option<String>,
    ) -> Result<RawResponse, ClientError>;
}

/// reqwest-backed transport with a fixed request timeout.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    inner: Client,
}

impl HttpTransport {
    /// Creates a transport with the fixed
    /// [`REQUEST_TIMEOUT_SECS`]-second timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] if the HTTP client cannot be
    /// built.
    pub fn new() -> Result<Self, ClientError> {
        Self::with_timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
    }

    /// Creates a transport with a custom timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] if the HTTP client cannot be
    /// built.
    pub fn with_timeout(timeout: Duration) -> Result<Self, ClientError> {
        let inner = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("qualitics/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { inner })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(
        &self,
        method: Method,
        url: &str,
        body: Option<String>,
    ) -> Result<RawResponse, ClientError> {
        debug!(%method, url, has_body = body.is_some(), "sending request");

        let mut request = self.inner.request(method, url);
        if let Some(body) = body {
            request = request
                .header(header::CONTENT_TYPE, "application/json")
                .body(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        debug!(%status, bytes = body.len(), "response received");

        Ok(RawResponse { status, body })
    }
}

/// Appends the access-token query parameter to a request URL.
///
/// Uses `&` when the URL already carries a query string, `?` otherwise.
pub(crate) fn authenticated_url(url: &str, token: &str) -> String {
    if url.contains('?') {
        format!("{url}&access_token={token}")
    } else {
        format!("{url}?access_token={token}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_appended_with_question_mark() {
        assert_eq!(
            authenticated_url("https://api.test/g", "tok"),
            "https://api.test/g?access_token=tok"
        );
    }

    #[test]
    fn test_token_appended_with_ampersand_when_query_present() {
        assert_eq!(
            authenticated_url("https://api.test/g?page=2", "tok"),
            "https://api.test/g?page=2&access_token=tok"
        );
    }

    #[test]
    fn test_exactly_one_separator_is_added() {
        for url in ["https://api.test/g", "https://api.test/g?x=1&y=2"] {
            let authed = authenticated_url(url, "tok");
            let appended = &authed[url.len()..];
            assert!(appended == "?access_token=tok" || appended == "&access_token=tok");
        }
    }
}
