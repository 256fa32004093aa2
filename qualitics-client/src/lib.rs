// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Qualitics Client
//!
//! Client library for the Qualitics code-quality analysis API.
//!
//! The client authenticates with an access token, fetches repository
//! metadata and quality reports, and registers repositories for
//! monitoring. Every operation is one authenticated round trip: validate
//! the credential, build the endpoint URL, send the request, decode the
//! body into either the service's error envelope or the operation's
//! payload. Nothing is cached, retried, or logged away - errors return to
//! the caller immediately.
//!
//! ## Key Types
//!
//! - [`Client`] - The three domain operations over a shared transport
//! - [`AccessToken`] - Credential holder, validated before any request
//! - [`Transport`] / [`HttpTransport`] - The single-request network seam
//! - [`ClientError`] - Credential, transport, decode, and service failures
//!
//! ## Example
//!
//! ```ignore
//! use qualitics_client::{Client, Provider};
//!
//! let client = Client::new("my-access-token")?;
//!
//! if let Some(repo) = client
//!     .get_repository(Provider::GitHub, "acme", "widget")
//!     .await?
//! {
//!     println!("default branch: {}", repo.default_branch);
//! }
//! ```

pub mod auth;
pub mod client;
pub mod error;
pub mod transport;

pub use auth::AccessToken;
pub use client::{Client, DEFAULT_ENDPOINT};
pub use error::ClientError;
pub use transport::{HttpTransport, REQUEST_TIMEOUT_SECS, RawResponse, Transport};

// Re-export the wire models so callers need a single dependency.
pub use qualitics_core::{
    AddRepositoryRequest, Provider, ReportDetails, RepositorySummary, ServiceError,
};
