// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Qualitics Core
//!
//! Wire payload models for the Qualitics code-quality analysis API.
//!
//! This crate defines the typed shapes exchanged with the remote service.
//! `qualitics-client` uses them to encode requests and decode responses;
//! none of the types here perform any I/O themselves.
//!
//! ## Key Types
//!
//! ### Providers
//! - [`Provider`] - Closed set of source-hosting providers
//!
//! ### Repository Payloads
//! - [`RepositorySummary`] - Service-reported repository metadata
//! - [`AddRepositoryRequest`] - Outbound body for repository registration
//!
//! ### Report Payloads
//! - [`ReportDetails`] - Quality report with score, rating distribution,
//!   commit activity, and an embedded repository projection
//!
//! ### Failure Envelope
//! - [`ServiceError`] - `{message, description}` error payload
//!
//! All types map to the service's exact JSON key names; keys that are not
//! valid Rust identifiers or that differ from our naming (`type`,
//! `your-login`, `ref`, `self`, `_links`, `_embedded`, `nbCommits`) are
//! pinned with serde rename attributes and must not change.

pub mod models;

pub use models::{
    AddRepositoryRequest, BranchSettings, CommitAuthor, CommitSummary, Contributor,
    DevelopmentReportSettings, EmbeddedRepository, EmbeddedRepositoryLinks, Link, NOT_FOUND_MESSAGE,
    Provider, QualityDistribution, QualityWeights, ReportDetails, ReportEmbedded, ReportLinks,
    RepositorySummary, ServiceError,
};
