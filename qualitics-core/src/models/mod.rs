//! Wire payload models for the Qualitics API.
//!
//! ## Submodules
//!
//! - [`provider`] - Source-hosting provider enumeration
//! - [`repository`] - Repository summary and registration payloads
//! - [`report`] - Quality report payloads
//! - [`envelope`] - Service error envelope

mod envelope;
mod provider;
mod report;
mod repository;

// Re-export everything at the models level
pub use envelope::{NOT_FOUND_MESSAGE, ServiceError};
pub use provider::Provider;
pub use report::{
    BranchSettings, CommitAuthor, CommitSummary, Contributor, DevelopmentReportSettings,
    EmbeddedRepository, EmbeddedRepositoryLinks, Link, QualityDistribution, QualityWeights,
    ReportDetails, ReportEmbedded, ReportLinks,
};
pub use repository::{AddRepositoryRequest, RepositorySummary};
