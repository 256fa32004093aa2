//! Quality report payload types.
//!
//! This module contains the report-level payloads:
//! - [`ReportDetails`] - A full quality report for a repository
//! - [`QualityDistribution`] / [`QualityWeights`] - Rating-bucket breakdown
//! - [`CommitSummary`] / [`Contributor`] - Commit activity in the range
//! - [`ReportLinks`] / [`ReportEmbedded`] - Hyperlinks and embedded resources

use serde::{Deserialize, Serialize};

// ============================================================================
// Report
// ============================================================================

/// A point-in-time quality report for a repository.
///
/// Every field is server-authoritative; the client only deserializes.
/// Date and timestamp fields stay in the service's own string format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportDetails {
    /// Report date.
    pub date: String,
    /// When the report was produced.
    pub created_at: String,
    /// Start of the covered range.
    pub start_date: String,
    /// End of the covered range.
    pub end_date: String,
    /// Branch the report was computed for.
    pub branch_reference: String,
    /// Source reference at the start of the range.
    pub base_source_reference: String,
    /// Source reference at the end of the range.
    pub head_source_reference: String,
    /// Overall quality score.
    pub quality_score: f64,
    /// Score delta against the previous report.
    pub quality_score_change: f64,
    /// Rating-bucket breakdown of the analyzed code.
    pub quality_distribution: QualityDistribution,
    /// Open alerts.
    pub nb_alerts: i64,
    /// Alert delta against the previous report.
    pub nb_alerts_change: i64,
    /// Open issues.
    pub nb_issues: i64,
    /// Issue delta against the previous report.
    pub nb_issues_change: i64,
    /// Test-coverage delta against the previous report.
    pub test_coverage_change: i64,
    /// Commits in the covered range.
    pub nb_commits: i64,
    /// Added lines in the covered range.
    pub nb_additions: i64,
    /// Deleted lines in the covered range.
    pub nb_deletions: i64,
    /// Largest commits in the covered range.
    pub largest_commits: Vec<CommitSummary>,
    /// Most active contributors in the covered range.
    pub top_contributors: Vec<Contributor>,
    /// Whether the scoring algorithm changed since the previous report.
    pub algorithm_changed: bool,
    /// Hyperlink references for the report.
    #[serde(rename = "_links")]
    pub links: ReportLinks,
    /// Embedded related resources.
    #[serde(rename = "_embedded")]
    pub embedded: ReportEmbedded,
}

/// Rating-bucket breakdown of the analyzed code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityDistribution {
    /// Weight of each rating bucket.
    pub weights: QualityWeights,
}

/// Weight of each rating bucket, as a fraction of the analyzed code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityWeights {
    /// Very good rated code.
    pub very_good: f64,
    /// Good rated code.
    pub good: f64,
    /// Satisfactory rated code.
    pub satisfactory: f64,
    /// Pass rated code.
    pub pass: f64,
    /// Critical rated code.
    pub critical: f64,
}

// ============================================================================
// Commit activity
// ============================================================================

/// One of the largest commits in the covered range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitSummary {
    /// Commit author.
    pub author: CommitAuthor,
    /// Commit title.
    pub title: String,
    /// Commit reference.
    #[serde(rename = "ref")]
    pub reference: String,
}

/// Author identity on a commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitAuthor {
    /// Author name.
    pub name: String,
    /// Author email.
    pub email: String,
}

/// A contributor's activity within the covered range.
///
/// The count keys are camelCase on the wire, unlike the rest of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contributor {
    /// Contributor name.
    pub name: String,
    /// Contributor email.
    pub email: String,
    /// Commits authored in the range.
    #[serde(rename = "nbCommits")]
    pub nb_commits: i64,
    /// Lines added in the range.
    #[serde(rename = "nbAdditions")]
    pub nb_additions: i64,
    /// Lines deleted in the range.
    #[serde(rename = "nbDeletions")]
    pub nb_deletions: i64,
}

// ============================================================================
// Links & embedded resources
// ============================================================================

/// A single hyperlink reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Target URL.
    pub href: String,
}

/// Hyperlink references attached to a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportLinks {
    /// The report itself.
    #[serde(rename = "self")]
    pub self_link: Link,
    /// The repository the report belongs to.
    pub repository: Link,
}

/// Resources embedded alongside a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportEmbedded {
    /// The repository the report was produced for.
    pub repository: EmbeddedRepository,
}

/// Repository projection embedded in a report.
///
/// Richer than [`RepositorySummary`](crate::RepositorySummary): it also
/// carries the development-report schedule and the tracked-branch list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddedRepository {
    /// Repository kind as reported by the service.
    #[serde(rename = "type")]
    pub kind: String,
    /// When the repository was registered, in the service's own format.
    pub created_at: String,
    /// Whether the repository is private.
    pub private: bool,
    /// Default branch name.
    pub default_branch: String,
    /// Periodic development-report schedule.
    pub development_report_settings: DevelopmentReportSettings,
    /// Branch tracking settings.
    pub branch_settings: BranchSettings,
    /// Owner login.
    pub login: String,
    /// Repository name.
    pub name: String,
    /// Hyperlink references for the repository.
    #[serde(rename = "_links")]
    pub links: EmbeddedRepositoryLinks,
}

/// Scheduling settings for periodic development reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevelopmentReportSettings {
    /// Whether periodic reports are enabled.
    pub enabled: bool,
    /// Weekday the report runs on.
    pub weekday: u32,
    /// Hour of day the report runs at.
    pub hour: u32,
    /// Timezone the schedule is evaluated in.
    pub timezone: String,
}

/// Branch tracking settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchSettings {
    /// Branches the service analyzes.
    pub tracked_branches: Vec<String>,
}

/// Hyperlink references attached to the embedded repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbeddedRepositoryLinks {
    /// The repository itself.
    #[serde(rename = "self")]
    pub self_link: Link,
}
