//! Franchisee dashboard, compliance and earnings views.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{FranchiseeStatus, ProtectionStatus};
use crate::domain::serde_utils::{null_as_default, timestamp};

/// Franchise identity shown in the dashboard header.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FranchiseeSummary {
    pub id: String,
    #[serde(default)]
    pub operating_name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: FranchiseeStatus,
}

/// Performance indicators, server-computed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Kpis {
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub acceptance_rate: f64,
    #[serde(default)]
    pub completion_rate: f64,
    #[serde(default)]
    pub avg_rating: f64,
}

/// Territory line in the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TerritorySummary {
    #[serde(default)]
    pub fsa_code: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub protection_status: ProtectionStatus,
}

/// Job counters in the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct JobStats {
    #[serde(default)]
    pub jobs_this_week: u32,
    #[serde(default)]
    pub pending_jobs: u32,
    #[serde(default)]
    pub completed_jobs: u32,
}

/// State of one required compliance document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceState {
    #[default]
    Missing,
    Pending,
    Verified,
    Expired,
    Rejected,
    #[serde(other)]
    Unknown,
}

impl ComplianceState {
    /// Returns whether the document blocks activation.
    #[must_use]
    pub const fn needs_attention(self) -> bool {
        !matches!(self, Self::Verified)
    }
}

impl std::fmt::Display for ComplianceState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Missing => "missing",
            Self::Pending => "pending",
            Self::Verified => "verified",
            Self::Expired => "expired",
            Self::Rejected => "rejected",
            Self::Unknown => "unknown",
        };
        f.write_str(label)
    }
}

/// `GET /franchisee/dashboard` payload.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Dashboard {
    pub franchisee: FranchiseeSummary,
    pub kpis: Kpis,
    #[serde(default, deserialize_with = "null_as_default")]
    pub territories: Vec<TerritorySummary>,
    #[serde(default)]
    pub stats: JobStats,
    #[serde(default, deserialize_with = "null_as_default")]
    pub compliance: BTreeMap<String, ComplianceState>,
    #[serde(default)]
    pub hrbank_configured: bool,
}

impl Dashboard {
    /// Document types that are not verified yet.
    #[must_use]
    pub fn outstanding_compliance(&self) -> Vec<&str> {
        self.compliance
            .iter()
            .filter(|(_, state)| state.needs_attention())
            .map(|(doc, _)| doc.as_str())
            .collect()
    }
}

/// Uploaded compliance document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ComplianceDocument {
    pub id: String,
    pub doc_type: String,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: ComplianceState,
    #[serde(default, with = "timestamp::option")]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default, with = "timestamp::option")]
    pub uploaded_at: Option<DateTime<Utc>>,
}

/// Document the platform requires before activation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RequiredDocument {
    #[serde(rename = "type")]
    pub doc_type: String,
    pub name: String,
    #[serde(default)]
    pub min_coverage: Option<String>,
    #[serde(default)]
    pub required_if: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub required_in: Vec<String>,
}

/// `GET /franchisee/compliance` payload.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ComplianceOverview {
    #[serde(default, deserialize_with = "null_as_default")]
    pub documents: Vec<ComplianceDocument>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub required_documents: Vec<RequiredDocument>,
}

/// Legacy earnings summary from `GET /franchisee/earnings`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Earnings {
    #[serde(default)]
    pub total_earnings: f64,
    #[serde(default)]
    pub completed_jobs: u32,
    #[serde(default)]
    pub average_job_value: f64,
}

/// HR Bank integration settings. Only the fields that are set are sent,
/// and at least one must be.
#[derive(Clone, Default, PartialEq, Eq, Serialize)]
pub struct HrBankConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hrbank_employer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hrbank_api_key: Option<String>,
}

impl HrBankConfig {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.hrbank_employer_id.is_none() && self.hrbank_api_key.is_none()
    }
}

impl std::fmt::Debug for HrBankConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HrBankConfig")
            .field("hrbank_employer_id", &self.hrbank_employer_id)
            .field("hrbank_api_key", &self.hrbank_api_key.as_ref().map(|_| "********"))
            .finish()
    }
}
