//! Franchisee application entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::serde_utils::{null_as_default, timestamp};

/// Legal form of the applying business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegalType {
    Individual,
    Corporation,
}

impl LegalType {
    /// Parses user input, case-insensitively.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "individual" | "sole proprietor" | "sole_proprietor" => Some(Self::Individual),
            "corporation" | "corp" | "inc" => Some(Self::Corporation),
            _ => None,
        }
    }
}

impl std::fmt::Display for LegalType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Individual => write!(f, "individual"),
            Self::Corporation => write!(f, "corporation"),
        }
    }
}

/// Franchisee account status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum FranchiseeStatus {
    Draft,
    #[default]
    Submitted,
    UnderReview,
    Approved,
    Activated,
    Suspended,
    Terminated,
    Rejected,
    #[serde(other)]
    #[value(skip)]
    Unknown,
}

impl FranchiseeStatus {
    /// Returns whether an admin decision is still outstanding.
    #[must_use]
    pub const fn is_awaiting_review(self) -> bool {
        matches!(self, Self::Submitted | Self::UnderReview)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Submitted => "submitted",
            Self::UnderReview => "under_review",
            Self::Approved => "approved",
            Self::Activated => "activated",
            Self::Suspended => "suspended",
            Self::Terminated => "terminated",
            Self::Rejected => "rejected",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for FranchiseeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Submission payload for `POST /franchisee/apply`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FranchiseeApplication {
    pub legal_name: String,
    pub legal_type: LegalType,
    pub operating_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_number: Option<String>,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub province: String,
    pub postal_code: String,
    #[serde(rename = "preferredFSAs")]
    pub preferred_fsas: Vec<String>,
    pub vehicle_access: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
    #[serde(rename = "agreesToHRBank")]
    pub agrees_to_hr_bank: bool,
    pub agrees_to_insurance_minimums: bool,
}

/// Acknowledgement of a submitted application.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApplicationReceipt {
    pub application_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: FranchiseeStatus,
}

/// Public status view of an application.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApplicationStatus {
    pub application_id: String,
    #[serde(default)]
    pub operating_name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: FranchiseeStatus,
    #[serde(default, with = "timestamp::option")]
    pub submitted_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub assigned_fsas: Vec<String>,
}

/// Application as listed for admin review.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApplicationSummary {
    pub id: String,
    #[serde(default)]
    pub operating_name: Option<String>,
    #[serde(default)]
    pub legal_name: Option<String>,
    #[serde(default)]
    pub contact_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub province: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub preferred_fsas: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub vehicle_access: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: FranchiseeStatus,
    #[serde(default, with = "timestamp::option")]
    pub submitted_at: Option<DateTime<Utc>>,
}

/// Admin approval payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ApprovalDecision {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub assigned_fsas: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_job_fee_tier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_by: Option<String>,
}

/// Admin rejection payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectionDecision {
    pub reason: String,
}
