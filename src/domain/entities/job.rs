//! Franchisee job entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::serde_utils::{null_as_default, timestamp};

/// Job dispatch status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum JobStatus {
    #[default]
    PendingAssignment,
    Assigned,
    Accepted,
    Scheduled,
    EnRoute,
    InProgress,
    Completed,
    QaSubmitted,
    QaApproved,
    Disputed,
    Cancelled,
    #[serde(other)]
    #[value(skip)]
    Unknown,
}

impl JobStatus {
    /// Returns whether the franchisee can still accept or decline.
    #[must_use]
    pub const fn awaits_decision(self) -> bool {
        matches!(self, Self::PendingAssignment | Self::Assigned)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PendingAssignment => "pending_assignment",
            Self::Assigned => "assigned",
            Self::Accepted => "accepted",
            Self::Scheduled => "scheduled",
            Self::EnRoute => "en_route",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::QaSubmitted => "qa_submitted",
            Self::QaApproved => "qa_approved",
            Self::Disputed => "disputed",
            Self::Cancelled => "cancelled",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Job as listed to franchisees and admins.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Job {
    pub id: String,
    #[serde(default)]
    pub booking_id: Option<String>,
    #[serde(default)]
    pub franchisee_id: Option<String>,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub service_name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub fsa_code: Option<String>,
    #[serde(default, with = "timestamp::option")]
    pub scheduled_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub time_window: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: JobStatus,
    #[serde(default)]
    pub gross_amount: Option<f64>,
    #[serde(default)]
    pub net_to_franchisee: Option<f64>,
    #[serde(default, with = "timestamp::option")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Outcome of accepting or declining a job.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct JobDecision {
    pub job_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: JobStatus,
    /// Only present on accept.
    #[serde(default)]
    pub work_order_sent: Option<bool>,
}

/// Filters for job listings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobFilter {
    pub status: Option<JobStatus>,
    pub fsa: Option<String>,
    pub limit: Option<u32>,
}

impl JobFilter {
    #[must_use]
    pub const fn with_status(mut self, status: JobStatus) -> Self {
        self.status = Some(status);
        self
    }

    #[must_use]
    pub fn with_fsa(mut self, fsa: impl Into<String>) -> Self {
        self.fsa = Some(fsa.into());
        self
    }

    #[must_use]
    pub const fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Admin reassignment payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobReassignment {
    pub franchisee_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_franchisee_job() {
        let json = r#"{
            "id": "j1",
            "booking_id": "b1",
            "customer_name": "Jane",
            "service_name": "Regular Clean",
            "address": "1 King St W",
            "fsa_code": "M5H",
            "scheduled_date": "2024-06-01T09:00:00",
            "time_window": "09:00 - 12:00",
            "status": "pending_assignment",
            "gross_amount": 150.0,
            "net_to_franchisee": 120.0
        }"#;

        let job: Job = serde_json::from_str(json).unwrap();

        assert!(job.status.awaits_decision());
        assert_eq!(job.time_window.as_deref(), Some("09:00 - 12:00"));
        assert!(job.franchisee_id.is_none());
    }

    #[test]
    fn test_parse_admin_job_with_nulls() {
        let json = r#"{"id":"j2","franchisee_id":null,"status":null,"gross_amount":null,
            "created_at":"2024-06-01T09:00:00Z"}"#;
        let job: Job = serde_json::from_str(json).unwrap();

        assert_eq!(job.status, JobStatus::PendingAssignment);
        assert!(job.gross_amount.is_none());
        assert!(job.created_at.is_some());
    }

    #[test]
    fn test_parse_accept_decision() {
        let json = r#"{"job_id":"j1","status":"accepted","work_order_sent":false,
            "work_order_details":{"success":false}}"#;
        let decision: JobDecision = serde_json::from_str(json).unwrap();

        assert_eq!(decision.status, JobStatus::Accepted);
        assert_eq!(decision.work_order_sent, Some(false));
    }

    #[test]
    fn test_accepted_job_awaits_nothing() {
        assert!(!JobStatus::Accepted.awaits_decision());
        assert!(!JobStatus::QaApproved.awaits_decision());
    }

    #[test]
    fn test_filter_builder() {
        let filter = JobFilter::default()
            .with_status(JobStatus::EnRoute)
            .with_fsa("M5V")
            .with_limit(10);

        assert_eq!(filter.status, Some(JobStatus::EnRoute));
        assert_eq!(filter.fsa.as_deref(), Some("M5V"));
        assert_eq!(filter.limit, Some(10));
    }
}
