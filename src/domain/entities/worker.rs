//! Franchise workers: invitations, team roster and training progress.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

use crate::domain::serde_utils::{null_as_default, timestamp};

/// Worker account status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum WorkerStatus {
    #[default]
    #[value(skip)]
    PendingTraining,
    Active,
    Inactive,
    Suspended,
    #[serde(other)]
    #[value(skip)]
    Unknown,
}

impl WorkerStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PendingTraining => "pending-training",
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Suspended => "suspended",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for WorkerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `POST /workers/invite` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkerInvite {
    pub email: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Confirmation of a sent invitation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InviteReceipt {
    pub invite_id: String,
    pub email: String,
    pub invite_code: String,
    #[serde(default, with = "timestamp::option")]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Invitation still waiting to be accepted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingInvite {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default, with = "timestamp::option")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "timestamp::option")]
    pub expires_at: Option<DateTime<Utc>>,
}

/// Required-course completion of one worker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingStatus {
    #[serde(default)]
    pub total_required: u32,
    #[serde(default)]
    pub completed: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub completed_courses: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub missing_courses: Vec<String>,
    #[serde(default)]
    pub is_fully_trained: bool,
    #[serde(default)]
    pub percent_complete: u32,
}

/// Worker as seen on the franchisee's team roster.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    #[serde(alias = "_id")]
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: WorkerStatus,
    #[serde(default)]
    pub hrbank_worker_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub training_status: TrainingStatus,
    #[serde(default)]
    pub is_eligible_for_jobs: bool,
    #[serde(default, with = "timestamp::option")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Signed-in worker's own profile.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerProfile {
    #[serde(alias = "_id")]
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: WorkerStatus,
    #[serde(default)]
    pub franchisee_id: Option<String>,
    #[serde(default)]
    pub franchisee_name: Option<String>,
    #[serde(default)]
    pub hrbank_worker_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub training_status: TrainingStatus,
    #[serde(default)]
    pub is_eligible_for_jobs: bool,
}

/// `PATCH /workers/{id}/status` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkerStatusUpdate {
    pub status: WorkerStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// `POST /workers/{id}/link-hrbank` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HrBankLink {
    pub hrbank_worker_id: String,
}

/// `POST /workers/accept-invite` body. Accepting creates the worker
/// account and signs it in.
#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AcceptInvite {
    pub invite_code: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl Drop for AcceptInvite {
    fn drop(&mut self) {
        self.password.zeroize();
    }
}

impl fmt::Debug for AcceptInvite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AcceptInvite")
            .field("invite_code", &self.invite_code)
            .field("password", &"********")
            .field("phone", &self.phone)
            .finish()
    }
}

/// Progress state of a single course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CourseState {
    #[default]
    NotStarted,
    InProgress,
    Completed,
    #[serde(other)]
    Unknown,
}

impl fmt::Display for CourseState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NotStarted => "not started",
            Self::InProgress => "in progress",
            Self::Completed => "completed",
            Self::Unknown => "unknown",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseProgress {
    pub course_id: String,
    pub course_name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub total_content: u32,
    #[serde(default)]
    pub completed_content: u32,
    /// Percentage of course content finished.
    #[serde(default)]
    pub content_progress: u32,
    #[serde(default)]
    pub quiz_passed: bool,
    #[serde(default, with = "timestamp::option")]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: CourseState,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingSummary {
    #[serde(default)]
    pub total_courses: u32,
    #[serde(default)]
    pub completed_courses: u32,
    #[serde(default)]
    pub percent_complete: u32,
    #[serde(default)]
    pub is_fully_trained: bool,
    #[serde(default)]
    pub can_start_working: bool,
}

/// `GET /workers/me/training` payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TrainingOverview {
    #[serde(default, deserialize_with = "null_as_default")]
    pub courses: Vec<CourseProgress>,
    #[serde(default)]
    pub summary: TrainingSummary,
}

/// Result of asking to be marked as trained.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TrainingCompletion {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: WorkerStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_team_member() {
        let member: TeamMember = serde_json::from_str(
            r#"{"id": "w1", "email": "sam@example.com", "name": "Sam", "phone": null,
                "status": "pending-training", "profilePhoto": null, "hrbankWorkerId": null,
                "trainingStatus": {"totalRequired": 3, "completed": 1,
                                   "completedCourses": ["Safety"],
                                   "missingCourses": ["Chemicals", "Service"],
                                   "isFullyTrained": false, "percentComplete": 33},
                "isEligibleForJobs": false, "createdAt": "2024-05-01T12:00:00"}"#,
        )
        .unwrap();

        assert_eq!(member.status, WorkerStatus::PendingTraining);
        assert_eq!(member.training_status.missing_courses.len(), 2);
        assert!(member.created_at.is_some());
    }

    #[test]
    fn test_missing_status_reads_as_pending_training() {
        let profile: WorkerProfile = serde_json::from_str(
            r#"{"id": "w1", "email": "sam@example.com", "name": "Sam", "status": null,
                "trainingStatus": null}"#,
        )
        .unwrap();

        assert_eq!(profile.status, WorkerStatus::PendingTraining);
        assert!(!profile.training_status.is_fully_trained);
    }

    #[test]
    fn test_pending_invite_uses_document_id() {
        let invite: PendingInvite = serde_json::from_str(
            r#"{"_id": "i1", "email": "sam@example.com", "name": "Sam",
                "franchiseeId": "f1", "inviteCode": "abc", "status": "pending",
                "expiresAt": "2024-05-08T12:00:00"}"#,
        )
        .unwrap();

        assert_eq!(invite.id, "i1");
    }

    #[test]
    fn test_training_overview() {
        let overview: TrainingOverview = serde_json::from_str(
            r#"{"courses": [{"courseId": "c1", "courseName": "Safety", "description": "",
                             "category": "safety", "icon": "shield", "totalContent": 4,
                             "completedContent": 2, "contentProgress": 50,
                             "quizPassed": false, "isCompleted": false, "expiresAt": null,
                             "status": "in-progress"}],
                "summary": {"totalCourses": 1, "completedCourses": 0, "percentComplete": 0,
                            "isFullyTrained": false, "canStartWorking": false}}"#,
        )
        .unwrap();

        assert_eq!(overview.courses[0].status, CourseState::InProgress);
        assert_eq!(overview.courses[0].content_progress, 50);
    }

    #[test]
    fn test_status_update_wire_names() {
        let update = WorkerStatusUpdate {
            status: WorkerStatus::Suspended,
            reason: None,
        };
        assert_eq!(
            serde_json::to_string(&update).unwrap(),
            r#"{"status":"suspended"}"#
        );

        let link = HrBankLink {
            hrbank_worker_id: "hr-9".into(),
        };
        assert_eq!(
            serde_json::to_string(&link).unwrap(),
            r#"{"hrbankWorkerId":"hr-9"}"#
        );
    }

    #[test]
    fn test_accept_invite_hides_password() {
        let accept = AcceptInvite {
            invite_code: "abc".into(),
            password: "hunter22".into(),
            phone: None,
        };

        assert!(!format!("{accept:?}").contains("hunter22"));
        assert_eq!(
            serde_json::to_value(&accept).unwrap()["inviteCode"],
            "abc"
        );
    }
}
