//! Admin console port.

use async_trait::async_trait;

use crate::domain::entities::{
    ApplicationSummary, ApprovalDecision, FranchiseeStatus, FsaAssignment, Job, JobFilter,
    JobReassignment, PayoutStatus, RejectionDecision, Settlement, StatsReport, Territory,
    TerritoryAssignment, User,
};
use crate::domain::errors::ApiError;

/// Port for the admin endpoints.
///
/// Mutations answer with the server's confirmation message, when it sent one.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AdminPort: Send + Sync {
    async fn applications(
        &self,
        status: Option<FranchiseeStatus>,
    ) -> Result<Vec<ApplicationSummary>, ApiError>;

    async fn approve_application(
        &self,
        application_id: &str,
        decision: &ApprovalDecision,
    ) -> Result<Option<String>, ApiError>;

    async fn reject_application(
        &self,
        application_id: &str,
        decision: &RejectionDecision,
    ) -> Result<Option<String>, ApiError>;

    /// Franchisee accounts from the older user listing.
    async fn franchisee_accounts(&self) -> Result<Vec<User>, ApiError>;

    async fn activate_franchisee(&self, franchisee_id: &str) -> Result<Option<String>, ApiError>;

    async fn territories(&self) -> Result<Vec<Territory>, ApiError>;

    async fn assign_territory(
        &self,
        fsa: &str,
        assignment: &TerritoryAssignment,
    ) -> Result<Option<String>, ApiError>;

    /// Older bulk assignment endpoint.
    async fn assign_fsas(&self, assignment: &FsaAssignment) -> Result<Option<String>, ApiError>;

    async fn jobs(&self, filter: &JobFilter) -> Result<Vec<Job>, ApiError>;

    async fn reassign_job(
        &self,
        job_id: &str,
        reassignment: &JobReassignment,
    ) -> Result<Option<String>, ApiError>;

    async fn settlements(&self, status: Option<PayoutStatus>) -> Result<Vec<Settlement>, ApiError>;

    async fn approve_settlement(&self, settlement_id: &str) -> Result<Option<String>, ApiError>;

    async fn stats(&self) -> Result<StatsReport, ApiError>;
}
