//! Franchisee portal port.

use async_trait::async_trait;

use crate::domain::entities::{
    ApplicationReceipt, ApplicationStatus, ComplianceOverview, Dashboard, Earnings,
    FranchiseeApplication, HrBankConfig, Job, JobDecision, JobFilter, Settlement,
};
use crate::domain::errors::ApiError;

/// Port for the franchisee endpoints.
///
/// Applying and checking an application are public; everything else
/// acts on the franchise of the signed-in user.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FranchiseePort: Send + Sync {
    async fn apply(&self, application: &FranchiseeApplication) -> Result<ApplicationReceipt, ApiError>;

    async fn application_status(&self, application_id: &str) -> Result<ApplicationStatus, ApiError>;

    async fn dashboard(&self) -> Result<Dashboard, ApiError>;

    async fn jobs(&self, filter: &JobFilter) -> Result<Vec<Job>, ApiError>;

    async fn accept_job(&self, job_id: &str) -> Result<JobDecision, ApiError>;

    async fn decline_job(&self, job_id: &str, reason: Option<String>) -> Result<JobDecision, ApiError>;

    async fn settlements(&self, limit: Option<u32>) -> Result<Vec<Settlement>, ApiError>;

    async fn compliance(&self) -> Result<ComplianceOverview, ApiError>;

    /// Older aggregate earnings summary.
    async fn earnings(&self) -> Result<Earnings, ApiError>;

    async fn configure_hrbank(&self, config: &HrBankConfig) -> Result<Option<String>, ApiError>;
}
