//! Franchisee portal endpoints.

use async_trait::async_trait;
use reqwest::Method;

use super::ApiClient;
use super::dto::{JobsData, SettlementsData};
use crate::domain::entities::{
    ApplicationReceipt, ApplicationStatus, ComplianceOverview, Dashboard, Earnings,
    FranchiseeApplication, HrBankConfig, Job, JobDecision, JobFilter, Settlement,
};
use crate::domain::errors::ApiError;
use crate::domain::ports::FranchiseePort;

const NO_BODY: Option<&()> = None;

#[async_trait]
impl FranchiseePort for ApiClient {
    async fn apply(&self, application: &FranchiseeApplication) -> Result<ApplicationReceipt, ApiError> {
        self.call_enveloped(Method::POST, &["franchisee", "apply"], &[], Some(application))
            .await
    }

    async fn application_status(&self, application_id: &str) -> Result<ApplicationStatus, ApiError> {
        let path = &["franchisee", "application", application_id];
        self.call_enveloped(Method::GET, path, &[], NO_BODY).await
    }

    async fn dashboard(&self) -> Result<Dashboard, ApiError> {
        self.call_enveloped(Method::GET, &["franchisee", "dashboard"], &[], NO_BODY)
            .await
    }

    async fn jobs(&self, filter: &JobFilter) -> Result<Vec<Job>, ApiError> {
        let query = [
            ("status_filter", filter.status.map(|s| s.as_str().to_string())),
            ("limit", filter.limit.map(|l| l.to_string())),
        ];
        let data: JobsData = self
            .call_enveloped(Method::GET, &["franchisee", "jobs"], &query, NO_BODY)
            .await?;
        Ok(data.jobs)
    }

    async fn accept_job(&self, job_id: &str) -> Result<JobDecision, ApiError> {
        let path = &["franchisee", "jobs", job_id, "accept"];
        self.call_enveloped(Method::POST, path, &[], NO_BODY).await
    }

    async fn decline_job(&self, job_id: &str, reason: Option<String>) -> Result<JobDecision, ApiError> {
        let path = &["franchisee", "jobs", job_id, "decline"];
        let query = [("reason", reason)];
        self.call_enveloped(Method::POST, path, &query, NO_BODY).await
    }

    async fn settlements(&self, limit: Option<u32>) -> Result<Vec<Settlement>, ApiError> {
        let query = [("limit", limit.map(|l| l.to_string()))];
        let data: SettlementsData = self
            .call_enveloped(Method::GET, &["franchisee", "settlements"], &query, NO_BODY)
            .await?;
        Ok(data.settlements)
    }

    async fn compliance(&self) -> Result<ComplianceOverview, ApiError> {
        self.call_enveloped(Method::GET, &["franchisee", "compliance"], &[], NO_BODY)
            .await
    }

    async fn earnings(&self) -> Result<Earnings, ApiError> {
        self.get(&["franchisee", "earnings"], &[]).await
    }

    async fn configure_hrbank(&self, config: &HrBankConfig) -> Result<Option<String>, ApiError> {
        let path = &["franchisee", "hrbank", "configure"];
        self.call_acknowledged(Method::PATCH, path, &[], Some(config))
            .await
    }
}
