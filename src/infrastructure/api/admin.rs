//! Admin console endpoints.

use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;
use tracing::debug;

use super::ApiClient;
use super::client::unwrap_envelope;
use super::dto::{ApplicationsData, Envelope, JobsData, MessageBody, SettlementsData, TerritoriesData};
use crate::domain::entities::{
    ApplicationSummary, ApprovalDecision, FranchiseeStatus, FsaAssignment, Job, JobFilter,
    JobReassignment, LegacyStats, PayoutStatus, PlatformStats, RejectionDecision, Settlement,
    StatsReport, Territory, TerritoryAssignment, User,
};
use crate::domain::errors::ApiError;
use crate::domain::ports::AdminPort;

const NO_BODY: Option<&()> = None;

/// Reads either stats generation from one body.
pub(crate) fn parse_stats(body: Value) -> Result<StatsReport, ApiError> {
    let decode = |e: serde_json::Error| ApiError::decode(format!("failed to parse stats: {e}"));
    if body.get("success").is_some() {
        let envelope: Envelope<PlatformStats> = serde_json::from_value(body).map_err(decode)?;
        unwrap_envelope(envelope).map(StatsReport::Platform)
    } else {
        debug!("Stats endpoint answered with the older summary");
        serde_json::from_value::<LegacyStats>(body)
            .map(StatsReport::Legacy)
            .map_err(decode)
    }
}

#[async_trait]
impl AdminPort for ApiClient {
    async fn applications(
        &self,
        status: Option<FranchiseeStatus>,
    ) -> Result<Vec<ApplicationSummary>, ApiError> {
        let query = [("status_filter", status.map(|s| s.as_str().to_string()))];
        let data: ApplicationsData = self
            .call_enveloped(Method::GET, &["admin", "applications"], &query, NO_BODY)
            .await?;
        Ok(data.applications)
    }

    async fn approve_application(
        &self,
        application_id: &str,
        decision: &ApprovalDecision,
    ) -> Result<Option<String>, ApiError> {
        let path = &["admin", "applications", application_id, "approve"];
        self.call_acknowledged(Method::PATCH, path, &[], Some(decision))
            .await
    }

    async fn reject_application(
        &self,
        application_id: &str,
        decision: &RejectionDecision,
    ) -> Result<Option<String>, ApiError> {
        let path = &["admin", "applications", application_id, "reject"];
        self.call_acknowledged(Method::PATCH, path, &[], Some(decision))
            .await
    }

    async fn franchisee_accounts(&self) -> Result<Vec<User>, ApiError> {
        self.get(&["admin", "franchisees"], &[]).await
    }

    async fn activate_franchisee(&self, franchisee_id: &str) -> Result<Option<String>, ApiError> {
        let path = &["admin", "franchisees", franchisee_id, "activate"];
        self.call_acknowledged(Method::PATCH, path, &[], NO_BODY).await
    }

    async fn territories(&self) -> Result<Vec<Territory>, ApiError> {
        let data: TerritoriesData = self
            .call_enveloped(Method::GET, &["admin", "territories"], &[], NO_BODY)
            .await?;
        Ok(data.territories)
    }

    async fn assign_territory(
        &self,
        fsa: &str,
        assignment: &TerritoryAssignment,
    ) -> Result<Option<String>, ApiError> {
        let path = &["admin", "territories", fsa, "assign"];
        self.call_acknowledged(Method::PATCH, path, &[], Some(assignment))
            .await
    }

    async fn assign_fsas(&self, assignment: &FsaAssignment) -> Result<Option<String>, ApiError> {
        let body: MessageBody = self.post(&["admin", "assign-fsa"], assignment).await?;
        Ok(body.message)
    }

    async fn jobs(&self, filter: &JobFilter) -> Result<Vec<Job>, ApiError> {
        let query = [
            ("status_filter", filter.status.map(|s| s.as_str().to_string())),
            ("fsa_filter", filter.fsa.clone()),
            ("limit", filter.limit.map(|l| l.to_string())),
        ];
        let data: JobsData = self
            .call_enveloped(Method::GET, &["admin", "jobs"], &query, NO_BODY)
            .await?;
        Ok(data.jobs)
    }

    async fn reassign_job(
        &self,
        job_id: &str,
        reassignment: &JobReassignment,
    ) -> Result<Option<String>, ApiError> {
        let path = &["admin", "jobs", job_id, "reassign"];
        self.call_acknowledged(Method::POST, path, &[], Some(reassignment))
            .await
    }

    async fn settlements(&self, status: Option<PayoutStatus>) -> Result<Vec<Settlement>, ApiError> {
        let query = [("status_filter", status.map(|s| s.as_str().to_string()))];
        let data: SettlementsData = self
            .call_enveloped(Method::GET, &["admin", "settlements"], &query, NO_BODY)
            .await?;
        Ok(data.settlements)
    }

    async fn approve_settlement(&self, settlement_id: &str) -> Result<Option<String>, ApiError> {
        let path = &["admin", "settlements", settlement_id, "approve"];
        self.call_acknowledged(Method::POST, path, &[], NO_BODY).await
    }

    async fn stats(&self) -> Result<StatsReport, ApiError> {
        let body: Value = self.get(&["admin", "stats"], &[]).await?;
        parse_stats(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_enveloped_stats() {
        let body = json!({"success": true, "data": {"customers": {"total": 3}}});
        let StatsReport::Platform(stats) = parse_stats(body).unwrap() else {
            panic!("expected platform stats");
        };
        assert_eq!(stats.customers.total, 3);
    }

    #[test]
    fn test_parse_legacy_stats() {
        let body = json!({"totalBookings": 4, "totalRevenue": 120.5});
        assert!(matches!(parse_stats(body).unwrap(), StatsReport::Legacy(s) if s.total_bookings == 4));
    }

    #[test]
    fn test_failed_stats_envelope() {
        let body = json!({"success": false, "message": "Admin access required"});
        assert_eq!(
            parse_stats(body).unwrap_err().detail(),
            Some("Admin access required")
        );
    }
}
