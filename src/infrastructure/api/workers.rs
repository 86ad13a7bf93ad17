//! Worker invitation, team and training endpoints.

use async_trait::async_trait;
use reqwest::Method;

use super::ApiClient;
use crate::domain::entities::{
    Booking, BookingStatus, HrBankLink, InviteReceipt, PendingInvite, TeamMember,
    TrainingCompletion, TrainingOverview, WorkerInvite, WorkerProfile, WorkerStatusUpdate,
};
use crate::domain::errors::ApiError;
use crate::domain::ports::WorkerPort;

const NO_BODY: Option<&()> = None;

fn franchisee(id: &str) -> [(&'static str, Option<String>); 1] {
    [("franchisee_id", Some(id.to_string()))]
}

fn worker(id: &str) -> [(&'static str, Option<String>); 1] {
    [("worker_id", Some(id.to_string()))]
}

#[async_trait]
impl WorkerPort for ApiClient {
    async fn invite(
        &self,
        franchisee_id: &str,
        invite: &WorkerInvite,
    ) -> Result<InviteReceipt, ApiError> {
        self.call(Method::POST, &["workers", "invite"], &franchisee(franchisee_id), Some(invite))
            .await
    }

    async fn team(&self, franchisee_id: &str) -> Result<Vec<TeamMember>, ApiError> {
        self.get(&["workers", "team"], &franchisee(franchisee_id)).await
    }

    async fn pending_invites(&self, franchisee_id: &str) -> Result<Vec<PendingInvite>, ApiError> {
        self.get(&["workers", "pending-invites"], &franchisee(franchisee_id))
            .await
    }

    async fn cancel_invite(
        &self,
        franchisee_id: &str,
        invite_id: &str,
    ) -> Result<Option<String>, ApiError> {
        let path = &["workers", "invite", invite_id];
        self.call_acknowledged(Method::DELETE, path, &franchisee(franchisee_id), NO_BODY)
            .await
    }

    async fn set_status(
        &self,
        franchisee_id: &str,
        worker_id: &str,
        update: &WorkerStatusUpdate,
    ) -> Result<Option<String>, ApiError> {
        let path = &["workers", worker_id, "status"];
        self.call_acknowledged(Method::PATCH, path, &franchisee(franchisee_id), Some(update))
            .await
    }

    async fn link_hrbank(
        &self,
        franchisee_id: &str,
        worker_id: &str,
        link: &HrBankLink,
    ) -> Result<Option<String>, ApiError> {
        let path = &["workers", worker_id, "link-hrbank"];
        self.call_acknowledged(Method::POST, path, &franchisee(franchisee_id), Some(link))
            .await
    }

    async fn profile(&self, worker_id: &str) -> Result<WorkerProfile, ApiError> {
        self.get(&["workers", "me", "profile"], &worker(worker_id)).await
    }

    async fn training(&self, worker_id: &str) -> Result<TrainingOverview, ApiError> {
        self.get(&["workers", "me", "training"], &worker(worker_id)).await
    }

    async fn complete_training(&self, worker_id: &str) -> Result<TrainingCompletion, ApiError> {
        let path = &["workers", "me", "complete-training"];
        self.call(Method::POST, path, &worker(worker_id), NO_BODY).await
    }

    async fn jobs(
        &self,
        worker_id: &str,
        status: Option<BookingStatus>,
    ) -> Result<Vec<Booking>, ApiError> {
        let query = [
            ("worker_id", Some(worker_id.to_string())),
            ("status", status.map(|s| s.as_str().to_string())),
        ];
        self.get(&["workers", "me", "jobs"], &query).await
    }
}
