//! Worker and team port.

use async_trait::async_trait;

use crate::domain::entities::{
    Booking, BookingStatus, HrBankLink, InviteReceipt, PendingInvite, TeamMember,
    TrainingCompletion, TrainingOverview, WorkerInvite, WorkerProfile, WorkerStatusUpdate,
};
use crate::domain::errors::ApiError;

/// Port for the `/workers` endpoints.
///
/// The backend identifies the acting franchisee or worker by an explicit
/// id rather than the bearer token, so every call names it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WorkerPort: Send + Sync {
    async fn invite(
        &self,
        franchisee_id: &str,
        invite: &WorkerInvite,
    ) -> Result<InviteReceipt, ApiError>;

    async fn team(&self, franchisee_id: &str) -> Result<Vec<TeamMember>, ApiError>;

    async fn pending_invites(&self, franchisee_id: &str) -> Result<Vec<PendingInvite>, ApiError>;

    async fn cancel_invite(
        &self,
        franchisee_id: &str,
        invite_id: &str,
    ) -> Result<Option<String>, ApiError>;

    async fn set_status(
        &self,
        franchisee_id: &str,
        worker_id: &str,
        update: &WorkerStatusUpdate,
    ) -> Result<Option<String>, ApiError>;

    async fn link_hrbank(
        &self,
        franchisee_id: &str,
        worker_id: &str,
        link: &HrBankLink,
    ) -> Result<Option<String>, ApiError>;

    async fn profile(&self, worker_id: &str) -> Result<WorkerProfile, ApiError>;

    async fn training(&self, worker_id: &str) -> Result<TrainingOverview, ApiError>;

    /// Moves a fully trained worker from pending training to active.
    async fn complete_training(&self, worker_id: &str) -> Result<TrainingCompletion, ApiError>;

    /// Bookings the worker is assigned to, earliest first.
    async fn jobs(
        &self,
        worker_id: &str,
        status: Option<BookingStatus>,
    ) -> Result<Vec<Booking>, ApiError>;
}
