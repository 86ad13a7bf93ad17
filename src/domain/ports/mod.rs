mod admin_port;
mod auth_port;
mod bearer_token_port;
mod booking_port;
mod catalog_port;
mod franchisee_port;
mod payment_port;
mod property_port;
mod session_storage_port;
mod worker_port;

pub use admin_port::AdminPort;
pub use auth_port::AuthPort;
pub use bearer_token_port::{BearerTokenProvider, NoBearerToken};
pub use booking_port::BookingPort;
pub use catalog_port::CatalogPort;
pub use franchisee_port::FranchiseePort;
pub use payment_port::PaymentPort;
pub use property_port::PropertyPort;
pub use session_storage_port::SessionStoragePort;
pub use worker_port::WorkerPort;

#[cfg(test)]
pub mod mocks {
    pub use super::admin_port::MockAdminPort;
    pub use super::auth_port::mock::{MockAuthPort, TEST_TOKEN};
    pub use super::booking_port::MockBookingPort;
    pub use super::catalog_port::MockCatalogPort;
    pub use super::franchisee_port::MockFranchiseePort;
    pub use super::payment_port::MockPaymentPort;
    pub use super::property_port::MockPropertyPort;
    pub use super::session_storage_port::mock::MockSessionStorage;
    pub use super::worker_port::MockWorkerPort;
}
