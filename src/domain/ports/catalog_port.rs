//! Service catalog and quote port.

use async_trait::async_trait;

use crate::domain::entities::{NewService, Quote, QuoteRequest, Service};
use crate::domain::errors::ApiError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogPort: Send + Sync {
    async fn list_services(&self) -> Result<Vec<Service>, ApiError>;

    async fn get_service(&self, id: &str) -> Result<Service, ApiError>;

    /// Admin only.
    async fn create_service(&self, service: &NewService) -> Result<Service, ApiError>;

    /// Prices a job server-side.
    async fn quote(&self, request: &QuoteRequest) -> Result<Quote, ApiError>;
}
