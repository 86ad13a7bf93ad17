//! Service catalog and quote endpoints.

use async_trait::async_trait;

use super::ApiClient;
use crate::domain::entities::{NewService, Quote, QuoteRequest, Service};
use crate::domain::errors::ApiError;
use crate::domain::ports::CatalogPort;

#[async_trait]
impl CatalogPort for ApiClient {
    async fn list_services(&self) -> Result<Vec<Service>, ApiError> {
        self.get(&["services"], &[]).await
    }

    async fn get_service(&self, id: &str) -> Result<Service, ApiError> {
        self.get(&["services", id], &[]).await
    }

    async fn create_service(&self, service: &NewService) -> Result<Service, ApiError> {
        self.post(&["services"], service).await
    }

    async fn quote(&self, request: &QuoteRequest) -> Result<Quote, ApiError> {
        self.post(&["quotes"], request).await
    }
}
