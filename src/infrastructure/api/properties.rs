//! Saved property endpoints.

use async_trait::async_trait;

use super::ApiClient;
use crate::domain::entities::{Property, PropertyInput};
use crate::domain::errors::ApiError;
use crate::domain::ports::PropertyPort;

#[async_trait]
impl PropertyPort for ApiClient {
    async fn list_properties(&self) -> Result<Vec<Property>, ApiError> {
        self.get(&["properties"], &[]).await
    }

    async fn create_property(&self, input: &PropertyInput) -> Result<Property, ApiError> {
        self.post(&["properties"], input).await
    }

    async fn update_property(&self, id: &str, input: &PropertyInput) -> Result<Property, ApiError> {
        self.put(&["properties", id], input).await
    }

    async fn delete_property(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&["properties", id]).await
    }
}
