//! Saved property port.

use async_trait::async_trait;

use crate::domain::entities::{Property, PropertyInput};
use crate::domain::errors::ApiError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PropertyPort: Send + Sync {
    async fn list_properties(&self) -> Result<Vec<Property>, ApiError>;

    async fn create_property(&self, input: &PropertyInput) -> Result<Property, ApiError>;

    async fn update_property(&self, id: &str, input: &PropertyInput) -> Result<Property, ApiError>;

    async fn delete_property(&self, id: &str) -> Result<(), ApiError>;
}
