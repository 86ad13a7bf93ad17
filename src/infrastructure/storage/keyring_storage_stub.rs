//! Stub keyring storage for builds without keyring support.

use async_trait::async_trait;
use tracing::debug;

use crate::domain::entities::Session;
use crate::domain::errors::StorageError;
use crate::domain::ports::SessionStoragePort;

/// Stub session storage that keeps nothing.
/// Used when keyring feature is disabled.
pub struct KeyringSessionStorage;

impl KeyringSessionStorage {
    /// Whether this build can reach the system keyring.
    pub const SUPPORTED: bool = false;

    /// Creates new stub storage.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Creates storage with custom names (no-op in stub).
    #[must_use]
    pub fn with_names(_service: impl Into<String>, _user: impl Into<String>) -> Self {
        Self
    }
}

impl Default for KeyringSessionStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStoragePort for KeyringSessionStorage {
    async fn load(&self) -> Result<Option<Session>, StorageError> {
        debug!("Keyring feature disabled - no session storage available");
        Ok(None)
    }

    async fn save(&self, _session: &Session) -> Result<(), StorageError> {
        Err(StorageError::NotAvailable(
            "built without keyring support".to_string(),
        ))
    }

    async fn delete(&self) -> Result<(), StorageError> {
        debug!("Keyring feature disabled - nothing to delete");
        Ok(())
    }
}
