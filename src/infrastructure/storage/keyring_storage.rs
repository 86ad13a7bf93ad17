//! Keyring-based session storage.

use async_trait::async_trait;
use keyring::Entry;
use tracing::{debug, warn};

use crate::domain::entities::Session;
use crate::domain::errors::StorageError;
use crate::domain::ports::SessionStoragePort;

const KEYRING_SERVICE: &str = "cleangrid";
const KEYRING_USER: &str = "session";

/// System keyring session storage adapter.
///
/// The session is kept as one JSON secret so token and user never drift apart.
pub struct KeyringSessionStorage {
    service: String,
    user: String,
}

impl KeyringSessionStorage {
    /// Whether this build can reach the system keyring.
    pub const SUPPORTED: bool = true;

    /// Creates new storage with default names.
    #[must_use]
    pub fn new() -> Self {
        Self::with_names(KEYRING_SERVICE, KEYRING_USER)
    }

    /// Creates storage with custom names.
    #[must_use]
    pub fn with_names(service: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            user: user.into(),
        }
    }

    fn entry(&self) -> Result<Entry, StorageError> {
        Entry::new(&self.service, &self.user)
            .map_err(|e| StorageError::AccessFailed(format!("failed to access keyring: {e}")))
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
        debug!(service = %self.service, "Retrieving session from keyring");

        let secret = match self.entry()?.get_password() {
            Ok(secret) => secret,
            Err(keyring::Error::NoEntry) => {
                debug!("No session stored in keyring");
                return Ok(None);
            }
            Err(e) => {
                warn!(error = %e, "Failed to retrieve session from keyring");
                return Err(StorageError::RetrievalFailed(e.to_string()));
            }
        };

        serde_json::from_str(&secret)
            .map(Some)
            .map_err(|e| StorageError::Corrupt(e.to_string()))
    }

    async fn save(&self, session: &Session) -> Result<(), StorageError> {
        debug!(service = %self.service, "Storing session in keyring");

        let secret =
            serde_json::to_string(session).map_err(|e| StorageError::StorageFailed(e.to_string()))?;

        self.entry()?.set_password(&secret).map_err(|e| {
            warn!(error = %e, "Failed to store session in keyring");
            StorageError::StorageFailed(e.to_string())
        })
    }

    async fn delete(&self) -> Result<(), StorageError> {
        debug!(service = %self.service, "Deleting session from keyring");

        match self.entry()?.delete_credential() {
            Ok(()) => {
                debug!("Session deleted from keyring");
                Ok(())
            }
            Err(keyring::Error::NoEntry) => {
                debug!("No session to delete");
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Failed to delete session from keyring");
                Err(StorageError::DeletionFailed(e.to_string()))
            }
        }
    }
}
