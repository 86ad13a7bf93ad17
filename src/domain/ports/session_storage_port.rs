//! Session persistence port definition.

use async_trait::async_trait;

use crate::domain::entities::Session;
use crate::domain::errors::StorageError;

/// Port for persisting the signed-in session across launches.
#[async_trait]
pub trait SessionStoragePort: Send + Sync {
    /// Loads the stored session, if any.
    async fn load(&self) -> Result<Option<Session>, StorageError>;

    /// Replaces the stored session.
    async fn save(&self, session: &Session) -> Result<(), StorageError>;

    /// Removes the stored session. Removing nothing succeeds.
    async fn delete(&self) -> Result<(), StorageError>;

    /// Checks if a session is stored.
    async fn has_session(&self) -> Result<bool, StorageError> {
        Ok(self.load().await?.is_some())
    }
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};
    use tokio::sync::RwLock;

    /// In-memory session storage for testing.
    pub struct MockSessionStorage {
        session: Arc<RwLock<Option<Session>>>,
        fail_reads: AtomicBool,
        fail_writes: AtomicBool,
    }

    impl MockSessionStorage {
        /// Creates empty mock storage.
        pub fn new() -> Self {
            Self {
                session: Arc::new(RwLock::new(None)),
                fail_reads: AtomicBool::new(false),
                fail_writes: AtomicBool::new(false),
            }
        }

        /// Creates mock storage holding a session.
        pub fn with_session(session: Session) -> Self {
            Self {
                session: Arc::new(RwLock::new(Some(session))),
                ..Self::new()
            }
        }

        pub fn set_fail_reads(&self, value: bool) {
            self.fail_reads.store(value, Ordering::SeqCst);
        }

        pub fn set_fail_writes(&self, value: bool) {
            self.fail_writes.store(value, Ordering::SeqCst);
        }

        pub async fn stored(&self) -> Option<Session> {
            self.session.read().await.clone()
        }
    }

    impl Default for MockSessionStorage {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl SessionStoragePort for MockSessionStorage {
        async fn load(&self) -> Result<Option<Session>, StorageError> {
            if self.fail_reads.load(Ordering::SeqCst) {
                return Err(StorageError::AccessFailed("mock read failure".into()));
            }
            Ok(self.session.read().await.clone())
        }

        async fn save(&self, session: &Session) -> Result<(), StorageError> {
            if self.fail_writes.load(Ordering::SeqCst) {
                return Err(StorageError::StorageFailed("mock write failure".into()));
            }
            *self.session.write().await = Some(session.clone());
            Ok(())
        }

        async fn delete(&self) -> Result<(), StorageError> {
            *self.session.write().await = None;
            Ok(())
        }
    }
}
