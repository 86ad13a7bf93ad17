//! File-based session storage.

use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::{debug, warn};

use crate::domain::entities::Session;
use crate::domain::errors::StorageError;
use crate::domain::ports::SessionStoragePort;

pub const SESSION_FILE_NAME: &str = "session.json";

/// Stores the session as JSON in the data directory.
///
/// Writes go through a temporary file in the same directory and a rename,
/// so a crash never leaves a half-written session behind. On Unix the
/// temporary file is created readable by the owner only.
#[derive(Debug, Clone)]
pub struct FileSessionStorage {
    path: PathBuf,
}

impl FileSessionStorage {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Storage at `session.json` inside `dir`.
    #[must_use]
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(SESSION_FILE_NAME))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_atomically(path: &Path, content: &[u8]) -> Result<(), std::io::Error> {
        let parent = path
            .parent()
            .ok_or_else(|| std::io::Error::other("Invalid path"))?;
        std::fs::create_dir_all(parent)?;
        let mut temp_file = tempfile::NamedTempFile::new_in(parent)?;
        temp_file.write_all(content)?;
        temp_file.as_file().sync_all()?;
        temp_file.persist(path).map_err(|e| e.error)?;
        Ok(())
    }
}

#[async_trait]
impl SessionStoragePort for FileSessionStorage {
    async fn load(&self) -> Result<Option<Session>, StorageError> {
        debug!(path = %self.path.display(), "Reading stored session");

        let content = match fs::read(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StorageError::RetrievalFailed(e.to_string())),
        };

        serde_json::from_slice(&content).map(Some).map_err(|e| {
            warn!(error = %e, "Stored session file is unreadable");
            StorageError::Corrupt(e.to_string())
        })
    }

    async fn save(&self, session: &Session) -> Result<(), StorageError> {
        let content =
            serde_json::to_vec(session).map_err(|e| StorageError::StorageFailed(e.to_string()))?;
        let path = self.path.clone();

        tokio::task::spawn_blocking(move || Self::write_atomically(&path, &content))
            .await
            .map_err(|e| StorageError::StorageFailed(e.to_string()))?
            .map_err(|e| {
                warn!(error = %e, "Failed to write session file");
                StorageError::StorageFailed(e.to_string())
            })?;

        debug!(path = %self.path.display(), "Session written");
        Ok(())
    }

    async fn delete(&self) -> Result<(), StorageError> {
        match fs::remove_file(&self.path).await {
            Ok(()) => {
                debug!("Session file removed");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::DeletionFailed(e.to_string())),
        }
    }
}
