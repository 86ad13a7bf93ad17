//! Launch-time session restore.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::dto::HydrateOutcome;
use crate::application::services::SessionStore;
use crate::domain::errors::ApiError;
use crate::domain::ports::{AuthPort, SessionStoragePort};

/// Restores the persisted session into the [`SessionStore`].
pub struct HydrateSessionUseCase {
    auth_port: Arc<dyn AuthPort>,
    storage_port: Arc<dyn SessionStoragePort>,
    store: Arc<SessionStore>,
}

impl HydrateSessionUseCase {
    #[must_use]
    pub fn new(
        auth_port: Arc<dyn AuthPort>,
        storage_port: Arc<dyn SessionStoragePort>,
        store: Arc<SessionStore>,
    ) -> Self {
        Self {
            auth_port,
            storage_port,
            store,
        }
    }

    /// Installs the stored session, optionally confirming it with the server.
    ///
    /// Never fails: unreadable storage means signed out, and an unreachable
    /// server keeps the cached session for offline use.
    pub async fn execute(&self, revalidate: bool) -> HydrateOutcome {
        debug!("Checking storage for a saved session");
        let session = match self.storage_port.load().await {
            Ok(Some(session)) => session,
            Ok(None) => {
                debug!("No stored session");
                return HydrateOutcome::SignedOut;
            }
            Err(e) => {
                warn!(error = %e, "Could not read stored session, starting signed out");
                return HydrateOutcome::SignedOut;
            }
        };

        let cached_user = session.user().clone();
        self.store.install(session);
        info!(user_id = %cached_user.id(), "Restored stored session");

        if !revalidate {
            return HydrateOutcome::Restored {
                user: cached_user,
                revalidated: false,
            };
        }

        match self.auth_port.me().await {
            Ok(user) => {
                debug!("Stored token confirmed by server");
                self.store.refresh_user(user.clone());
                if let Some(session) = self.store.snapshot()
                    && let Err(e) = self.storage_port.save(&session).await
                {
                    warn!(error = %e, "Failed to refresh stored session");
                }
                HydrateOutcome::Restored {
                    user,
                    revalidated: true,
                }
            }
            Err(ApiError::Unauthorized { .. }) => {
                info!("Stored token no longer accepted, signing out");
                self.store.clear();
                if let Err(e) = self.storage_port.delete().await {
                    warn!(error = %e, "Failed to delete expired session");
                }
                HydrateOutcome::Expired
            }
            Err(e) => {
                warn!(error = %e, "Could not revalidate session, keeping cached session");
                HydrateOutcome::Restored {
                    user: cached_user,
                    revalidated: false,
                }
            }
        }
    }
}
