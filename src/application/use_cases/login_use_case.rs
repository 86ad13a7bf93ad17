//! Login, signup and logout.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::application::dto::{LoginResponse, SessionSource};
use crate::application::services::SessionStore;
use crate::domain::entities::{AcceptInvite, Credentials, Registration, Session};
use crate::domain::errors::AuthError;
use crate::domain::ports::{AuthPort, SessionStoragePort};

/// Handles user authentication workflow.
#[derive(Clone)]
pub struct LoginUseCase {
    auth_port: Arc<dyn AuthPort>,
    storage_port: Arc<dyn SessionStoragePort>,
    store: Arc<SessionStore>,
}

impl LoginUseCase {
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

    /// Signs in and installs the session.
    ///
    /// # Errors
    /// Returns error if a field is empty or the server refuses the credentials.
    pub async fn execute(&self, credentials: &Credentials) -> Result<LoginResponse, AuthError> {
        if credentials.email().is_empty() {
            return Err(AuthError::missing("email"));
        }
        if credentials.password().is_empty() {
            return Err(AuthError::missing("password"));
        }

        debug!(email = %credentials.email(), "Attempting login");
        let session = self.auth_port.login(credentials).await.map_err(|e| {
            warn!(error = %e, "Login rejected");
            e
        })?;

        Ok(self.establish(session, SessionSource::Login).await)
    }

    /// Creates an account and installs its session.
    ///
    /// # Errors
    /// Returns error if a required field is empty or the server refuses the signup.
    pub async fn signup(&self, registration: &Registration) -> Result<LoginResponse, AuthError> {
        for (field, value) in [
            ("email", &registration.email),
            ("password", &registration.password),
            ("name", &registration.name),
            ("phone", &registration.phone),
        ] {
            if value.trim().is_empty() {
                return Err(AuthError::missing(field));
            }
        }

        debug!(email = %registration.email, role = %registration.role, "Attempting signup");
        let session = self.auth_port.signup(registration).await.map_err(|e| {
            warn!(error = %e, "Signup rejected");
            e
        })?;

        Ok(self.establish(session, SessionSource::Signup).await)
    }

    /// Accepts a worker invitation, which creates the account, and
    /// installs its session.
    ///
    /// # Errors
    /// Returns error if the code or password is empty or the server refuses
    /// the invitation.
    pub async fn accept_invite(&self, accept: &AcceptInvite) -> Result<LoginResponse, AuthError> {
        if accept.invite_code.trim().is_empty() {
            return Err(AuthError::missing("invite code"));
        }
        if accept.password.is_empty() {
            return Err(AuthError::missing("password"));
        }

        debug!("Accepting worker invitation");
        let session = self.auth_port.accept_invite(accept).await.map_err(|e| {
            warn!(error = %e, "Invitation rejected");
            e
        })?;

        Ok(self.establish(session, SessionSource::Invite).await)
    }

    async fn establish(&self, session: Session, source: SessionSource) -> LoginResponse {
        let user = session.user().clone();
        info!(user_id = %user.id(), role = %user.role(), %source, "Successfully authenticated");

        let session_persisted = match self.storage_port.save(&session).await {
            Ok(()) => {
                info!("Session persisted");
                true
            }
            Err(e) => {
                error!(error = %e, "Failed to persist session");
                false
            }
        };

        self.store.install(session);
        LoginResponse::new(user, source, session_persisted)
    }

    /// Signs out locally and forgets the stored session.
    ///
    /// The in-memory session is cleared even when storage fails.
    ///
    /// # Errors
    /// Returns error if the stored session could not be deleted.
    pub async fn logout(&self) -> Result<(), AuthError> {
        let was_signed_in = self.store.clear();
        debug!(was_signed_in, "Deleting stored session");

        match self.storage_port.delete().await {
            Ok(()) => {
                info!("Signed out");
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "Failed to delete stored session");
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::ApiError;
    use crate::domain::ports::mocks::{MockAuthPort, MockSessionStorage, TEST_TOKEN};

    fn make_use_case(
        auth: Arc<MockAuthPort>,
        storage: Arc<MockSessionStorage>,
    ) -> (LoginUseCase, Arc<SessionStore>) {
        let store = Arc::new(SessionStore::new());
        (LoginUseCase::new(auth, storage, store.clone()), store)
    }

    #[tokio::test]
    async fn test_successful_login() {
        let storage = Arc::new(MockSessionStorage::new());
        let (use_case, store) = make_use_case(Arc::new(MockAuthPort::new()), storage.clone());

        let response = use_case
            .execute(&Credentials::new("jane@example.com", "secret123"))
            .await
            .unwrap();

        assert_eq!(response.user.email(), "jane@example.com");
        assert_eq!(response.source, SessionSource::Login);
        assert!(response.session_persisted);
        assert_eq!(store.token().unwrap().as_str(), TEST_TOKEN);
        assert!(storage.has_session().await.unwrap());
    }

    #[tokio::test]
    async fn test_missing_password() {
        let (use_case, store) = make_use_case(
            Arc::new(MockAuthPort::new()),
            Arc::new(MockSessionStorage::new()),
        );

        let result = use_case
            .execute(&Credentials::new("jane@example.com", ""))
            .await;

        assert!(matches!(
            result,
            Err(AuthError::MissingField { field: "password" })
        ));
        assert!(!store.is_authenticated());
    }

    #[tokio::test]
    async fn test_rejected_credentials() {
        let auth = Arc::new(MockAuthPort::new());
        auth.fail_login(ApiError::from_status(
            401,
            Some("Invalid email or password".into()),
        ));
        let (use_case, store) = make_use_case(auth, Arc::new(MockSessionStorage::new()));

        let err = use_case
            .execute(&Credentials::new("jane@example.com", "wrong"))
            .await
            .unwrap_err();

        assert_eq!(err.user_message("Login failed"), "Invalid email or password");
        assert!(!store.is_authenticated());
    }

    #[tokio::test]
    async fn test_persist_failure_does_not_fail_login() {
        let storage = Arc::new(MockSessionStorage::new());
        storage.set_fail_writes(true);
        let (use_case, store) = make_use_case(Arc::new(MockAuthPort::new()), storage);

        let response = use_case
            .execute(&Credentials::new("jane@example.com", "secret123"))
            .await
            .unwrap();

        assert!(!response.session_persisted);
        assert!(store.is_authenticated());
    }

    #[tokio::test]
    async fn test_signup_requires_phone() {
        let (use_case, _) = make_use_case(
            Arc::new(MockAuthPort::new()),
            Arc::new(MockSessionStorage::new()),
        );
        let registration = Registration::customer("a@b.ca", "pw123456", "Ann", " ");

        let result = use_case.signup(&registration).await;

        assert!(matches!(result, Err(AuthError::MissingField { field: "phone" })));
    }

    #[tokio::test]
    async fn test_signup_installs_session() {
        let (use_case, store) = make_use_case(
            Arc::new(MockAuthPort::new()),
            Arc::new(MockSessionStorage::new()),
        );
        let registration = Registration::customer("a@b.ca", "pw123456", "Ann", "416-555-0000");

        let response = use_case.signup(&registration).await.unwrap();

        assert_eq!(response.source, SessionSource::Signup);
        assert!(store.is_authenticated());
    }

    #[tokio::test]
    async fn test_accept_invite_installs_session() {
        let storage = Arc::new(MockSessionStorage::new());
        let (use_case, store) = make_use_case(Arc::new(MockAuthPort::new()), storage.clone());
        let accept = AcceptInvite {
            invite_code: "k3y".into(),
            password: "pw123456".into(),
            phone: None,
        };

        let response = use_case.accept_invite(&accept).await.unwrap();

        assert_eq!(response.source, SessionSource::Invite);
        assert!(store.is_authenticated());
        assert!(storage.stored().await.is_some());
    }

    #[tokio::test]
    async fn test_accept_invite_requires_code() {
        let (use_case, _) = make_use_case(
            Arc::new(MockAuthPort::new()),
            Arc::new(MockSessionStorage::new()),
        );
        let accept = AcceptInvite {
            invite_code: "  ".into(),
            password: "pw123456".into(),
            phone: None,
        };

        let result = use_case.accept_invite(&accept).await;

        assert!(matches!(
            result,
            Err(AuthError::MissingField { field: "invite code" })
        ));
    }

    #[tokio::test]
    async fn test_logout_clears_everything() {
        let storage = Arc::new(MockSessionStorage::new());
        let (use_case, store) = make_use_case(Arc::new(MockAuthPort::new()), storage.clone());
        use_case
            .execute(&Credentials::new("jane@example.com", "secret123"))
            .await
            .unwrap();

        use_case.logout().await.unwrap();

        assert!(!store.is_authenticated());
        assert!(storage.stored().await.is_none());
    }

    #[tokio::test]
    async fn test_logout_when_signed_out_is_ok() {
        let (use_case, _) = make_use_case(
            Arc::new(MockAuthPort::new()),
            Arc::new(MockSessionStorage::new()),
        );
        assert!(use_case.logout().await.is_ok());
    }
}
