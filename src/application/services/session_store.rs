//! Process-wide session state.

use parking_lot::RwLock;
use tokio::sync::watch;
use tracing::info;

use crate::domain::entities::{AuthToken, Session, User};
use crate::domain::ports::BearerTokenProvider;

/// Holds the signed-in session and notifies observers when it changes.
///
/// Token and user live in one [`Session`], so a token never exists
/// without its user.
#[derive(Debug)]
pub struct SessionStore {
    session: RwLock<Option<Session>>,
    changes: watch::Sender<Option<User>>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        let (changes, _) = watch::channel(None);
        Self {
            session: RwLock::new(None),
            changes,
        }
    }

    /// Replaces the current session.
    pub fn install(&self, session: Session) {
        let user = session.user().clone();
        info!(user_id = %user.id(), role = %user.role(), "Session installed");
        *self.session.write() = Some(session);
        self.changes.send_replace(Some(user));
    }

    /// Swaps the user of the current session, keeping its token.
    /// Returns false when signed out.
    pub fn refresh_user(&self, user: User) -> bool {
        let mut guard = self.session.write();
        let Some(session) = guard.take() else {
            return false;
        };
        *guard = Some(session.with_user(user.clone()));
        drop(guard);
        self.changes.send_replace(Some(user));
        true
    }

    /// Drops the current session. Returns whether one was present.
    pub fn clear(&self) -> bool {
        let had_session = self.session.write().take().is_some();
        if had_session {
            info!("Session cleared");
            self.changes.send_replace(None);
        }
        had_session
    }

    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        self.session.read().as_ref().map(|s| s.user().clone())
    }

    #[must_use]
    pub fn token(&self) -> Option<AuthToken> {
        self.session.read().as_ref().map(|s| s.token().clone())
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.read().is_some()
    }

    #[must_use]
    pub fn snapshot(&self) -> Option<Session> {
        self.session.read().clone()
    }

    /// Receiver that observes every login, logout and hydration.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Option<User>> {
        self.changes.subscribe()
    }
}

impl BearerTokenProvider for SessionStore {
    fn bearer_token(&self) -> Option<AuthToken> {
        self.token()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::UserRole;
    use crate::domain::ports::mocks::TEST_TOKEN;

    fn session(role: UserRole) -> Session {
        Session::new(
            AuthToken::new_unchecked(TEST_TOKEN),
            User::new("u1", "jane@example.com", "Jane", role),
        )
    }

    #[test]
    fn test_starts_signed_out() {
        let store = SessionStore::new();
        assert!(!store.is_authenticated());
        assert!(store.token().is_none());
        assert!(store.current_user().is_none());
    }

    #[test]
    fn test_install_and_clear_together() {
        let store = SessionStore::new();
        store.install(session(UserRole::Customer));

        assert!(store.is_authenticated());
        assert_eq!(store.token().unwrap().as_str(), TEST_TOKEN);
        assert_eq!(store.current_user().unwrap().id(), "u1");

        assert!(store.clear());
        assert!(store.token().is_none());
        assert!(store.current_user().is_none());
        assert!(!store.clear());
    }

    #[test]
    fn test_bearer_token_follows_session() {
        let store = SessionStore::new();
        assert!(store.bearer_token().is_none());

        store.install(session(UserRole::Admin));
        assert_eq!(store.bearer_token().unwrap().as_str(), TEST_TOKEN);
    }

    #[test]
    fn test_refresh_user_keeps_token() {
        let store = SessionStore::new();
        assert!(!store.refresh_user(User::new("u1", "a@b.ca", "A", UserRole::Customer)));

        store.install(session(UserRole::Customer));
        assert!(store.refresh_user(User::new("u1", "jane@example.com", "Jane D", UserRole::Franchisee)));

        assert_eq!(store.current_user().unwrap().role(), UserRole::Franchisee);
        assert_eq!(store.token().unwrap().as_str(), TEST_TOKEN);
    }

    #[tokio::test]
    async fn test_subscribers_see_changes() {
        let store = SessionStore::new();
        let mut rx = store.subscribe();
        assert!(rx.borrow().is_none());

        store.install(session(UserRole::Customer));
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().as_ref().unwrap().id(), "u1");

        store.clear();
        rx.changed().await.unwrap();
        assert!(rx.borrow_and_update().is_none());
    }
}
