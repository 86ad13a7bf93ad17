//! Signed-in session: the token and the user it belongs to.

use serde::{Deserialize, Serialize};

use super::{AuthToken, User};

/// Token/user pair persisted between launches.
///
/// Both halves are always installed and cleared together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    token: AuthToken,
    user: User,
}

impl Session {
    #[must_use]
    pub const fn new(token: AuthToken, user: User) -> Self {
        Self { token, user }
    }

    #[must_use]
    pub const fn token(&self) -> &AuthToken {
        &self.token
    }

    #[must_use]
    pub const fn user(&self) -> &User {
        &self.user
    }

    /// Replaces the cached user, keeping the token.
    #[must_use]
    pub fn with_user(self, user: User) -> Self {
        Self {
            token: self.token,
            user,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::UserRole;

    fn make_session() -> Session {
        Session::new(
            AuthToken::new_unchecked("aaaaaaaaaa.bbbbbbbbbb.cccccccccc"),
            User::new("u1", "a@b.ca", "A", UserRole::Customer),
        )
    }

    #[test]
    fn test_session_json_round_trip() {
        let session = make_session();
        let json = serde_json::to_string(&session).unwrap();
        let back: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(back, session);
    }

    #[test]
    fn test_debug_masks_token() {
        let session = make_session();
        let debug = format!("{session:?}");
        assert!(!debug.contains("bbbbbbbbbb"));
    }

    #[test]
    fn test_with_user_keeps_token() {
        let session = make_session();
        let updated = session
            .clone()
            .with_user(User::new("u1", "a@b.ca", "Renamed", UserRole::Customer));
        assert_eq!(updated.token(), session.token());
        assert_eq!(updated.user().name(), "Renamed");
    }
}
