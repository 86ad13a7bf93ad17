//! Authentication DTOs.

use crate::domain::entities::User;

/// How a session came to be installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionSource {
    /// Restored from storage at launch.
    Storage,
    /// Fresh sign-in.
    Login,
    /// Fresh account.
    Signup,
    /// Worker account created from an invitation.
    Invite,
}

impl SessionSource {
    /// Returns human-readable description.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Storage => "stored session",
            Self::Login => "login",
            Self::Signup => "signup",
            Self::Invite => "worker invitation",
        }
    }
}

impl std::fmt::Display for SessionSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Result of a successful login or signup.
#[derive(Debug, Clone)]
pub struct LoginResponse {
    pub user: User,
    pub source: SessionSource,
    /// False when the session works for this run but could not be saved.
    pub session_persisted: bool,
}

impl LoginResponse {
    #[must_use]
    pub const fn new(user: User, source: SessionSource, session_persisted: bool) -> Self {
        Self {
            user,
            source,
            session_persisted,
        }
    }
}

/// What launch-time hydration found.
#[derive(Debug, Clone, PartialEq)]
pub enum HydrateOutcome {
    /// Nothing stored, or storage unreadable.
    SignedOut,
    /// Stored session installed.
    Restored {
        user: User,
        /// Whether the server confirmed the token during this launch.
        revalidated: bool,
    },
    /// The server no longer accepts the stored token; it was discarded.
    Expired,
}

impl HydrateOutcome {
    #[must_use]
    pub const fn user(&self) -> Option<&User> {
        match self {
            Self::Restored { user, .. } => Some(user),
            Self::SignedOut | Self::Expired => None,
        }
    }
}
