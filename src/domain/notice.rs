use crate::domain::errors::{ApiError, AuthError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warn,
    Error,
}

impl NoticeLevel {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warn => "warning",
            Self::Error => "error",
        }
    }
}

/// User-facing alert raised after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub message: String,
}

impl Notice {
    #[must_use]
    pub fn new(level: NoticeLevel, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            message: message.into(),
        }
    }

    #[must_use]
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, title, message)
    }

    #[must_use]
    pub fn warn(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Warn, title, message)
    }

    /// Notice for a failed API call. `fallback` names the action, e.g.
    /// "Failed to load bookings", and is used when the server gave no detail.
    ///
    /// Failures that may clear up on their own ask the user to retry.
    #[must_use]
    pub fn from_api_error(err: &ApiError, fallback: &str) -> Self {
        let mut message = err.user_message(fallback);
        if err.is_recoverable() {
            message = format!("{}. Try again shortly.", message.trim_end_matches('.'));
        }
        match err {
            ApiError::Unauthorized { .. } => {
                Self::new(NoticeLevel::Warn, "Session expired", message)
            }
            ApiError::Network { .. } => Self::new(NoticeLevel::Warn, "Connection problem", message),
            ApiError::RateLimited { .. } => Self::new(NoticeLevel::Warn, "Slow down", message),
            ApiError::Forbidden { .. } => Self::new(NoticeLevel::Error, "Access denied", message),
            ApiError::InvalidId { .. } => {
                Self::new(NoticeLevel::Error, "Invalid input", err.to_string())
            }
            ApiError::NotFound { .. }
            | ApiError::Rejected { .. }
            | ApiError::Server { .. }
            | ApiError::Decode { .. } => Self::new(NoticeLevel::Error, "Error", message),
        }
    }

    /// Notice for a failed sign-in, signup or invite acceptance.
    ///
    /// A 401 here means the credentials were refused, not that a session
    /// ran out.
    #[must_use]
    pub fn from_auth_error(err: &AuthError, fallback: &str) -> Self {
        match err {
            AuthError::Api(api @ (ApiError::Unauthorized { .. } | ApiError::Forbidden { .. })) => {
                Self::new(NoticeLevel::Error, "Sign-in failed", api.user_message(fallback))
            }
            AuthError::Api(api) => Self::from_api_error(api, fallback),
            AuthError::MissingField { .. } | AuthError::NotSignedIn => {
                Self::warn("Sign in", err.user_message(fallback))
            }
            AuthError::InvalidTokenFormat { .. } | AuthError::Storage(_) => {
                Self::new(NoticeLevel::Error, "Error", err.user_message(fallback))
            }
        }
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.level.label(), self.title, self.message)
    }
}
