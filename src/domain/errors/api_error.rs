//! HTTP API error types.

use thiserror::Error;

/// Failure of a call to the backend API.
///
/// `detail` carries the server's own explanation when the body had one,
/// so callers can prefer it over their generic wording.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[allow(missing_docs)]
pub enum ApiError {
    #[error("not authenticated{}", suffix(.detail))]
    Unauthorized { detail: Option<String> },

    #[error("access denied{}", suffix(.detail))]
    Forbidden { detail: Option<String> },

    #[error("not found{}", suffix(.detail))]
    NotFound { detail: Option<String> },

    #[error("request rejected ({status}){}", suffix(.detail))]
    Rejected { status: u16, detail: Option<String> },

    #[error("rate limited{}", suffix(.detail))]
    RateLimited { detail: Option<String> },

    #[error("server error ({status}){}", suffix(.detail))]
    Server { status: u16, detail: Option<String> },

    #[error("network error: {message}")]
    Network { message: String },

    #[error("unexpected response: {message}")]
    Decode { message: String },

    #[error("invalid identifier {id:?}")]
    InvalidId { id: String },
}

fn suffix(detail: &Option<String>) -> String {
    detail
        .as_deref()
        .map(|detail| format!(": {detail}"))
        .unwrap_or_default()
}

impl ApiError {
    /// Maps a non-success HTTP status to its error variant.
    #[must_use]
    pub fn from_status(status: u16, detail: Option<String>) -> Self {
        match status {
            401 => Self::Unauthorized { detail },
            403 => Self::Forbidden { detail },
            404 => Self::NotFound { detail },
            429 => Self::RateLimited { detail },
            500..=599 => Self::Server { status, detail },
            _ => Self::Rejected { status, detail },
        }
    }

    /// Creates a rejection for an envelope reporting `success: false`.
    #[must_use]
    pub fn rejected(detail: impl Into<String>) -> Self {
        Self::Rejected {
            status: 200,
            detail: Some(detail.into()),
        }
    }

    /// Creates network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Creates decode error.
    #[must_use]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Server-provided explanation, if any.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Unauthorized { detail }
            | Self::Forbidden { detail }
            | Self::NotFound { detail }
            | Self::Rejected { detail, .. }
            | Self::RateLimited { detail }
            | Self::Server { detail, .. } => detail.as_deref(),
            Self::Network { .. } | Self::Decode { .. } | Self::InvalidId { .. } => None,
        }
    }

    /// Message to show a user: the server detail, or `fallback`.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        self.detail()
            .filter(|detail| !detail.trim().is_empty())
            .map_or_else(|| fallback.to_string(), ToString::to_string)
    }

    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    /// Returns whether retrying the same request later could succeed.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::Network { .. } | Self::RateLimited { .. } | Self::Server { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(401 => matches ApiError::Unauthorized { .. })]
    #[test_case(403 => matches ApiError::Forbidden { .. })]
    #[test_case(404 => matches ApiError::NotFound { .. })]
    #[test_case(400 => matches ApiError::Rejected { status: 400, .. })]
    #[test_case(409 => matches ApiError::Rejected { status: 409, .. })]
    #[test_case(422 => matches ApiError::Rejected { status: 422, .. })]
    #[test_case(429 => matches ApiError::RateLimited { .. })]
    #[test_case(500 => matches ApiError::Server { status: 500, .. })]
    #[test_case(503 => matches ApiError::Server { status: 503, .. })]
    fn test_from_status(status: u16) -> ApiError {
        ApiError::from_status(status, None)
    }

    #[test]
    fn test_user_message_prefers_detail() {
        let err = ApiError::from_status(400, Some("Email already registered".into()));
        assert_eq!(err.user_message("Signup failed"), "Email already registered");
    }

    #[test]
    fn test_user_message_falls_back() {
        assert_eq!(
            ApiError::network("timed out").user_message("Failed to load bookings"),
            "Failed to load bookings"
        );
        assert_eq!(
            ApiError::from_status(500, Some("  ".into())).user_message("Failed to load jobs"),
            "Failed to load jobs"
        );
    }

    #[test]
    fn test_display_includes_detail() {
        let err = ApiError::from_status(403, Some("Admin access required".into()));
        assert_eq!(err.to_string(), "access denied: Admin access required");
        assert_eq!(
            ApiError::from_status(404, None).to_string(),
            "not found"
        );
    }

    #[test]
    fn test_recoverable() {
        assert!(ApiError::network("refused").is_recoverable());
        assert!(ApiError::from_status(503, None).is_recoverable());
        assert!(!ApiError::from_status(401, None).is_recoverable());
        assert!(!ApiError::InvalidId { id: "..".into() }.is_recoverable());
        assert!(ApiError::from_status(401, None).is_unauthorized());
    }
}
