//! Bearer token source for outgoing requests.

use crate::domain::entities::AuthToken;

/// Supplies the token to attach to API requests.
pub trait BearerTokenProvider: Send + Sync {
    fn bearer_token(&self) -> Option<AuthToken>;
}

/// Provider for unauthenticated clients.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoBearerToken;

impl BearerTokenProvider for NoBearerToken {
    fn bearer_token(&self) -> Option<AuthToken> {
        None
    }
}
