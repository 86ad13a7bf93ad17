//! Authentication endpoints.

use async_trait::async_trait;
use tracing::{debug, warn};

use super::ApiClient;
use super::dto::{InviteAcceptance, TokenResponse};
use crate::domain::entities::{AcceptInvite, AuthToken, Credentials, Registration, Session, User};
use crate::domain::errors::ApiError;
use crate::domain::ports::AuthPort;

fn issued_token(access_token: String, token_type: Option<&str>) -> Result<AuthToken, ApiError> {
    if let Some(kind) = token_type
        && !kind.eq_ignore_ascii_case("bearer")
    {
        warn!(token_type = kind, "Unexpected token type");
    }
    AuthToken::new(access_token).ok_or_else(|| {
        warn!("Server issued a malformed token");
        ApiError::decode("server issued a malformed access token")
    })
}

fn into_session(response: TokenResponse) -> Result<Session, ApiError> {
    let token = issued_token(response.access_token, response.token_type.as_deref())?;
    Ok(Session::new(token, response.user))
}

#[async_trait]
impl AuthPort for ApiClient {
    async fn login(&self, credentials: &Credentials) -> Result<Session, ApiError> {
        debug!("Requesting access token");
        let response: TokenResponse = self.post(&["auth", "login"], credentials).await?;
        into_session(response)
    }

    async fn signup(&self, registration: &Registration) -> Result<Session, ApiError> {
        debug!("Creating account");
        let response: TokenResponse = self.post(&["auth", "signup"], registration).await?;
        into_session(response)
    }

    async fn accept_invite(&self, accept: &AcceptInvite) -> Result<Session, ApiError> {
        debug!("Accepting worker invitation");
        let response: InviteAcceptance = self.post(&["workers", "accept-invite"], accept).await?;
        let token = issued_token(response.access_token, response.token_type.as_deref())?;
        let user: User = self.get_as(&["auth", "me"], &token).await?;
        Ok(Session::new(token, user))
    }

    async fn me(&self) -> Result<User, ApiError> {
        self.get(&["auth", "me"], &[]).await
    }
}
