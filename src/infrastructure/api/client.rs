//! Shared HTTP client for the backend API.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response, Url, header};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::dto::{Envelope, ErrorBody};
use crate::domain::entities::AuthToken;
use crate::domain::errors::ApiError;
use crate::domain::ports::BearerTokenProvider;

const USER_AGENT: &str = concat!("cleangrid/", env!("CARGO_PKG_VERSION"));

/// Query string pairs; `None` values are left out.
pub type Query<'a> = &'a [(&'a str, Option<String>)];

/// Path below the API root, one entry per segment. Each entry is
/// percent-encoded on its own, so ids never add or climb segments.
pub type Segments<'a> = &'a [&'a str];

/// Backend API client.
///
/// One instance serves every resource. The bearer token is read from the
/// provider on each request, so logins and logouts take effect immediately.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
    tokens: Arc<dyn BearerTokenProvider>,
}

impl ApiClient {
    /// Creates a client for `base_url`, appending `/api` when missing.
    ///
    /// # Errors
    /// Returns error if `base_url` is not an absolute URL or HTTP client
    /// creation fails.
    pub fn new(
        base_url: &str,
        timeout: Duration,
        tokens: Arc<dyn BearerTokenProvider>,
    ) -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: normalize_base_url(base_url)?,
            tokens,
        })
    }

    fn url(&self, path: Segments<'_>) -> Result<Url, ApiError> {
        // `extend` silently drops dot segments, so refuse them up front
        if let Some(segment) = path.iter().find(|s| matches!(**s, "" | "." | "..")) {
            warn!(id = *segment, "Refusing path segment");
            return Err(ApiError::InvalidId {
                id: (*segment).to_string(),
            });
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ApiError::network("API URL cannot carry a path"))?
            .pop_if_empty()
            .extend(path);
        Ok(url)
    }

    fn request(
        &self,
        method: Method,
        path: Segments<'_>,
        query: Query<'_>,
    ) -> Result<RequestBuilder, ApiError> {
        let token = self.tokens.bearer_token();
        self.request_as(method, path, query, token.as_ref())
    }

    fn request_as(
        &self,
        method: Method,
        path: Segments<'_>,
        query: Query<'_>,
        token: Option<&AuthToken>,
    ) -> Result<RequestBuilder, ApiError> {
        let pairs: Vec<(&str, &str)> = query
            .iter()
            .filter_map(|(key, value)| value.as_deref().map(|value| (*key, value)))
            .collect();

        let mut builder = self.client.request(method, self.url(path)?);
        if !pairs.is_empty() {
            builder = builder.query(&pairs);
        }
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, token.bearer_header());
        }
        Ok(builder)
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let response = builder.send().await.map_err(|e| {
            warn!(error = %e, "Request to backend failed");
            if e.is_timeout() {
                ApiError::network("request timed out")
            } else if e.is_connect() {
                ApiError::network("failed to connect to the server")
            } else {
                ApiError::network(e.to_string())
            }
        })?;

        let status = response.status();
        debug!(status = status.as_u16(), url = %response.url().path(), "Response received");

        if status.is_success() {
            Ok(response)
        } else {
            Err(Self::handle_error_response(response).await)
        }
    }

    async fn handle_error_response(response: Response) -> ApiError {
        let status = response.status().as_u16();
        let detail = match response.bytes().await {
            Ok(body) => serde_json::from_slice::<ErrorBody>(&body)
                .ok()
                .and_then(ErrorBody::into_message),
            Err(e) => {
                debug!(error = %e, "Failed to read error body");
                None
            }
        };
        warn!(status, detail = detail.as_deref().unwrap_or(""), "Backend returned an error");
        ApiError::from_status(status, detail)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::network(format!("failed to read response: {e}")))?;
        serde_json::from_slice(&body).map_err(|e| {
            warn!(error = %e, "Failed to parse response");
            ApiError::decode(format!("failed to parse response: {e}"))
        })
    }

    /// Sends a request and decodes a JSON body.
    ///
    /// # Errors
    /// Returns the mapped API error.
    pub async fn call<B, T>(
        &self,
        method: Method,
        path: Segments<'_>,
        query: Query<'_>,
        body: Option<&B>,
    ) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        debug!(%method, ?path, "Calling backend");
        let mut builder = self.request(method, path, query)?;
        if let Some(body) = body {
            builder = builder.json(body);
        }
        let response = self.send(builder).await?;
        Self::decode(response).await
    }

    /// # Errors
    /// Returns the mapped API error.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: Segments<'_>,
        query: Query<'_>,
    ) -> Result<T, ApiError> {
        self.call::<(), T>(Method::GET, path, query, None).await
    }

    /// GET authorized with `token` instead of the stored session.
    ///
    /// # Errors
    /// Returns the mapped API error.
    pub async fn get_as<T: DeserializeOwned>(
        &self,
        path: Segments<'_>,
        token: &AuthToken,
    ) -> Result<T, ApiError> {
        debug!(?path, "Calling backend with a fresh token");
        let builder = self.request_as(Method::GET, path, &[], Some(token))?;
        let response = self.send(builder).await?;
        Self::decode(response).await
    }

    /// # Errors
    /// Returns the mapped API error.
    pub async fn post<B, T>(&self, path: Segments<'_>, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        self.call(Method::POST, path, &[], Some(body)).await
    }

    /// # Errors
    /// Returns the mapped API error.
    pub async fn put<B, T>(&self, path: Segments<'_>, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        self.call(Method::PUT, path, &[], Some(body)).await
    }

    /// # Errors
    /// Returns the mapped API error.
    pub async fn patch<B, T>(&self, path: Segments<'_>, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        self.call(Method::PATCH, path, &[], Some(body)).await
    }

    /// Sends a DELETE and ignores any response body.
    ///
    /// # Errors
    /// Returns the mapped API error.
    pub async fn delete(&self, path: Segments<'_>) -> Result<(), ApiError> {
        debug!(?path, "Calling backend");
        let builder = self.request(Method::DELETE, path, &[])?;
        self.send(builder).await.map(|_| ())
    }

    /// DELETE that returns a JSON body.
    ///
    /// # Errors
    /// Returns the mapped API error.
    pub async fn delete_json<T: DeserializeOwned>(&self, path: Segments<'_>) -> Result<T, ApiError> {
        self.call::<(), T>(Method::DELETE, path, &[], None).await
    }

    /// Sends a request to an enveloped endpoint and returns its `data`.
    ///
    /// # Errors
    /// Returns `Rejected` with the server message when `success` is false
    /// or `data` is missing.
    pub async fn call_enveloped<B, T>(
        &self,
        method: Method,
        path: Segments<'_>,
        query: Query<'_>,
        body: Option<&B>,
    ) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let envelope: Envelope<T> = self.call(method, path, query, body).await?;
        unwrap_envelope(envelope)
    }

    /// Sends a request to an enveloped endpoint that answers without data.
    /// Returns the confirmation message.
    ///
    /// # Errors
    /// Returns `Rejected` when `success` is false.
    pub async fn call_acknowledged<B>(
        &self,
        method: Method,
        path: Segments<'_>,
        query: Query<'_>,
        body: Option<&B>,
    ) -> Result<Option<String>, ApiError>
    where
        B: Serialize + ?Sized + Sync,
    {
        let envelope: Envelope<serde_json::Value> = self.call(method, path, query, body).await?;
        if envelope.success {
            Ok(envelope.message)
        } else {
            Err(rejected(envelope.message))
        }
    }
}

fn rejected(message: Option<String>) -> ApiError {
    ApiError::Rejected {
        status: 200,
        detail: message.filter(|m| !m.trim().is_empty()),
    }
}

/// Extracts `data` from a successful envelope.
///
/// # Errors
/// Returns `Rejected` when `success` is false or `data` is missing.
pub fn unwrap_envelope<T>(envelope: Envelope<T>) -> Result<T, ApiError> {
    match envelope {
        Envelope {
            success: true,
            data: Some(data),
            ..
        } => Ok(data),
        Envelope { message, .. } => Err(rejected(message)),
    }
}

fn normalize_base_url(raw: &str) -> Result<Url, ApiError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let with_api = if trimmed.ends_with("/api") {
        trimmed.to_string()
    } else {
        format!("{trimmed}/api")
    };
    let url = Url::parse(&with_api)
        .map_err(|e| ApiError::network(format!("invalid API URL {raw:?}: {e}")))?;
    if url.cannot_be_a_base() {
        return Err(ApiError::network(format!("invalid API URL {raw:?}")));
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::NoBearerToken;
    use test_case::test_case;

    #[test_case("http://localhost:8001" => "http://localhost:8001/api"; "bare host")]
    #[test_case("http://localhost:8001/" => "http://localhost:8001/api"; "trailing slash")]
    #[test_case("https://cleangrid.ca/api" => "https://cleangrid.ca/api"; "already has api")]
    #[test_case(" https://cleangrid.ca/api/ " => "https://cleangrid.ca/api"; "padded")]
    fn test_normalize_base_url(raw: &str) -> String {
        normalize_base_url(raw).unwrap().to_string()
    }

    #[test_case("localhost:8001"; "no scheme")]
    #[test_case("not a url"; "garbage")]
    fn test_unusable_base_url(raw: &str) {
        assert!(matches!(normalize_base_url(raw), Err(ApiError::Network { .. })));
    }

    fn client() -> ApiClient {
        ApiClient::new(
            "http://localhost:8001",
            Duration::from_secs(5),
            Arc::new(NoBearerToken),
        )
        .unwrap()
    }

    #[test]
    fn test_client_creation() {
        let client = client();
        assert_eq!(
            client.url(&["services"]).unwrap().as_str(),
            "http://localhost:8001/api/services"
        );
        assert_eq!(
            client.url(&["auth", "me"]).unwrap().as_str(),
            "http://localhost:8001/api/auth/me"
        );
    }

    #[test_case("../admin/stats" => "http://localhost:8001/api/bookings/..%2Fadmin%2Fstats"; "climbing path")]
    #[test_case("a?b#c" => "http://localhost:8001/api/bookings/a%3Fb%23c"; "query and fragment")]
    #[test_case("50%" => "http://localhost:8001/api/bookings/50%25"; "percent sign")]
    #[test_case("b 1" => "http://localhost:8001/api/bookings/b%201"; "space")]
    fn test_id_is_one_segment(id: &str) -> String {
        client().url(&["bookings", id]).unwrap().to_string()
    }

    #[test_case(""; "empty")]
    #[test_case("."; "dot")]
    #[test_case(".."; "dot dot")]
    fn test_dot_segments_refused(id: &str) {
        assert_eq!(
            client().url(&["bookings", id]).unwrap_err(),
            ApiError::InvalidId { id: id.to_string() }
        );
    }

    #[test]
    fn test_unwrap_envelope() {
        let ok: Envelope<u32> = serde_json::from_str(r#"{"success":true,"data":7}"#).unwrap();
        assert_eq!(unwrap_envelope(ok).unwrap(), 7);

        let failed: Envelope<u32> =
            serde_json::from_str(r#"{"success":false,"message":"Franchisee profile not found"}"#)
                .unwrap();
        let err = unwrap_envelope(failed).unwrap_err();
        assert_eq!(err.detail(), Some("Franchisee profile not found"));

        let empty: Envelope<u32> = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(matches!(
            unwrap_envelope(empty),
            Err(ApiError::Rejected { detail: None, .. })
        ));
    }
}
