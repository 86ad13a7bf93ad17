//! Wire shapes that only exist at the HTTP boundary.

use serde::Deserialize;
use serde_json::Value;

use crate::domain::entities::{ApplicationSummary, Job, Settlement, Territory, User};

/// Error body of a non-2xx response.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<Detail>,
    #[serde(default)]
    pub message: Option<String>,
}

/// FastAPI `detail`: a message, or a list of validation failures.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Detail {
    Message(String),
    Validation(Vec<ValidationItem>),
    Other(Value),
}

#[derive(Debug, Deserialize)]
pub struct ValidationItem {
    #[serde(default)]
    pub msg: Option<String>,
}

impl ErrorBody {
    /// User-facing explanation, if the body carried one.
    pub fn into_message(self) -> Option<String> {
        let from_detail = match self.detail {
            Some(Detail::Message(message)) => Some(message),
            Some(Detail::Validation(items)) => {
                let joined = items
                    .into_iter()
                    .filter_map(|item| item.msg)
                    .collect::<Vec<_>>()
                    .join("; ");
                (!joined.is_empty()).then_some(joined)
            }
            Some(Detail::Other(_)) | None => None,
        };
        from_detail
            .or(self.message)
            .filter(|message| !message.trim().is_empty())
    }
}

/// `{success, data, message}` wrapper of the newer endpoints.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Body of `{message}` confirmations.
#[derive(Debug, Deserialize)]
pub struct MessageBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// `POST /workers/accept-invite` response. It carries a token but no user.
#[derive(Debug, Deserialize)]
pub struct InviteAcceptance {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// `POST /auth/login` and `/auth/signup` response.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    pub user: User,
}

#[derive(Debug, Deserialize)]
pub struct ApplicationsData {
    #[serde(default)]
    pub applications: Vec<ApplicationSummary>,
}

#[derive(Debug, Deserialize)]
pub struct TerritoriesData {
    #[serde(default)]
    pub territories: Vec<Territory>,
}

#[derive(Debug, Deserialize)]
pub struct JobsData {
    #[serde(default)]
    pub jobs: Vec<Job>,
}

#[derive(Debug, Deserialize)]
pub struct SettlementsData {
    #[serde(default)]
    pub settlements: Vec<Settlement>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message_of(json: &str) -> Option<String> {
        serde_json::from_str::<ErrorBody>(json).unwrap().into_message()
    }

    #[test]
    fn test_string_detail() {
        assert_eq!(
            message_of(r#"{"detail":"Email already registered"}"#).as_deref(),
            Some("Email already registered")
        );
    }

    #[test]
    fn test_validation_detail_joined() {
        let json = r#"{"detail":[
            {"loc":["body","email"],"msg":"value is not a valid email address","type":"value_error"},
            {"loc":["body","password"],"msg":"field required","type":"missing"}
        ]}"#;
        assert_eq!(
            message_of(json).as_deref(),
            Some("value is not a valid email address; field required")
        );
    }

    #[test]
    fn test_message_fallback_and_empty() {
        assert_eq!(
            message_of(r#"{"success":false,"message":"Franchisee not found"}"#).as_deref(),
            Some("Franchisee not found")
        );
        assert_eq!(message_of(r#"{"detail":{"code":7}}"#), None);
        assert_eq!(message_of(r#"{"detail":""}"#), None);
        assert_eq!(message_of("{}"), None);
    }

    #[test]
    fn test_envelope_without_data() {
        let envelope: Envelope<JobsData> =
            serde_json::from_str(r#"{"success":true,"message":"Job reassigned successfully"}"#)
                .unwrap();
        assert!(envelope.success);
        assert!(envelope.data.is_none());
    }
}
