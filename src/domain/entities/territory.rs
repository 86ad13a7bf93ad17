//! FSA territory entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::serde_utils::{null_as_default, timestamp};

/// Exclusivity of a territory assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProtectionStatus {
    Protected,
    Probation,
    Overflow,
    #[default]
    Unassigned,
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for ProtectionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Protected => "protected",
            Self::Probation => "probation",
            Self::Overflow => "overflow",
            Self::Unassigned => "unassigned",
            Self::Unknown => "unknown",
        };
        f.write_str(label)
    }
}

/// Territory as listed to admins.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Territory {
    pub fsa_code: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub province: Option<String>,
    #[serde(default)]
    pub franchisee_id: Option<String>,
    #[serde(default)]
    pub franchisee_name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub protection_status: ProtectionStatus,
    #[serde(default, with = "timestamp::option")]
    pub assigned_at: Option<DateTime<Utc>>,
}

impl Territory {
    #[must_use]
    pub const fn is_assigned(&self) -> bool {
        self.franchisee_id.is_some()
    }
}

/// Payload for `PATCH /admin/territories/{fsa}/assign`.
///
/// A missing franchisee id releases the territory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TerritoryAssignment {
    pub franchisee_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Legacy bulk payload for `POST /admin/assign-fsa`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FsaAssignment {
    pub franchisee_id: String,
    pub fsa_codes: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_territory() {
        let json = r#"{"fsa_code":"M5V","city":"Toronto","province":"ON",
            "franchisee_id":"f1","franchisee_name":"Clean Stars",
            "protection_status":"protected","assigned_at":"2024-03-01T00:00:00"}"#;
        let territory: Territory = serde_json::from_str(json).unwrap();

        assert!(territory.is_assigned());
        assert_eq!(territory.protection_status, ProtectionStatus::Protected);
    }

    #[test]
    fn test_release_payload_sends_null_franchisee() {
        let payload = TerritoryAssignment::default();
        assert_eq!(
            serde_json::to_string(&payload).unwrap(),
            r#"{"franchisee_id":null}"#
        );
    }

    #[test]
    fn test_legacy_assignment_payload() {
        let payload = FsaAssignment {
            franchisee_id: "f1".into(),
            fsa_codes: vec!["M5V".into()],
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["franchiseeId"], "f1");
        assert_eq!(value["fsaCodes"][0], "M5V");
    }
}
