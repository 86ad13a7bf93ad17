//! Settlement statements. All amounts are computed server-side.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::serde_utils::{null_as_default, timestamp};

/// Payout progress of a settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum PayoutStatus {
    #[default]
    Pending,
    Processing,
    Paid,
    Failed,
    #[serde(other)]
    #[value(skip)]
    Unknown,
}

impl PayoutStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Paid => "paid",
            Self::Failed => "failed",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for PayoutStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Periodic payout statement for a franchisee.
///
/// The franchisee and admin listings return overlapping field sets, so
/// fields only one of them carries are optional.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Settlement {
    pub id: String,
    #[serde(default)]
    pub franchisee_id: Option<String>,
    #[serde(default)]
    pub franchisee_name: Option<String>,
    #[serde(default, with = "timestamp::option")]
    pub period_start: Option<DateTime<Utc>>,
    #[serde(default, with = "timestamp::option")]
    pub period_end: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub job_count: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub gross_revenue: f64,
    #[serde(default)]
    pub platform_fees: Option<f64>,
    #[serde(default)]
    pub adjustments_total: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub net_payout: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub payout_status: PayoutStatus,
    #[serde(default, with = "timestamp::option")]
    pub paid_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_franchisee_settlement() {
        let json = r#"{
            "id": "st1",
            "period_start": "2024-05-01T00:00:00",
            "period_end": "2024-05-07T23:59:59",
            "job_count": 12,
            "gross_revenue": 1800.0,
            "platform_fees": 270.0,
            "adjustments_total": -25.0,
            "net_payout": 1352.5,
            "payout_status": "paid",
            "paid_at": "2024-05-10T12:00:00"
        }"#;

        let settlement: Settlement = serde_json::from_str(json).unwrap();

        assert_eq!(settlement.payout_status, PayoutStatus::Paid);
        assert_eq!(settlement.job_count, 12);
        assert_eq!(settlement.adjustments_total, Some(-25.0));
        assert!(settlement.franchisee_name.is_none());
    }

    #[test]
    fn test_parse_admin_settlement_with_nulls() {
        let json = r#"{"id":"st2","franchisee_id":"f1","franchisee_name":null,
            "job_count":null,"gross_revenue":null,"net_payout":null,"payout_status":null}"#;
        let settlement: Settlement = serde_json::from_str(json).unwrap();

        assert_eq!(settlement.job_count, 0);
        assert_eq!(settlement.payout_status, PayoutStatus::Pending);
        assert!(settlement.platform_fees.is_none());
    }
}
