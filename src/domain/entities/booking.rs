//! Booking and review entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Frequency, ServiceType};
use crate::domain::serde_utils::timestamp;

/// Booking lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Assigned,
    InProgress,
    Completed,
    Cancelled,
    #[serde(other)]
    #[value(skip)]
    Unknown,
}

impl BookingStatus {
    /// Returns whether the booking can still be cancelled.
    #[must_use]
    pub const fn is_cancellable(self) -> bool {
        !matches!(self, Self::Completed | Self::Cancelled)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Assigned => "assigned",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Booking as returned by the API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub customer_id: String,
    #[serde(default)]
    pub franchisee_id: Option<String>,
    pub service_id: String,
    #[serde(default)]
    pub service_name: Option<String>,
    #[serde(default)]
    pub service_type: ServiceType,
    pub address: String,
    pub postal_code: String,
    #[serde(default)]
    pub fsa_code: String,
    #[serde(default)]
    pub square_feet: Option<u32>,
    #[serde(with = "timestamp")]
    pub scheduled_date: DateTime<Utc>,
    #[serde(default)]
    pub is_recurring: bool,
    #[serde(default)]
    pub recurring_frequency: Option<Frequency>,
    pub total_price: f64,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub status: BookingStatus,
    #[serde(default)]
    pub escrow_status: Option<String>,
    #[serde(default, with = "timestamp::option")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "timestamp::option")]
    pub completed_at: Option<DateTime<Utc>>,
}

/// Customer payload for a new booking. The price shown to the customer
/// comes from a previously fetched quote.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBooking {
    pub service_id: String,
    pub service_type: ServiceType,
    pub address: String,
    pub postal_code: String,
    pub square_feet: u32,
    #[serde(with = "timestamp")]
    pub scheduled_date: DateTime<Utc>,
    pub is_recurring: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurring_frequency: Option<Frequency>,
    pub total_price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Status change payload.
#[derive(Debug, Clone, Serialize)]
pub struct BookingStatusUpdate {
    pub status: BookingStatus,
}

/// Customer review of a completed booking.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub booking_id: String,
    pub customer_id: String,
    pub rating: u8,
    #[serde(default)]
    pub comment: String,
    #[serde(default, with = "timestamp::option")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Review payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReview {
    pub booking_id: String,
    pub rating: u8,
    pub comment: String,
}

impl NewReview {
    /// Lowest accepted rating.
    pub const MIN_RATING: u8 = 1;
    /// Highest accepted rating.
    pub const MAX_RATING: u8 = 5;

    /// Creates a review, or `None` when the rating is out of range.
    #[must_use]
    pub fn new(booking_id: impl Into<String>, rating: u8, comment: impl Into<String>) -> Option<Self> {
        (Self::MIN_RATING..=Self::MAX_RATING)
            .contains(&rating)
            .then(|| Self {
                booking_id: booking_id.into(),
                rating,
                comment: comment.into(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_booking() {
        let json = r#"{
            "_id": "b1",
            "customerId": "u1",
            "franchiseeId": null,
            "serviceId": "s1",
            "serviceType": "residential",
            "address": "1 King St W",
            "postalCode": "M5H 1A1",
            "squareFeet": 900,
            "scheduledDate": "2024-06-01T09:00:00",
            "isRecurring": true,
            "recurringFrequency": "monthly",
            "totalPrice": 180.5,
            "notes": null,
            "fsaCode": "M5H",
            "status": "in-progress",
            "escrowStatus": "held",
            "createdAt": "2024-05-20T10:00:00.5"
        }"#;

        let booking: Booking = serde_json::from_str(json).unwrap();

        assert_eq!(booking.status, BookingStatus::InProgress);
        assert_eq!(booking.recurring_frequency, Some(Frequency::Monthly));
        assert_eq!(booking.fsa_code, "M5H");
        assert!(booking.franchisee_id.is_none());
        assert!(booking.status.is_cancellable());
    }

    #[test]
    fn test_unknown_status_tolerated() {
        let status: BookingStatus = serde_json::from_str("\"on-hold\"").unwrap();
        assert_eq!(status, BookingStatus::Unknown);
    }

    #[test]
    fn test_finished_bookings_not_cancellable() {
        assert!(!BookingStatus::Completed.is_cancellable());
        assert!(!BookingStatus::Cancelled.is_cancellable());
    }

    #[test]
    fn test_new_booking_payload() {
        let booking = NewBooking {
            service_id: "s1".into(),
            service_type: ServiceType::Commercial,
            address: "100 Queen St".into(),
            postal_code: "M5H 2N2".into(),
            square_feet: 2000,
            scheduled_date: Utc.with_ymd_and_hms(2024, 7, 1, 13, 0, 0).unwrap(),
            is_recurring: false,
            recurring_frequency: None,
            total_price: 450.0,
            notes: None,
        };

        let value = serde_json::to_value(&booking).unwrap();

        assert_eq!(value["serviceType"], "commercial");
        assert_eq!(value["scheduledDate"], "2024-07-01T13:00:00+00:00");
        assert!(value.get("notes").is_none());
        assert!(value.get("recurringFrequency").is_none());
    }

    #[test]
    fn test_status_update_payload() {
        let update = BookingStatusUpdate {
            status: BookingStatus::InProgress,
        };
        assert_eq!(
            serde_json::to_string(&update).unwrap(),
            r#"{"status":"in-progress"}"#
        );
    }

    #[test]
    fn test_review_rating_bounds() {
        assert!(NewReview::new("b1", 0, "meh").is_none());
        assert!(NewReview::new("b1", 6, "wow").is_none());
        assert_eq!(NewReview::new("b1", 5, "great").unwrap().rating, 5);
    }
}
