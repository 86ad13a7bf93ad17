//! Payment intent entities. Card collection itself happens in the
//! payment provider's hosted UI.

use serde::{Deserialize, Serialize};

/// `GET /payments/config` payload.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentConfig {
    #[serde(default)]
    pub publishable_key: Option<String>,
}

/// Request for a held (manual capture) payment. Amount is in cents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewPaymentIntent {
    pub amount: u64,
    pub booking_id: String,
    pub customer_email: String,
    pub customer_name: String,
    pub service_name: String,
}

impl NewPaymentIntent {
    /// Converts a dollar amount into whole cents, rounding half away from zero.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn cents_from_dollars(dollars: f64) -> u64 {
        if dollars.is_finite() && dollars > 0.0 {
            (dollars * 100.0).round() as u64
        } else {
            0
        }
    }
}

/// Created payment intent.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntent {
    pub client_secret: String,
    pub payment_intent_id: String,
    pub amount: u64,
    pub status: String,
}

impl std::fmt::Debug for PaymentIntent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaymentIntent")
            .field("client_secret", &"********")
            .field("payment_intent_id", &self.payment_intent_id)
            .field("amount", &self.amount)
            .field("status", &self.status)
            .finish()
    }
}

/// Status lookup result from `GET /payments/payment-intent/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PaymentIntentStatus {
    pub id: String,
    pub amount: u64,
    #[serde(default)]
    pub currency: Option<String>,
    pub status: String,
    /// Unix seconds.
    #[serde(default)]
    pub created: Option<i64>,
}

/// Result of `POST /payments/capture/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentCapture {
    pub payment_intent_id: String,
    pub status: String,
    /// Cents actually charged.
    #[serde(default)]
    pub amount_captured: u64,
}

/// Result of `POST /payments/cancel/{id}`. A held payment is voided; one
/// that was already captured is refunded instead.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum PaymentCancellation {
    Cancelled {
        #[serde(rename = "paymentIntentId")]
        payment_intent_id: String,
        status: String,
    },
    Refunded {
        #[serde(rename = "refundId")]
        refund_id: String,
        #[serde(default)]
        amount: u64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cents_from_dollars() {
        assert_eq!(NewPaymentIntent::cents_from_dollars(129.99), 12_999);
        assert_eq!(NewPaymentIntent::cents_from_dollars(0.005), 1);
        assert_eq!(NewPaymentIntent::cents_from_dollars(-3.0), 0);
        assert_eq!(NewPaymentIntent::cents_from_dollars(f64::NAN), 0);
    }

    #[test]
    fn test_debug_hides_client_secret() {
        let intent: PaymentIntent = serde_json::from_str(
            r#"{"clientSecret":"pi_1_secret_abc","paymentIntentId":"pi_1","amount":12999,
                "status":"requires_payment_method"}"#,
        )
        .unwrap();

        let debug = format!("{intent:?}");
        assert!(!debug.contains("secret_abc"));
        assert!(debug.contains("pi_1"));
    }

    #[test]
    fn test_parse_cancellation_outcomes() {
        let voided: PaymentCancellation = serde_json::from_str(
            r#"{"success": true, "action": "cancelled", "paymentIntentId": "pi_1",
                "status": "canceled"}"#,
        )
        .unwrap();
        assert!(matches!(voided, PaymentCancellation::Cancelled { ref status, .. } if status == "canceled"));

        let refunded: PaymentCancellation = serde_json::from_str(
            r#"{"success": true, "action": "refunded", "refundId": "re_1", "amount": 18050}"#,
        )
        .unwrap();
        assert_eq!(
            refunded,
            PaymentCancellation::Refunded {
                refund_id: "re_1".into(),
                amount: 18_050
            }
        );
    }

    #[test]
    fn test_parse_config_without_key() {
        let config: PaymentConfig = serde_json::from_str(r#"{"publishableKey":null}"#).unwrap();
        assert!(config.publishable_key.is_none());
    }
}
