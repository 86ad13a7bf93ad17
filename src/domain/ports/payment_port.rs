//! Payment port.

use async_trait::async_trait;

use crate::domain::entities::{
    NewPaymentIntent, PaymentCancellation, PaymentCapture, PaymentConfig, PaymentIntent,
    PaymentIntentStatus,
};
use crate::domain::errors::ApiError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PaymentPort: Send + Sync {
    async fn config(&self) -> Result<PaymentConfig, ApiError>;

    /// Places a hold for a booking.
    async fn create_intent(&self, intent: &NewPaymentIntent) -> Result<PaymentIntent, ApiError>;

    async fn intent_status(&self, id: &str) -> Result<PaymentIntentStatus, ApiError>;

    /// Charges a held payment once the job is done.
    async fn capture(&self, id: &str) -> Result<PaymentCapture, ApiError>;

    /// Voids a held payment, or refunds one already captured.
    async fn cancel(&self, id: &str) -> Result<PaymentCancellation, ApiError>;
}
