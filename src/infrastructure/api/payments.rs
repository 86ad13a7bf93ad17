//! Payment endpoints.

use async_trait::async_trait;
use reqwest::Method;

use super::ApiClient;
use crate::domain::entities::{
    NewPaymentIntent, PaymentCancellation, PaymentCapture, PaymentConfig, PaymentIntent,
    PaymentIntentStatus,
};
use crate::domain::errors::ApiError;
use crate::domain::ports::PaymentPort;

const NO_BODY: Option<&()> = None;

#[async_trait]
impl PaymentPort for ApiClient {
    async fn config(&self) -> Result<PaymentConfig, ApiError> {
        self.get(&["payments", "config"], &[]).await
    }

    async fn create_intent(&self, intent: &NewPaymentIntent) -> Result<PaymentIntent, ApiError> {
        self.post(&["payments", "create-payment-intent"], intent).await
    }

    async fn intent_status(&self, id: &str) -> Result<PaymentIntentStatus, ApiError> {
        self.get(&["payments", "payment-intent", id], &[]).await
    }

    async fn capture(&self, id: &str) -> Result<PaymentCapture, ApiError> {
        self.call(Method::POST, &["payments", "capture", id], &[], NO_BODY)
            .await
    }

    async fn cancel(&self, id: &str) -> Result<PaymentCancellation, ApiError> {
        self.call(Method::POST, &["payments", "cancel", id], &[], NO_BODY)
            .await
    }
}
