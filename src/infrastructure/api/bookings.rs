//! Booking and review endpoints.

use async_trait::async_trait;

use super::ApiClient;
use super::dto::MessageBody;
use crate::domain::entities::{
    Booking, BookingStatus, BookingStatusUpdate, NewBooking, NewReview, Review,
};
use crate::domain::errors::ApiError;
use crate::domain::ports::BookingPort;

#[async_trait]
impl BookingPort for ApiClient {
    async fn create_booking(&self, booking: &NewBooking) -> Result<Booking, ApiError> {
        self.post(&["bookings"], booking).await
    }

    async fn list_bookings(&self) -> Result<Vec<Booking>, ApiError> {
        self.get(&["bookings"], &[]).await
    }

    async fn get_booking(&self, id: &str) -> Result<Booking, ApiError> {
        self.get(&["bookings", id], &[]).await
    }

    async fn update_status(&self, id: &str, status: BookingStatus) -> Result<Booking, ApiError> {
        self.patch(&["bookings", id, "status"], &BookingStatusUpdate { status })
            .await
    }

    async fn cancel_booking(&self, id: &str) -> Result<Option<String>, ApiError> {
        let body: MessageBody = self.delete_json(&["bookings", id]).await?;
        Ok(body.message)
    }

    async fn create_review(&self, review: &NewReview) -> Result<Review, ApiError> {
        self.post(&["reviews"], review).await
    }

    async fn list_reviews(&self) -> Result<Vec<Review>, ApiError> {
        self.get(&["reviews"], &[]).await
    }
}
