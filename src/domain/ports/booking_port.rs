//! Bookings and reviews port.

use async_trait::async_trait;

use crate::domain::entities::{Booking, BookingStatus, NewBooking, NewReview, Review};
use crate::domain::errors::ApiError;

/// Port for customer bookings and their reviews.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingPort: Send + Sync {
    async fn create_booking(&self, booking: &NewBooking) -> Result<Booking, ApiError>;

    /// Bookings visible to the signed-in user.
    async fn list_bookings(&self) -> Result<Vec<Booking>, ApiError>;

    async fn get_booking(&self, id: &str) -> Result<Booking, ApiError>;

    async fn update_status(&self, id: &str, status: BookingStatus) -> Result<Booking, ApiError>;

    /// Cancels a booking. Returns the server's confirmation message.
    async fn cancel_booking(&self, id: &str) -> Result<Option<String>, ApiError>;

    async fn create_review(&self, review: &NewReview) -> Result<Review, ApiError>;

    async fn list_reviews(&self) -> Result<Vec<Review>, ApiError>;
}
