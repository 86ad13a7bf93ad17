//! Backend API client and its resource adapters.

mod admin;
mod auth;
mod bookings;
mod catalog;
mod client;
mod dto;
mod franchisee;
mod payments;
mod properties;
mod workers;

pub use client::{ApiClient, Query, Segments, unwrap_envelope};
pub use dto::Envelope;
