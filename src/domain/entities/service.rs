//! Cleaning service catalog entries and quotes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::serde_utils::timestamp;

/// Whether a job is priced as a home or a business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ServiceType {
    #[default]
    Residential,
    Commercial,
}

impl std::fmt::Display for ServiceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Residential => write!(f, "residential"),
            Self::Commercial => write!(f, "commercial"),
        }
    }
}

/// Recurring visit cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Weekly,
    Biweekly,
    Monthly,
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Weekly => write!(f, "weekly"),
            Self::Biweekly => write!(f, "biweekly"),
            Self::Monthly => write!(f, "monthly"),
        }
    }
}

/// Catalog service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub service_type: ServiceType,
    #[serde(default)]
    pub base_price_residential: f64,
    #[serde(default)]
    pub base_price_commercial: f64,
    #[serde(default)]
    pub price_per_sq_ft: f64,
    #[serde(default)]
    pub description: String,
    /// Minutes.
    #[serde(default)]
    pub estimated_duration: u32,
    #[serde(default, with = "timestamp::option")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Service {
    /// Returns the listed base price for the given pricing type.
    #[must_use]
    pub const fn base_price(&self, service_type: ServiceType) -> f64 {
        match service_type {
            ServiceType::Residential => self.base_price_residential,
            ServiceType::Commercial => self.base_price_commercial,
        }
    }
}

/// Admin payload for a new catalog service.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewService {
    pub name: String,
    pub category: String,
    pub service_type: ServiceType,
    pub base_price_residential: f64,
    pub base_price_commercial: f64,
    pub price_per_sq_ft: f64,
    pub description: String,
    pub estimated_duration: u32,
}

/// Quote request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    pub service_id: String,
    pub service_type: ServiceType,
    pub square_feet: u32,
    pub is_recurring: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<Frequency>,
}

impl QuoteRequest {
    #[must_use]
    pub fn one_time(service_id: impl Into<String>, service_type: ServiceType, square_feet: u32) -> Self {
        Self {
            service_id: service_id.into(),
            service_type,
            square_feet,
            is_recurring: false,
            frequency: None,
        }
    }

    #[must_use]
    pub const fn recurring(mut self, frequency: Frequency) -> Self {
        self.is_recurring = true;
        self.frequency = Some(frequency);
        self
    }
}

/// Server-computed quote. Displayed as returned.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub service_id: String,
    pub service_name: String,
    pub base_price: f64,
    pub sqft_price: f64,
    pub total_price: f64,
    #[serde(default)]
    pub discount: f64,
    pub final_price: f64,
    #[serde(default)]
    pub is_recurring: bool,
    #[serde(default)]
    pub frequency: Option<Frequency>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_service() {
        let json = r#"{
            "_id": "s1",
            "name": "Deep Clean",
            "category": "deep-clean",
            "serviceType": "residential",
            "basePriceResidential": 120.0,
            "basePriceCommercial": 200.0,
            "pricePerSqFt": 0.1,
            "description": "Top to bottom",
            "estimatedDuration": 240,
            "createdAt": "2024-01-01T00:00:00"
        }"#;

        let service: Service = serde_json::from_str(json).unwrap();

        assert_eq!(service.id, "s1");
        assert_eq!(service.estimated_duration, 240);
        assert!((service.base_price(ServiceType::Commercial) - 200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_quote_request_payload() {
        let request = QuoteRequest::one_time("s1", ServiceType::Commercial, 1500)
            .recurring(Frequency::Biweekly);
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["serviceId"], "s1");
        assert_eq!(value["serviceType"], "commercial");
        assert_eq!(value["squareFeet"], 1500);
        assert_eq!(value["isRecurring"], true);
        assert_eq!(value["frequency"], "biweekly");
    }

    #[test]
    fn test_one_time_quote_omits_frequency() {
        let request = QuoteRequest::one_time("s1", ServiceType::Residential, 900);
        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("frequency").is_none());
    }

    #[test]
    fn test_parse_quote() {
        let json = r#"{"serviceId":"s1","serviceName":"Deep Clean","basePrice":120.0,
            "sqftPrice":150.0,"totalPrice":270.0,"discount":40.5,"finalPrice":229.5,
            "isRecurring":true,"frequency":"weekly"}"#;
        let quote: Quote = serde_json::from_str(json).unwrap();

        assert_eq!(quote.frequency, Some(Frequency::Weekly));
        assert!((quote.final_price - 229.5).abs() < f64::EPSILON);
    }
}
