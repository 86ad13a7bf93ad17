//! Saved customer property (service address).

use serde::{Deserialize, Serialize};

/// A service address saved on the customer's account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub label: String,
    pub street: String,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub province: String,
    pub postal_code: String,
    #[serde(default)]
    pub fsa_code: Option<String>,
    #[serde(default)]
    pub square_feet: Option<u32>,
    #[serde(default)]
    pub bedrooms: Option<u8>,
    #[serde(default)]
    pub bathrooms: Option<u8>,
    #[serde(default)]
    pub buzz_code: Option<String>,
    #[serde(default)]
    pub access_notes: Option<String>,
}

impl Property {
    /// Single-line address for lists.
    #[must_use]
    pub fn one_line_address(&self) -> String {
        let street = match &self.unit {
            Some(unit) if !unit.is_empty() => format!("{unit}-{}", self.street),
            _ => self.street.clone(),
        };

        [street.as_str(), self.city.as_str(), self.province.as_str(), self.postal_code.as_str()]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Create/update payload for a property.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyInput {
    pub label: String,
    pub street: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    pub city: String,
    pub province: String,
    pub postal_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub square_feet: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bathrooms: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buzz_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_property(unit: Option<&str>) -> Property {
        Property {
            id: "p1".into(),
            label: "Home".into(),
            street: "22 Elm Ave".into(),
            unit: unit.map(str::to_string),
            city: "Toronto".into(),
            province: "ON".into(),
            postal_code: "M4W 1N4".into(),
            fsa_code: None,
            square_feet: Some(1100),
            bedrooms: Some(2),
            bathrooms: Some(1),
            buzz_code: None,
            access_notes: None,
        }
    }

    #[test]
    fn test_one_line_address() {
        assert_eq!(
            make_property(None).one_line_address(),
            "22 Elm Ave, Toronto, ON, M4W 1N4"
        );
        assert_eq!(
            make_property(Some("4")).one_line_address(),
            "4-22 Elm Ave, Toronto, ON, M4W 1N4"
        );
    }

    #[test]
    fn test_input_skips_empty_optionals() {
        let input = PropertyInput {
            label: "Office".into(),
            street: "1 Bay St".into(),
            city: "Toronto".into(),
            province: "ON".into(),
            postal_code: "M5J 2R8".into(),
            ..PropertyInput::default()
        };

        let value = serde_json::to_value(&input).unwrap();

        assert_eq!(value["postalCode"], "M5J 2R8");
        assert!(value.get("unit").is_none());
        assert!(value.get("squareFeet").is_none());
    }
}
