//! Form validation errors.

use thiserror::Error;

/// One failing form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    #[must_use]
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Every failing field of a form step.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", join(.errors))]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

fn join(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationError {
    /// Wraps collected field errors. `None` when nothing failed.
    #[must_use]
    pub fn from_errors(errors: Vec<FieldError>) -> Option<Self> {
        (!errors.is_empty()).then_some(Self { errors })
    }

    #[must_use]
    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|err| err.field == field)
    }

    #[must_use]
    pub fn fields(&self) -> Vec<&'static str> {
        self.errors.iter().map(|err| err.field).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_errors_are_none() {
        assert!(ValidationError::from_errors(Vec::new()).is_none());
    }

    #[test]
    fn test_display_joins_fields() {
        let err = ValidationError::from_errors(vec![
            FieldError::new("legalName", "is required"),
            FieldError::new("operatingName", "is required"),
        ])
        .unwrap();

        assert_eq!(
            err.to_string(),
            "legalName: is required; operatingName: is required"
        );
        assert!(err.has_field("operatingName"));
        assert!(!err.has_field("email"));
    }
}
