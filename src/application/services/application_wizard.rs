//! Multi-step franchisee application form.
//!
//! The wizard walks four steps in order. Moving forward requires the
//! current step to validate; moving back never does. Submitting re-checks
//! every step and produces the request payload.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::entities::{FranchiseeApplication, LegalType};
use crate::domain::errors::{FieldError, ValidationError};
use crate::domain::postal::{Fsa, PostalCode};

static BUSINESS_NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{9}([A-Z]{2}[0-9]{4})?$").expect("Invalid business number regex")
});

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("Invalid email regex")
});

/// Province and territory codes.
pub const PROVINCES: [&str; 13] = [
    "AB", "BC", "MB", "NB", "NL", "NS", "NT", "NU", "ON", "PE", "QC", "SK", "YT",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WizardStep {
    Business,
    Contact,
    Territory,
    Agreements,
}

impl WizardStep {
    pub const ALL: [Self; 4] = [
        Self::Business,
        Self::Contact,
        Self::Territory,
        Self::Agreements,
    ];

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Business => "Business information",
            Self::Contact => "Contact details",
            Self::Territory => "Territory preferences",
            Self::Agreements => "Agreements",
        }
    }

    /// One-based position, for "step 2 of 4" displays.
    #[must_use]
    pub const fn number(self) -> usize {
        match self {
            Self::Business => 1,
            Self::Contact => 2,
            Self::Territory => 3,
            Self::Agreements => 4,
        }
    }

    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Business => Some(Self::Contact),
            Self::Contact => Some(Self::Territory),
            Self::Territory => Some(Self::Agreements),
            Self::Agreements => None,
        }
    }

    #[must_use]
    pub const fn previous(self) -> Option<Self> {
        match self {
            Self::Business => None,
            Self::Contact => Some(Self::Business),
            Self::Territory => Some(Self::Contact),
            Self::Agreements => Some(Self::Territory),
        }
    }
}

/// Raw form values as the user typed them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationDraft {
    pub legal_name: String,
    pub legal_type: String,
    pub operating_name: String,
    pub business_number: String,
    pub tax_number: String,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub province: String,
    pub postal_code: String,
    preferred_fsas: Vec<Fsa>,
    pub vehicle_access: bool,
    pub experience: String,
    pub agrees_to_hr_bank: bool,
    pub agrees_to_insurance_minimums: bool,
}

impl ApplicationDraft {
    #[must_use]
    pub fn preferred_fsas(&self) -> &[Fsa] {
        &self.preferred_fsas
    }

    /// Adds a preferred FSA. Returns false when it was already listed.
    ///
    /// # Errors
    /// Returns a field error when `raw` is not a valid FSA.
    pub fn add_fsa(&mut self, raw: &str) -> Result<bool, FieldError> {
        let fsa = Fsa::parse(raw).ok_or_else(|| {
            FieldError::new("preferredFSAs", format!("'{}' is not a valid FSA", raw.trim()))
        })?;
        if self.preferred_fsas.contains(&fsa) {
            return Ok(false);
        }
        self.preferred_fsas.push(fsa);
        Ok(true)
    }

    /// Adds every comma or space separated FSA in `raw`, collecting failures.
    pub fn add_fsas(&mut self, raw: &str) -> Vec<FieldError> {
        raw.split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .filter_map(|part| self.add_fsa(part).err())
            .collect()
    }

    pub fn remove_fsa(&mut self, raw: &str) -> bool {
        let before = self.preferred_fsas.len();
        self.preferred_fsas
            .retain(|fsa| !fsa.as_str().eq_ignore_ascii_case(raw.trim()));
        self.preferred_fsas.len() != before
    }

    fn validate_business(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        require(&mut errors, "legalName", &self.legal_name);
        require(&mut errors, "operatingName", &self.operating_name);
        if LegalType::parse(&self.legal_type).is_none() {
            errors.push(FieldError::new(
                "legalType",
                "must be individual or corporation",
            ));
        }
        if let Some(number) = non_empty(&self.business_number)
            && !BUSINESS_NUMBER_RE.is_match(&normalize_business_number(number))
        {
            errors.push(FieldError::new(
                "businessNumber",
                "must be 9 digits, optionally followed by a program account such as RC0001",
            ));
        }
        errors
    }

    fn validate_contact(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        require(&mut errors, "contactName", &self.contact_name);
        if !EMAIL_RE.is_match(self.email.trim()) {
            errors.push(FieldError::new("email", "must be a valid email address"));
        }
        require(&mut errors, "phone", &self.phone);
        require(&mut errors, "address", &self.address);
        require(&mut errors, "city", &self.city);
        if normalize_province(&self.province).is_none() {
            errors.push(FieldError::new(
                "province",
                "must be a Canadian province or territory code",
            ));
        }
        if PostalCode::parse(&self.postal_code).is_none() {
            errors.push(FieldError::new("postalCode", "must look like A1A 1A1"));
        }
        errors
    }

    fn validate_territory(&self) -> Vec<FieldError> {
        if self.preferred_fsas.is_empty() {
            vec![FieldError::new("preferredFSAs", "select at least one FSA")]
        } else {
            Vec::new()
        }
    }

    fn validate_agreements(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if !self.agrees_to_hr_bank {
            errors.push(FieldError::new(
                "agreesToHRBank",
                "scheduling must go through HR Bank",
            ));
        }
        if !self.agrees_to_insurance_minimums {
            errors.push(FieldError::new(
                "agreesToInsuranceMinimums",
                "insurance minimums must be accepted",
            ));
        }
        errors
    }

    /// Checks one step and reports every failing field.
    ///
    /// # Errors
    /// Returns the failing fields of `step`.
    pub fn validate(&self, step: WizardStep) -> Result<(), ValidationError> {
        let errors = match step {
            WizardStep::Business => self.validate_business(),
            WizardStep::Contact => self.validate_contact(),
            WizardStep::Territory => self.validate_territory(),
            WizardStep::Agreements => self.validate_agreements(),
        };
        ValidationError::from_errors(errors).map_or(Ok(()), Err)
    }

    fn to_application(&self) -> Result<FranchiseeApplication, ValidationError> {
        let invalid = |field: &'static str, message: &str| ValidationError {
            errors: vec![FieldError::new(field, message)],
        };
        let legal_type = LegalType::parse(&self.legal_type)
            .ok_or_else(|| invalid("legalType", "must be individual or corporation"))?;
        let province = normalize_province(&self.province)
            .ok_or_else(|| invalid("province", "must be a Canadian province or territory code"))?;
        let postal_code = PostalCode::parse(&self.postal_code)
            .ok_or_else(|| invalid("postalCode", "must look like A1A 1A1"))?;

        Ok(FranchiseeApplication {
            legal_name: self.legal_name.trim().to_string(),
            legal_type,
            operating_name: self.operating_name.trim().to_string(),
            business_number: non_empty(&self.business_number).map(normalize_business_number),
            tax_number: non_empty(&self.tax_number).map(ToString::to_string),
            contact_name: self.contact_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            address: self.address.trim().to_string(),
            city: self.city.trim().to_string(),
            province: province.to_string(),
            postal_code: postal_code.to_string(),
            preferred_fsas: self.preferred_fsas.iter().map(ToString::to_string).collect(),
            vehicle_access: self.vehicle_access,
            experience: non_empty(&self.experience).map(ToString::to_string),
            agrees_to_hr_bank: self.agrees_to_hr_bank,
            agrees_to_insurance_minimums: self.agrees_to_insurance_minimums,
        })
    }
}

fn non_empty(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

fn require(errors: &mut Vec<FieldError>, field: &'static str, value: &str) {
    if non_empty(value).is_none() {
        errors.push(FieldError::new(field, "is required"));
    }
}

fn normalize_business_number(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect::<String>()
        .to_uppercase()
}

fn normalize_province(raw: &str) -> Option<&'static str> {
    let upper = raw.trim().to_uppercase();
    PROVINCES.iter().copied().find(|code| *code == upper)
}

/// Step-by-step franchisee application.
#[derive(Debug, Clone, Default)]
pub struct ApplicationWizard {
    draft: ApplicationDraft,
    step: Option<WizardStep>,
}

impl ApplicationWizard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn step(&self) -> WizardStep {
        self.step.unwrap_or(WizardStep::Business)
    }

    #[must_use]
    pub const fn draft(&self) -> &ApplicationDraft {
        &self.draft
    }

    pub const fn draft_mut(&mut self) -> &mut ApplicationDraft {
        &mut self.draft
    }

    #[must_use]
    pub fn is_last_step(&self) -> bool {
        self.step().next().is_none()
    }

    /// Validates the current step without moving.
    ///
    /// # Errors
    /// Returns every failing field of the current step.
    pub fn validate_current(&self) -> Result<(), ValidationError> {
        self.draft.validate(self.step())
    }

    /// Moves to the next step when the current one validates.
    /// Stays on the last step.
    ///
    /// # Errors
    /// Returns every failing field of the current step.
    pub fn advance(&mut self) -> Result<WizardStep, ValidationError> {
        self.validate_current()?;
        let next = self.step().next().unwrap_or(self.step());
        self.step = Some(next);
        Ok(next)
    }

    /// Moves one step back. Returns `None` on the first step.
    pub fn back(&mut self) -> Option<WizardStep> {
        let previous = self.step().previous()?;
        self.step = Some(previous);
        Some(previous)
    }

    /// Builds the submission payload.
    ///
    /// Only possible from the last step. Every step is validated again and
    /// the wizard jumps to the first failing one.
    ///
    /// # Errors
    /// Returns the failing fields of the first invalid step, or a
    /// `step` error when called before the last step.
    pub fn submit(&mut self) -> Result<FranchiseeApplication, ValidationError> {
        if !self.is_last_step() {
            return Err(ValidationError {
                errors: vec![FieldError::new(
                    "step",
                    format!("finish step {} of 4 first", self.step().number()),
                )],
            });
        }

        for step in WizardStep::ALL {
            if let Err(err) = self.draft.validate(step) {
                self.step = Some(step);
                return Err(err);
            }
        }

        self.draft.to_application()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn complete_draft() -> ApplicationDraft {
        let mut draft = ApplicationDraft {
            legal_name: "Test Corp Inc.".into(),
            legal_type: "corporation".into(),
            operating_name: "Clean Stars Toronto".into(),
            business_number: "123456789 rc0001".into(),
            contact_name: "John Smith".into(),
            email: "john@example.com".into(),
            phone: "416-555-1234".into(),
            address: "123 Test Street".into(),
            city: "Toronto".into(),
            province: "on".into(),
            postal_code: "m5v1a1".into(),
            vehicle_access: true,
            agrees_to_hr_bank: true,
            agrees_to_insurance_minimums: true,
            ..ApplicationDraft::default()
        };
        draft.add_fsa("M5V").unwrap();
        draft
    }

    fn wizard_at_last_step(draft: ApplicationDraft) -> ApplicationWizard {
        ApplicationWizard {
            draft,
            step: Some(WizardStep::Agreements),
        }
    }

    #[test]
    fn test_business_step_reports_every_field() {
        let wizard = ApplicationWizard::new();
        let err = wizard.validate_current().unwrap_err();

        assert_eq!(err.fields(), vec!["legalName", "operatingName", "legalType"]);
    }

    #[test_case("" => true; "optional")]
    #[test_case("123456789" => true; "nine digits")]
    #[test_case("123456789RC0001" => true; "program account")]
    #[test_case("123 456 789 rc 0001" => true; "spaced lower case")]
    #[test_case("12345678" => false; "too short")]
    #[test_case("123456789RC01" => false; "short program account")]
    #[test_case("١٢٣٤٥٦٧٨٩" => false; "arabic indic digits")]
    fn test_business_number(number: &str) -> bool {
        let mut draft = complete_draft();
        draft.business_number = number.into();
        draft.validate(WizardStep::Business).is_ok()
    }

    #[test]
    fn test_contact_step_reports_every_field() {
        let draft = ApplicationDraft {
            email: "not-an-email".into(),
            province: "ZZ".into(),
            postal_code: "12345".into(),
            ..ApplicationDraft::default()
        };

        let err = draft.validate(WizardStep::Contact).unwrap_err();

        assert_eq!(
            err.fields(),
            vec!["contactName", "email", "phone", "address", "city", "province", "postalCode"]
        );
    }

    #[test]
    fn test_cannot_advance_past_invalid_step() {
        let mut wizard = ApplicationWizard::new();
        assert!(wizard.advance().is_err());
        assert_eq!(wizard.step(), WizardStep::Business);
    }

    #[test]
    fn test_walk_forward_and_back() {
        let mut wizard = ApplicationWizard::new();
        *wizard.draft_mut() = complete_draft();

        assert_eq!(wizard.advance().unwrap(), WizardStep::Contact);
        assert_eq!(wizard.advance().unwrap(), WizardStep::Territory);
        assert_eq!(wizard.advance().unwrap(), WizardStep::Agreements);
        assert!(wizard.is_last_step());

        wizard.draft_mut().legal_name.clear();
        assert_eq!(wizard.back(), Some(WizardStep::Territory));
        assert_eq!(wizard.back(), Some(WizardStep::Contact));
        assert_eq!(wizard.back(), Some(WizardStep::Business));
        assert_eq!(wizard.back(), None);
    }

    #[test]
    fn test_fsa_duplicates_removed_case_insensitively() {
        let mut draft = ApplicationDraft::default();

        assert!(draft.add_fsa("m5v").unwrap());
        assert!(!draft.add_fsa("M5V").unwrap());
        assert!(!draft.add_fsa(" m5V ").unwrap());
        assert!(draft.add_fsa("L4C").unwrap());

        let names: Vec<&str> = draft.preferred_fsas().iter().map(Fsa::as_str).collect();
        assert_eq!(names, vec!["M5V", "L4C"]);
    }

    #[test]
    fn test_add_fsas_collects_invalid_entries() {
        let mut draft = ApplicationDraft::default();
        let errors = draft.add_fsas("M5V, 123 l4c,XYZ");

        assert_eq!(errors.len(), 2);
        assert_eq!(draft.preferred_fsas().len(), 2);
        assert!(draft.remove_fsa("l4c"));
        assert!(!draft.remove_fsa("l4c"));
    }

    #[test]
    fn test_territory_requires_one_fsa() {
        let draft = ApplicationDraft::default();
        let err = draft.validate(WizardStep::Territory).unwrap_err();
        assert!(err.has_field("preferredFSAs"));
    }

    #[test]
    fn test_agreements_both_required() {
        let mut draft = complete_draft();
        draft.agrees_to_hr_bank = false;
        draft.agrees_to_insurance_minimums = false;

        let err = draft.validate(WizardStep::Agreements).unwrap_err();
        assert_eq!(
            err.fields(),
            vec!["agreesToHRBank", "agreesToInsuranceMinimums"]
        );
    }

    #[test]
    fn test_submit_before_last_step_refused() {
        let mut wizard = ApplicationWizard::new();
        *wizard.draft_mut() = complete_draft();

        let err = wizard.submit().unwrap_err();
        assert!(err.has_field("step"));
    }

    #[test]
    fn test_submit_revalidates_and_jumps_back() {
        let mut draft = complete_draft();
        draft.city.clear();
        let mut wizard = wizard_at_last_step(draft);

        let err = wizard.submit().unwrap_err();

        assert_eq!(err.fields(), vec!["city"]);
        assert_eq!(wizard.step(), WizardStep::Contact);
    }

    #[test]
    fn test_submit_normalizes_payload() {
        let mut wizard = wizard_at_last_step(complete_draft());

        let application = wizard.submit().unwrap();

        assert_eq!(application.legal_type, LegalType::Corporation);
        assert_eq!(application.business_number.as_deref(), Some("123456789RC0001"));
        assert_eq!(application.province, "ON");
        assert_eq!(application.postal_code, "M5V 1A1");
        assert_eq!(application.preferred_fsas, vec!["M5V".to_string()]);
        assert!(application.tax_number.is_none());
        assert!(application.experience.is_none());
    }
}
