//! Add-employee form state.
//!
//! This module contains the closed set of form fields, the per-field state
//! (value, touched flag, error message), and the validation rules applied
//! whenever a field changes or the whole form is checked before submission.

use super::StateError;
use crate::directory::{Address, ContactMethods, Employee};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

static EMAIL_PATTERN: OnceLock<Regex> = OnceLock::new();
static PHONE_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Specifying the fields of the add-employee form.
///
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum FieldName {
    FirstName,
    LastName,
    AddressLine1,
    Country,
    City,
    Email,
    PhoneNumber,
}

impl FieldName {
    /// Every field, in validation order.
    pub const ALL: [FieldName; 7] = [
        FieldName::FirstName,
        FieldName::LastName,
        FieldName::AddressLine1,
        FieldName::Country,
        FieldName::City,
        FieldName::Email,
        FieldName::PhoneNumber,
    ];

    /// Return the key used for this field on the command line and in logs.
    ///
    pub fn key(&self) -> &'static str {
        match self {
            FieldName::FirstName => "firstName",
            FieldName::LastName => "lastName",
            FieldName::AddressLine1 => "addressLine1",
            FieldName::Country => "country",
            FieldName::City => "city",
            FieldName::Email => "email",
            FieldName::PhoneNumber => "phoneNumber",
        }
    }

    /// Return the human-readable label for this field.
    ///
    pub fn label(&self) -> &'static str {
        match self {
            FieldName::FirstName => "First Name",
            FieldName::LastName => "Last Name",
            FieldName::AddressLine1 => "Address Line 1",
            FieldName::Country => "Country",
            FieldName::City => "City",
            FieldName::Email => "Email",
            FieldName::PhoneNumber => "Phone Number",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for FieldName {
    type Err = StateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldName::ALL
            .iter()
            .find(|field| field.key() == s)
            .copied()
            .ok_or_else(|| StateError::UnknownField(s.to_owned()))
    }
}

/// State of a single form field.
///
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldState {
    pub value: String,
    pub is_touched: bool,
    /// Empty when the current value passed validation.
    pub error: String,
}

impl FieldState {
    pub fn has_error(&self) -> bool {
        !self.error.is_empty()
    }
}

/// A validation failure for one field.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldValidationError {
    pub field: FieldName,
    pub message: String,
}

impl fmt::Display for FieldValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field.label(), self.message)
    }
}

/// Values for employee attributes the form does not collect.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmissionDefaults {
    pub department: String,
    pub date_of_joining: String,
    pub state: String,
}

impl Default for SubmissionDefaults {
    fn default() -> Self {
        SubmissionDefaults {
            department: "Test Department".to_string(),
            date_of_joining: "29-10-2024".to_string(),
            state: "NA".to_string(),
        }
    }
}

/// Return the error message for the value of the given field, or an empty
/// string if the value is valid.
///
pub fn validate(field: FieldName, value: &str) -> String {
    let valid = match field {
        FieldName::FirstName
        | FieldName::LastName
        | FieldName::AddressLine1
        | FieldName::Country
        | FieldName::City => !value.trim_matches(is_blank).is_empty(),
        FieldName::Email => email_pattern().is_match(value),
        FieldName::PhoneNumber => phone_pattern().is_match(value),
    };
    if valid {
        return String::new();
    }
    match field {
        FieldName::FirstName => "First Name is required",
        FieldName::LastName => "Last Name is required",
        FieldName::AddressLine1 => "Address Line 1 is required",
        FieldName::Country => "Country is required",
        FieldName::City => "City is required",
        FieldName::Email => "Invalid Email Format",
        FieldName::PhoneNumber => "Invalid Phone Number",
    }
    .to_string()
}

/// Characters ignored around required values: whitespace and the byte order
/// mark.
fn is_blank(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

fn email_pattern() -> &'static Regex {
    EMAIL_PATTERN
        .get_or_init(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email pattern is a valid regex"))
}

fn phone_pattern() -> &'static Regex {
    PHONE_PATTERN.get_or_init(|| Regex::new(r"^[0-9]+$").expect("phone pattern is a valid regex"))
}

/// State of the add-employee form for one editing session.
///
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    first_name: FieldState,
    last_name: FieldState,
    address_line1: FieldState,
    country: FieldState,
    city: FieldState,
    email: FieldState,
    phone_number: FieldState,
}

impl FormState {
    /// Return a new form with every field empty, untouched and error-free.
    ///
    pub fn new() -> Self {
        FormState::default()
    }

    /// Return the state of the given field.
    ///
    pub fn field(&self, name: FieldName) -> &FieldState {
        match name {
            FieldName::FirstName => &self.first_name,
            FieldName::LastName => &self.last_name,
            FieldName::AddressLine1 => &self.address_line1,
            FieldName::Country => &self.country,
            FieldName::City => &self.city,
            FieldName::Email => &self.email,
            FieldName::PhoneNumber => &self.phone_number,
        }
    }

    fn field_mut(&mut self, name: FieldName) -> &mut FieldState {
        match name {
            FieldName::FirstName => &mut self.first_name,
            FieldName::LastName => &mut self.last_name,
            FieldName::AddressLine1 => &mut self.address_line1,
            FieldName::Country => &mut self.country,
            FieldName::City => &mut self.city,
            FieldName::Email => &mut self.email,
            FieldName::PhoneNumber => &mut self.phone_number,
        }
    }

    /// Set the value of the field, mark it touched and revalidate it.
    ///
    pub fn update_field(&mut self, name: FieldName, value: &str) {
        let error = validate(name, value);
        let field = self.field_mut(name);
        field.value = value.to_owned();
        field.is_touched = true;
        field.error = error;
    }

    /// Validate every field, storing each failure and marking the failing
    /// field touched. Returns true only if every field passed.
    ///
    pub fn validate_all(&mut self) -> bool {
        let mut is_valid = true;
        for name in FieldName::ALL {
            let error = validate(name, &self.field(name).value);
            if !error.is_empty() {
                is_valid = false;
                let field = self.field_mut(name);
                field.error = error;
                field.is_touched = true;
            }
        }
        is_valid
    }

    /// Return the stored errors in field order.
    ///
    pub fn errors(&self) -> Vec<FieldValidationError> {
        FieldName::ALL
            .iter()
            .filter(|name| self.field(**name).has_error())
            .map(|name| FieldValidationError {
                field: *name,
                message: self.field(*name).error.clone(),
            })
            .collect()
    }

    /// Discard all input and return to the initial state.
    ///
    pub fn reset(&mut self) {
        *self = FormState::new();
    }

    /// Build the submission payload using the built-in placeholders.
    ///
    pub fn build_submission_payload(&self) -> Employee {
        self.build_submission_payload_with(&SubmissionDefaults::default())
    }

    /// Build the submission payload from the current values. Attributes the
    /// form does not collect are taken from `defaults`; the identifier is
    /// left for the server to assign.
    ///
    pub fn build_submission_payload_with(&self, defaults: &SubmissionDefaults) -> Employee {
        Employee {
            id: None,
            emp_id: None,
            first_name: self.first_name.value.clone(),
            last_name: self.last_name.value.clone(),
            department: defaults.department.clone(),
            date_of_joining: defaults.date_of_joining.clone(),
            address: Address {
                line1: self.address_line1.value.clone(),
                city: self.city.value.clone(),
                state: defaults.state.clone(),
            },
            contact_methods: ContactMethods {
                email: self.email.value.clone(),
                phone: self.phone_number.value.clone(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> FormState {
        let mut form = FormState::new();
        form.update_field(FieldName::FirstName, "Jane");
        form.update_field(FieldName::LastName, "Doe");
        form.update_field(FieldName::AddressLine1, "1 Rd");
        form.update_field(FieldName::Country, "US");
        form.update_field(FieldName::City, "NYC");
        form.update_field(FieldName::Email, "a@b.co");
        form.update_field(FieldName::PhoneNumber, "5551234");
        form
    }

    #[test]
    fn test_validate_empty_values_fail_for_every_field() {
        for name in FieldName::ALL {
            assert!(!validate(name, "").is_empty(), "{} accepted empty", name);
        }
    }

    #[test]
    fn test_validate_required_messages() {
        assert_eq!(validate(FieldName::FirstName, ""), "First Name is required");
        assert_eq!(validate(FieldName::LastName, " "), "Last Name is required");
        assert_eq!(
            validate(FieldName::AddressLine1, "\t"),
            "Address Line 1 is required"
        );
        assert_eq!(validate(FieldName::Country, ""), "Country is required");
        assert_eq!(validate(FieldName::City, "\n "), "City is required");
        assert_eq!(
            validate(FieldName::FirstName, "\u{FEFF}"),
            "First Name is required"
        );
        assert_eq!(
            validate(FieldName::Country, " \u{FEFF}\u{00A0}"),
            "Country is required"
        );
        assert_eq!(validate(FieldName::City, "\u{FEFF}Oslo"), "");
        assert_eq!(validate(FieldName::City, " Oslo "), "");
    }

    #[test]
    fn test_validate_email() {
        assert_eq!(validate(FieldName::Email, "a@b.c"), "");
        assert_eq!(validate(FieldName::Email, "abc"), "Invalid Email Format");
        assert_eq!(validate(FieldName::Email, "a@b"), "Invalid Email Format");
        assert_eq!(validate(FieldName::Email, "a b@c.d"), "Invalid Email Format");
        assert_eq!(validate(FieldName::Email, "@b.c"), "Invalid Email Format");
    }

    #[test]
    fn test_validate_phone_number() {
        assert_eq!(validate(FieldName::PhoneNumber, "12345"), "");
        assert_eq!(
            validate(FieldName::PhoneNumber, "12-345"),
            "Invalid Phone Number"
        );
        assert_eq!(
            validate(FieldName::PhoneNumber, "+4712345"),
            "Invalid Phone Number"
        );
        assert_eq!(
            validate(FieldName::PhoneNumber, "١٢٣"),
            "Invalid Phone Number"
        );
    }

    #[test]
    fn test_validate_is_idempotent() {
        for (name, value) in [(FieldName::Email, "x@y"), (FieldName::City, "Rome")] {
            assert_eq!(validate(name, value), validate(name, value));
        }
    }

    #[test]
    fn test_new_form_is_untouched() {
        let form = FormState::new();
        for name in FieldName::ALL {
            assert_eq!(form.field(name), &FieldState::default());
        }
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_update_field_whitespace_first_name() {
        let mut form = FormState::new();
        form.update_field(FieldName::FirstName, "  ");
        let field = form.field(FieldName::FirstName);
        assert_eq!(field.value, "  ");
        assert!(field.is_touched);
        assert_eq!(field.error, "First Name is required");
        assert!(!form.field(FieldName::LastName).is_touched);
    }

    #[test]
    fn test_update_field_clears_error() {
        let mut form = FormState::new();
        form.update_field(FieldName::Email, "nope");
        assert!(form.field(FieldName::Email).has_error());
        form.update_field(FieldName::Email, "yes@mail.com");
        assert!(!form.field(FieldName::Email).has_error());
        assert!(form.field(FieldName::Email).is_touched);
    }

    #[test]
    fn test_validate_all_on_fresh_form() {
        let mut form = FormState::new();
        assert!(!form.validate_all());
        for name in FieldName::ALL {
            let field = form.field(name);
            assert!(field.is_touched);
            assert!(field.has_error());
        }
        let errors = form.errors();
        assert_eq!(errors.len(), 7);
        assert_eq!(errors[0].field, FieldName::FirstName);
        assert_eq!(errors[6].message, "Invalid Phone Number");
    }

    #[test]
    fn test_validate_all_on_valid_form() {
        let mut form = filled_form();
        assert!(form.validate_all());
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_validate_all_does_not_short_circuit() {
        let mut form = filled_form();
        form.update_field(FieldName::FirstName, "");
        form.update_field(FieldName::PhoneNumber, "abc");
        assert!(!form.validate_all());
        let fields: Vec<FieldName> = form.errors().iter().map(|e| e.field).collect();
        assert_eq!(fields, vec![FieldName::FirstName, FieldName::PhoneNumber]);
        assert_eq!(form.field(FieldName::City).value, "NYC");
    }

    #[test]
    fn test_validate_all_leaves_passing_untouched_fields_alone() {
        let mut form = FormState::new();
        form.first_name.value = "Jane".to_string();
        assert!(!form.validate_all());
        assert!(!form.field(FieldName::FirstName).is_touched);
        assert!(form.field(FieldName::LastName).is_touched);
    }

    #[test]
    fn test_reset() {
        let mut form = filled_form();
        form.reset();
        assert_eq!(form, FormState::new());
    }

    #[test]
    fn test_build_submission_payload() {
        let form = filled_form();
        let employee = form.build_submission_payload();
        assert_eq!(employee.id, None);
        assert_eq!(employee.first_name, "Jane");
        assert_eq!(employee.last_name, "Doe");
        assert_eq!(employee.department, "Test Department");
        assert_eq!(employee.date_of_joining, "29-10-2024");
        assert_eq!(employee.address.line1, "1 Rd");
        assert_eq!(employee.address.city, "NYC");
        assert_eq!(employee.address.state, "NA");
        assert_eq!(employee.contact_methods.email, "a@b.co");
        assert_eq!(employee.contact_methods.phone, "5551234");
    }

    #[test]
    fn test_build_submission_payload_with_defaults() {
        let defaults = SubmissionDefaults {
            department: "Finance".to_string(),
            date_of_joining: "01-02-2023".to_string(),
            state: "CA".to_string(),
        };
        let employee = filled_form().build_submission_payload_with(&defaults);
        assert_eq!(employee.department, "Finance");
        assert_eq!(employee.date_of_joining, "01-02-2023");
        assert_eq!(employee.address.state, "CA");
    }

    #[test]
    fn test_field_name_from_str() {
        assert_eq!("email".parse::<FieldName>().ok(), Some(FieldName::Email));
        assert_eq!(
            "addressLine1".parse::<FieldName>().ok(),
            Some(FieldName::AddressLine1)
        );
        let err = "department".parse::<FieldName>();
        assert!(matches!(err, Err(StateError::UnknownField(ref s)) if s == "department"));
    }

    #[test]
    fn test_field_validation_error_display() {
        let error = FieldValidationError {
            field: FieldName::PhoneNumber,
            message: "Invalid Phone Number".to_string(),
        };
        assert_eq!(error.to_string(), "Phone Number: Invalid Phone Number");
    }
}
