//! Field-level checks run when an employee form is submitted.
//!
//! Errors are collected per field rather than stopping at the first one, so a
//! UI can show every message inline at once. Each error maps to a translation
//! key; see [`FieldError::message_key`].

use crate::model::EmployeeDraft;
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+]?[\d\s()-]{8,}$").expect("valid phone regex"));

/// The editable fields of an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FirstName,
    LastName,
    DateOfEmployment,
    DateOfBirth,
    Phone,
    Email,
    Department,
    Position,
}

impl Field {
    pub const ALL: [Field; 8] = [
        Field::FirstName,
        Field::LastName,
        Field::DateOfEmployment,
        Field::DateOfBirth,
        Field::Phone,
        Field::Email,
        Field::Department,
        Field::Position,
    ];

    /// Field name as used in the stored record, doubling as its label key.
    pub fn name(&self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::DateOfEmployment => "dateOfEmployment",
            Field::DateOfBirth => "dateOfBirth",
            Field::Phone => "phone",
            Field::Email => "email",
            Field::Department => "department",
            Field::Position => "position",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| format!("Unknown field: {}", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required,
    InvalidEmail,
    InvalidPhone,
}

impl FieldError {
    pub fn message_key(&self) -> &'static str {
        match self {
            FieldError::Required => "requiredField",
            FieldError::InvalidEmail => "invalidEmail",
            FieldError::InvalidPhone => "invalidPhone",
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::Required => write!(f, "is required"),
            FieldError::InvalidEmail => write!(f, "is not a valid email address"),
            FieldError::InvalidPhone => write!(f, "is not a valid phone number"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<Field, FieldError>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.errors.get(&field).copied()
    }

    pub fn insert(&mut self, field: Field, error: FieldError) {
        self.errors.insert(field, error);
    }

    pub fn clear(&mut self, field: Field) {
        self.errors.remove(&field);
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, FieldError)> + '_ {
        self.errors.iter().map(|(f, e)| (*f, *e))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(field, error)| format!("{} {}", field, error))
            .collect();
        f.write_str(&parts.join(", "))
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_PATTERN.is_match(phone)
}

/// Checks a draft, returning every failing field.
///
/// Empty fields report [`FieldError::Required`]; the format checks only run
/// on fields that have a value.
pub fn validate(draft: &EmployeeDraft) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    let required = [
        (Field::FirstName, &draft.first_name),
        (Field::LastName, &draft.last_name),
        (Field::DateOfEmployment, &draft.date_of_employment),
        (Field::DateOfBirth, &draft.date_of_birth),
        (Field::Phone, &draft.phone),
        (Field::Email, &draft.email),
    ];
    for (field, value) in required {
        if value.is_empty() {
            errors.insert(field, FieldError::Required);
        }
    }

    if !draft.email.is_empty() && !is_valid_email(&draft.email) {
        errors.insert(Field::Email, FieldError::InvalidEmail);
    }
    if !draft.phone.is_empty() && !is_valid_phone(&draft.phone) {
        errors.insert(Field::Phone, FieldError::InvalidPhone);
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_draft() -> EmployeeDraft {
        EmployeeDraft {
            first_name: "Ayşe".into(),
            last_name: "Demir".into(),
            date_of_employment: "2020-11-05".into(),
            date_of_birth: "1985-07-18".into(),
            phone: "+(90) 535 765 43 21".into(),
            email: "ayse@example.com".into(),
            ..Default::default()
        }
    }

    #[test]
    fn complete_draft_passes() {
        assert!(validate(&complete_draft()).is_empty());
    }

    #[test]
    fn empty_draft_reports_every_required_field() {
        let errors = validate(&EmployeeDraft::default());
        assert_eq!(errors.len(), 6);
        assert_eq!(errors.get(Field::Email), Some(FieldError::Required));
        assert_eq!(errors.get(Field::Department), None);
    }

    #[test]
    fn email_format_is_checked() {
        let mut draft = complete_draft();
        for bad in ["ayse", "ayse@example", "ay se@example.com", "a@@b.c"] {
            draft.email = bad.into();
            assert_eq!(
                validate(&draft).get(Field::Email),
                Some(FieldError::InvalidEmail),
                "{bad}"
            );
        }
    }

    #[test]
    fn phone_format_is_checked() {
        let mut draft = complete_draft();
        draft.phone = "+(90) 5".into();
        assert_eq!(
            validate(&draft).get(Field::Phone),
            Some(FieldError::InvalidPhone)
        );

        draft.phone = "0532-123-45".into();
        assert!(validate(&draft).get(Field::Phone).is_none());
    }

    #[test]
    fn errors_map_to_translation_keys() {
        assert_eq!(FieldError::Required.message_key(), "requiredField");
        assert_eq!("dateOfBirth".parse::<Field>().unwrap(), Field::DateOfBirth);
        let errors = validate(&EmployeeDraft {
            first_name: "A".into(),
            ..complete_draft()
        });
        assert!(errors.is_empty());
    }
}
