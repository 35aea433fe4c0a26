//! # Input Validation
//!
//! Checks a person's fields before they reach the store. The store itself
//! accepts any text; these rules belong to whoever collects the input.
//!
//! ## Rules
//!
//! - **Names**: first and last name are required.
//! - **Letters only**: first name, last name, state and country may contain
//!   only alphabetic characters and spaces.
//! - **Digits only**: house number and phone.
//! - **Phone length**: when given, 8 to 11 characters.
//! - **Email**: a deliberately loose heuristic. An address is rejected only
//!   when it has no `@` *and* does not end in `.com`, `.br` or `.net`. So
//!   `ana@x` passes and so does `ana.com`, while `ana.org` is rejected.
//!   This boundary is kept exactly as existing data files were produced with
//!   it.

use crate::model::PersonFields;
use thiserror::Error;

pub const PHONE_MIN_LEN: usize = 8;
pub const PHONE_MAX_LEN: usize = 11;

const EMAIL_SUFFIXES: [&str; 3] = [".com", ".br", ".net"];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("First name and last name are required")]
    MissingName,

    #[error("{field} must contain only letters")]
    NotAlphabetic { field: &'static str },

    #[error("{field} must contain only digits")]
    NotNumeric { field: &'static str },

    #[error("Invalid phone: expected 8 to 11 digits, got {0}")]
    PhoneLength(usize),

    #[error("Invalid email: {0}")]
    Email(String),
}

/// Validates a full set of fields, returning the first violation found.
pub fn validate(fields: &PersonFields) -> Result<(), ValidationError> {
    if fields.first_name.trim().is_empty() || fields.last_name.trim().is_empty() {
        return Err(ValidationError::MissingName);
    }

    for (field, value) in [
        ("first name", &fields.first_name),
        ("last name", &fields.last_name),
        ("state", &fields.state),
        ("country", &fields.country),
    ] {
        if !is_alphabetic(value) {
            return Err(ValidationError::NotAlphabetic { field });
        }
    }

    for (field, value) in [("number", &fields.number), ("phone", &fields.phone)] {
        if !value.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::NotNumeric { field });
        }
    }

    validate_phone(&fields.phone)?;
    validate_email(&fields.email)?;
    Ok(())
}

pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    let len = phone.chars().count();
    if len > 0 && !(PHONE_MIN_LEN..=PHONE_MAX_LEN).contains(&len) {
        return Err(ValidationError::PhoneLength(len));
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() || email.contains('@') {
        return Ok(());
    }
    if EMAIL_SUFFIXES.iter().any(|suffix| email.ends_with(suffix)) {
        return Ok(());
    }
    Err(ValidationError::Email(email.to_string()))
}

fn is_alphabetic(value: &str) -> bool {
    value.chars().all(|c| c.is_alphabetic() || c == ' ')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> PersonFields {
        PersonFields {
            number: "120".into(),
            state: "Sao Paulo".into(),
            country: "Brasil".into(),
            phone: "11987654321".into(),
            email: "ana@example.com".into(),
            ..PersonFields::new("Ana", "Silva")
        }
    }

    #[test]
    fn accepts_complete_person() {
        assert_eq!(validate(&valid()), Ok(()));
    }

    #[test]
    fn accepts_names_only() {
        assert_eq!(validate(&PersonFields::new("Ana", "Silva")), Ok(()));
    }

    #[test]
    fn requires_both_names() {
        let fields = PersonFields::new("Ana", "  ");
        assert_eq!(validate(&fields), Err(ValidationError::MissingName));
        let fields = PersonFields::new("", "Silva");
        assert_eq!(validate(&fields), Err(ValidationError::MissingName));
    }

    #[test]
    fn accented_names_are_alphabetic() {
        let fields = PersonFields::new("João", "Conceição");
        assert_eq!(validate(&fields), Ok(()));
    }

    #[test]
    fn rejects_digits_in_names() {
        let fields = PersonFields::new("Ana2", "Silva");
        assert_eq!(
            validate(&fields),
            Err(ValidationError::NotAlphabetic {
                field: "first name"
            })
        );
    }

    #[test]
    fn rejects_letters_in_number() {
        let fields = PersonFields {
            number: "12A".into(),
            ..valid()
        };
        assert_eq!(
            validate(&fields),
            Err(ValidationError::NotNumeric { field: "number" })
        );
    }

    #[test]
    fn phone_length_bounds() {
        assert_eq!(validate_phone(""), Ok(()));
        assert_eq!(validate_phone("12345678"), Ok(()));
        assert_eq!(validate_phone("12345678901"), Ok(()));
        assert_eq!(validate_phone("1234567"), Err(ValidationError::PhoneLength(7)));
        assert_eq!(
            validate_phone("123456789012"),
            Err(ValidationError::PhoneLength(12))
        );
    }

    #[test]
    fn email_boundary() {
        assert_eq!(validate_email(""), Ok(()));
        assert_eq!(validate_email("ana@x"), Ok(()));
        assert_eq!(validate_email("ana.com"), Ok(()));
        assert_eq!(validate_email("ana.com.br"), Ok(()));
        assert_eq!(validate_email("ana.net"), Ok(()));
        assert_eq!(
            validate_email("ana.org"),
            Err(ValidationError::Email("ana.org".into()))
        );
        assert_eq!(
            validate_email("plainaddress"),
            Err(ValidationError::Email("plainaddress".into()))
        );
    }
}
