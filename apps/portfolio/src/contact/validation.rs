//! Contact form validation. Runs before anything is submitted.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use crate::errors::AppError;

pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all fields.";
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address.";

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// The form as posted. Missing fields deserialize as empty.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// A form that passed validation, with every field trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidContact {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn validate(form: &ContactForm) -> Result<ValidContact, AppError> {
    let contact = ValidContact {
        name: form.name.trim().to_string(),
        email: form.email.trim().to_string(),
        subject: form.subject.trim().to_string(),
        message: form.message.trim().to_string(),
    };

    let fields = [
        &contact.name,
        &contact.email,
        &contact.subject,
        &contact.message,
    ];
    if fields.iter().any(|f| f.is_empty()) {
        return Err(AppError::Validation(MISSING_FIELDS_MESSAGE.to_string()));
    }
    if !is_valid_email(&contact.email) {
        return Err(AppError::Validation(INVALID_EMAIL_MESSAGE.to_string()));
    }

    Ok(contact)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, subject: &str, message: &str) -> ContactForm {
        ContactForm {
            name: name.to_string(),
            email: email.to_string(),
            subject: subject.to_string(),
            message: message.to_string(),
        }
    }

    fn message_of(err: AppError) -> String {
        match err {
            AppError::Validation(m) => m,
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_valid_form_is_trimmed() {
        let contact = validate(&form("  Ada ", " ada@example.com ", "Hi", " Hello ")).unwrap();
        assert_eq!(contact.name, "Ada");
        assert_eq!(contact.email, "ada@example.com");
        assert_eq!(contact.message, "Hello");
    }

    #[test]
    fn test_whitespace_only_field_is_missing() {
        let err = validate(&form("Ada", "ada@example.com", "   ", "Hello")).unwrap_err();
        assert_eq!(message_of(err), MISSING_FIELDS_MESSAGE);
    }

    #[test]
    fn test_missing_fields_checked_before_email() {
        let err = validate(&form("", "not-an-email", "Hi", "Hello")).unwrap_err();
        assert_eq!(message_of(err), MISSING_FIELDS_MESSAGE);
    }

    #[test]
    fn test_invalid_email() {
        for email in ["ada", "ada@example", "ada @example.com", "@example.com", "ada@@x.io"] {
            let err = validate(&form("Ada", email, "Hi", "Hello")).unwrap_err();
            assert_eq!(message_of(err), INVALID_EMAIL_MESSAGE, "{email}");
        }
    }

    #[test]
    fn test_email_pattern_accepts_common_addresses() {
        assert!(is_valid_email("first.last@uni.edu.ph"));
        assert!(is_valid_email("a+b@x.io"));
    }
}
