//! Field-level validation for the edit forms.
//!
//! A form collects every failing field into [`FormErrors`] before anything
//! is sent, so all messages show at once under their inputs.

use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("This field is required")]
    Required,
    #[error("Enter a valid email address")]
    InvalidEmail,
    #[error("Must be at least {0} characters")]
    TooShort(usize),
    #[error("Select a valid option")]
    NotAnOption,
    #[error("Enter a valid date and time")]
    InvalidDateTime,
    #[error("Must not be before the start")]
    EndsBeforeStart,
}

/// Failing fields keyed by form field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<&'static str, FieldError>);

impl FormErrors {
    /// Keeps the first error reported for a field.
    pub fn add(&mut self, field: &'static str, error: FieldError) {
        self.0.entry(field).or_insert(error);
    }

    pub fn get(&self, field: &str) -> Option<&FieldError> {
        self.0.get(field)
    }

    pub fn message(&self, field: &str) -> Option<String> {
        self.get(field).map(|e| e.to_string())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `Ok(value)` when no field failed.
    pub fn into_result<T>(self, value: T) -> Result<T, FormErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

/// One `@`, a non-empty local part, and a dotted domain without spaces.
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains("..")
}

/// Trimmed value, or `Required` when blank.
pub fn required(value: &str) -> Result<String, FieldError> {
    let value = value.trim();
    if value.is_empty() {
        Err(FieldError::Required)
    } else {
        Ok(value.to_string())
    }
}

/// Trimmed value, `None` when blank.
pub fn optional(value: &str) -> Option<String> {
    Some(value.trim().to_string()).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("ana@blog.com"));
        assert!(is_valid_email("  ana.silva+cms@mail.blog.com "));
        for bad in ["", "ana", "@blog.com", "ana@", "ana@blog", "ana@.com", "ana@blog.", "a b@blog.com", "a@b@c.com", "ana@blog..com"] {
            assert!(!is_valid_email(bad), "{}", bad);
        }
    }

    #[test]
    fn first_error_per_field_is_kept() {
        let mut errors = FormErrors::default();
        errors.add("email", FieldError::Required);
        errors.add("email", FieldError::InvalidEmail);
        errors.add("password", FieldError::TooShort(6));
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("email"), Some(&FieldError::Required));
        assert_eq!(errors.message("password").as_deref(), Some("Must be at least 6 characters"));
        assert!(errors.into_result(()).is_err());
        assert_eq!(FormErrors::default().into_result(7), Ok(7));
    }

    #[test]
    fn required_and_optional_trim() {
        assert_eq!(required("  Ana "), Ok("Ana".to_string()));
        assert_eq!(required("   "), Err(FieldError::Required));
        assert_eq!(optional("  "), None);
        assert_eq!(optional(" x "), Some("x".to_string()));
    }
}
