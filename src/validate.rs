//! Form validation rules.
//!
//! Submitted forms are checked against per-field rules before any business
//! logic runs. Failures are collected into an ordered list of [`FieldError`]s
//! which the view layer renders inline; the order matches the field order of
//! the form.

use regex::Regex;

/// Minimum accepted password length for new accounts.
pub const PASSWORD_MIN_LENGTH: usize = 6;

/// Maximum accepted password length for new accounts.
///
/// bcrypt only reads the first 72 bytes of its input; longer passwords would
/// silently verify against a truncated prefix.
pub const PASSWORD_MAX_LENGTH: usize = 72;

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Name of the form field the rule failed on.
    pub field: &'static str,
    /// Human-readable message rendered next to the field.
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Validation rule set applied to a submitted form.
///
/// Implementations check every field and return all failures at once, in
/// field order, rather than stopping at the first one.
pub trait ValidateForm {
    fn validate(&self) -> Result<(), Vec<FieldError>>;
}

/// Returns true when `email` has the shape `local@domain.tld`.
pub fn valid_email(email: &str) -> bool {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").is_ok_and(|re| re.is_match(email))
}
