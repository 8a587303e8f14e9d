use serde::Deserialize;

use crate::validate::{
    valid_email, FieldError, ValidateForm, PASSWORD_MAX_LENGTH, PASSWORD_MIN_LENGTH,
};

/// Payload of the login form.
#[derive(Deserialize, Debug)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Login rules: the email must be well-formed and a password must be present.
///
/// Length rules are deliberately absent here; a short password on login is a
/// credential mismatch, not a validation failure.
impl ValidateForm for LoginForm {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        if !valid_email(&self.email) {
            errors.push(FieldError::new("email", "Enter a valid email address"));
        }

        if self.password.is_empty() {
            errors.push(FieldError::new("password", "Password is required"));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Payload of the registration form.
#[derive(Deserialize, Debug)]
pub struct RegisterForm {
    pub email: String,
    pub password: String,
}

impl ValidateForm for RegisterForm {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        if !valid_email(&self.email) {
            errors.push(FieldError::new("email", "Enter a valid email address"));
        }

        if self.password.len() < PASSWORD_MIN_LENGTH {
            errors.push(FieldError::new(
                "password",
                format!("Password must be at least {PASSWORD_MIN_LENGTH} characters"),
            ));
        } else if self.password.len() > PASSWORD_MAX_LENGTH {
            errors.push(FieldError::new(
                "password",
                format!("Password must be at most {PASSWORD_MAX_LENGTH} characters"),
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
