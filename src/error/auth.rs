use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{validate::FieldError, view};

/// Message rendered for a rejected login.
///
/// Identical for an unknown email and a wrong password so the response does
/// not reveal whether an email is registered.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password";

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("submitted login form failed validation")]
    Validation(Vec<FieldError>),
    #[error("invalid email or password")]
    InvalidCredentials,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                view::login_page(&errors, None),
            )
                .into_response(),
            Self::InvalidCredentials => {
                tracing::debug!("{}", Self::InvalidCredentials);

                (
                    StatusCode::UNAUTHORIZED,
                    view::login_page(&[], Some(INVALID_CREDENTIALS_MESSAGE)),
                )
                    .into_response()
            }
        }
    }
}
