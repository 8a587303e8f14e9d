use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{validate::FieldError, view};

/// Message rendered when registering an email that already has an account.
pub const EMAIL_TAKEN_MESSAGE: &str = "Email already in use";

#[derive(Error, Debug)]
pub enum RegisterError {
    #[error("submitted registration form failed validation")]
    Validation(Vec<FieldError>),
    #[error("email already in use")]
    EmailTaken,
}

impl IntoResponse for RegisterError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                view::register_page(&errors, None),
            )
                .into_response(),
            Self::EmailTaken => {
                tracing::debug!("{}", Self::EmailTaken);

                (
                    StatusCode::CONFLICT,
                    view::register_page(&[], Some(EMAIL_TAKEN_MESSAGE)),
                )
                    .into_response()
            }
        }
    }
}
