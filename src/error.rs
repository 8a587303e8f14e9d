//! Error types for the Heimdall server application.
//!
//! This module provides the error handling system for the authentication flow,
//! with specialized error types per domain (login, registration, configuration).
//! All errors implement `IntoResponse` for Axum HTTP responses and use
//! `thiserror` for ergonomic error definitions. Recoverable failures re-render
//! the form they originated from; everything else collapses into a generic
//! 500 response.

pub mod auth;
pub mod config;
pub mod register;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::error::{auth::AuthError, config::ConfigError, register::RegisterError};

/// Main error type for the Heimdall server application.
///
/// This enum aggregates the domain-specific error types and external library
/// errors into a single unified error type. It uses `thiserror`'s `#[from]`
/// attribute to enable automatic conversion from underlying error types via
/// the `?` operator, which keeps backend failures (database, session store,
/// hashing) on an explicit error path instead of panicking mid-request.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Login error (validation or rejected credentials).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Registration error (validation or duplicate email).
    #[error(transparent)]
    RegisterError(#[from] RegisterError),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Password hashing error (malformed stored hash, hashing failure).
    #[error(transparent)]
    PasswordHashError(#[from] bcrypt::BcryptError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Redis session store error (connection, command execution).
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
}

/// Converts application errors into HTTP responses.
///
/// Domain errors carry their own response mappings that re-render the
/// originating form (422 validation, 401 rejected credentials, 409 duplicate
/// email). Every other error is a backend fault and is logged and rendered as
/// a generic 500.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::RegisterError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal
/// Server Error response.
///
/// Logs the full error message for diagnostics, but returns a generic message
/// to the client so internal details never leak. Used as the fallback for
/// errors without a specific response mapping.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
    }
}
