//! HTTP controller endpoints for the Heimdall web application.
//!
//! This module contains the Axum handlers for the authentication flow.
//! Controllers validate submitted forms, call into services, mutate the
//! session, and return either a rendered form view or a redirect. They
//! integrate with tower-sessions for session management.

pub mod auth;
pub mod util;
