//! HTTP routing configuration.

use axum::{routing::get, Router};

use crate::{controller, model::app::AppState};

/// Builds the application's HTTP router.
///
/// # Registered Endpoints
/// - `GET /login` - Render the login form
/// - `POST /login` - Verify credentials and start a session
/// - `GET /register` - Render the registration form
/// - `POST /register` - Create a new account
/// - `GET|POST /logout` - Destroy the session
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/login",
            get(controller::auth::show_login).post(controller::auth::submit_login),
        )
        .route(
            "/register",
            get(controller::auth::show_register).post(controller::auth::submit_register),
        )
        .route(
            "/logout",
            get(controller::auth::logout).post(controller::auth::logout),
        )
}
