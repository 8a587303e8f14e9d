use axum::{
    extract::State,
    response::{Html, IntoResponse},
    Form,
};

use crate::{
    controller::util::found,
    error::{register::RegisterError, Error},
    model::{app::AppState, form::RegisterForm},
    service::auth::register::register_service,
    validate::ValidateForm,
    view,
};

/// Renders the registration form
///
/// # Responses
/// - 200 (OK): The register view with its fixed title
pub async fn show_register() -> Html<String> {
    view::register_page(&[], None)
}

/// Handles a submitted registration form
///
/// Validates the form, rejects emails that already have an account, and
/// otherwise persists a new user with a bcrypt hash of the password. The new
/// account is not logged in; the user is sent to the login page.
///
/// # Responses
/// - 302 (Found): Account created, redirect to `/login`
/// - 422 (Unprocessable Entity): Validation failed, register view re-rendered with the ordered error list
/// - 409 (Conflict): A user with the submitted email already exists
/// - 500 (Internal Server Error): A database error occurred
pub async fn submit_register(
    State(state): State<AppState>,
    Form(form): Form<RegisterForm>,
) -> Result<impl IntoResponse, Error> {
    if let Err(errors) = form.validate() {
        return Err(RegisterError::Validation(errors).into());
    }

    let user = register_service(&state.db, &form.email, &form.password).await?;

    tracing::info!(user_id = user.id, "new user registered");

    Ok(found("/login"))
}
