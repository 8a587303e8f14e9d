use axum::{
    extract::State,
    response::{Html, IntoResponse},
    Form,
};
use tower_sessions::Session;

use crate::{
    controller::util::found,
    error::{auth::AuthError, Error},
    model::{app::AppState, form::LoginForm, session::user::SessionUserId},
    service::auth::login::login_service,
    validate::ValidateForm,
    view,
};

/// Renders the login form
///
/// # Responses
/// - 200 (OK): The login view with its fixed title
pub async fn show_login() -> Html<String> {
    view::login_page(&[], None)
}

/// Handles a submitted login form
///
/// Validates the form, checks the credentials against the user store, and on
/// success records the user's ID in the session. The session is only touched
/// on the full-success path.
///
/// # Responses
/// - 302 (Found): Credentials accepted, user ID stored in session, redirect to `/`
/// - 422 (Unprocessable Entity): Validation failed, login view re-rendered with the ordered error list
/// - 401 (Unauthorized): Unknown email or wrong password, same generic message for both
/// - 500 (Internal Server Error): A database or session-store error occurred
pub async fn submit_login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<impl IntoResponse, Error> {
    if let Err(errors) = form.validate() {
        return Err(AuthError::Validation(errors).into());
    }

    let user = login_service(&state.db, &form.email, &form.password).await?;

    SessionUserId::insert(&session, user.id).await?;

    tracing::info!(user_id = user.id, "user logged in");

    Ok(found("/"))
}
