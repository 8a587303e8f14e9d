use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Form,
};
use heimdall::{
    controller::auth::{show_register, submit_register},
    data::user::UserRepository,
    error::register::EMAIL_TAKEN_MESSAGE,
    model::{app::AppState, form::RegisterForm},
    service::auth::password::verify_password,
};
use heimdall_test_utils::prelude::*;

use crate::controller::body_text;

fn register_form(email: &str, password: &str) -> Form<RegisterForm> {
    Form(RegisterForm {
        email: email.to_string(),
        password: password.to_string(),
    })
}

#[tokio::test]
/// Expect 200 with the register view for the form page
async fn renders_register_form() {
    let response = show_register().await.into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("<title>Register</title>"));
}

#[tokio::test]
/// Expect 302 to `/login` and a persisted user with a hashed password
async fn redirects_and_persists_user_on_success() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    let state: AppState = test.to_app_state();

    let result = submit_register(State(state), register_form(TEST_EMAIL, TEST_PASSWORD)).await;

    assert!(result.is_ok());
    let response = result.unwrap().into_response();
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(response.headers()[header::LOCATION], "/login");

    let user = UserRepository::new(&test.db)
        .get_by_email(TEST_EMAIL)
        .await?
        .unwrap();
    assert_ne!(user.password_hash, TEST_PASSWORD);
    assert!(verify_password(TEST_PASSWORD, &user.password_hash).unwrap());

    Ok(())
}

#[tokio::test]
/// Expect 409 on a duplicate email with the first record left unchanged
async fn returns_409_for_taken_email() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user(TEST_EMAIL, TEST_PASSWORD)
        .build()
        .await?;
    let state: AppState = test.to_app_state();
    let repository = UserRepository::new(&test.db);
    let existing = repository.get_by_email(TEST_EMAIL).await?.unwrap();

    let result = submit_register(State(state), register_form(TEST_EMAIL, "anything")).await;

    assert!(result.is_err());
    let response = result.err().unwrap().into_response();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = body_text(response).await;
    assert!(body.contains("<title>Register</title>"));
    assert!(body.contains(EMAIL_TAKEN_MESSAGE));

    let stored = repository.get_by_email(TEST_EMAIL).await?.unwrap();
    assert_eq!(stored.id, existing.id);
    assert_eq!(stored.password_hash, existing.password_hash);

    Ok(())
}

#[tokio::test]
/// Expect 422 with field errors rendered in field order and nothing persisted
async fn returns_422_with_ordered_errors() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    let state: AppState = test.to_app_state();

    let result = submit_register(State(state), register_form("not-an-email", "x")).await;

    assert!(result.is_err());
    let response = result.err().unwrap().into_response();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = body_text(response).await;
    let email_at = body.find("Enter a valid email address").unwrap();
    let password_at = body.find("Password must be at least").unwrap();
    assert!(email_at < password_at);

    let exists = UserRepository::new(&test.db)
        .exists_by_email("not-an-email")
        .await?;
    assert!(!exists);

    Ok(())
}

#[tokio::test]
/// Expect 500 when the user table is missing, surfacing the backend error
async fn returns_500_on_database_error() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let state: AppState = test.to_app_state();

    let result = submit_register(State(state), register_form(TEST_EMAIL, TEST_PASSWORD)).await;

    assert!(result.is_err());
    let response = result.err().unwrap().into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
