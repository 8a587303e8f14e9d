//! End-to-end scenario across the register, login, and logout handlers.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Form,
};
use heimdall::{
    controller::auth::{logout, submit_login, submit_register},
    error::auth::INVALID_CREDENTIALS_MESSAGE,
    model::{
        app::AppState,
        form::{LoginForm, RegisterForm},
        session::user::SessionUserId,
    },
};
use heimdall_test_utils::prelude::*;

use crate::controller::body_text;

#[tokio::test]
/// register → login → wrong-password login → duplicate register → logout
async fn full_authentication_round_trip() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    let state: AppState = test.to_app_state();

    // register("a@x.com", "secret1") redirects to the login page
    let response = submit_register(
        State(state.clone()),
        Form(RegisterForm {
            email: "a@x.com".to_string(),
            password: "secret1".to_string(),
        }),
    )
    .await
    .unwrap()
    .into_response();
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(response.headers()[header::LOCATION], "/login");

    // login("a@x.com", "secret1") redirects to the root with the session set
    let response = submit_login(
        State(state.clone()),
        test.session.clone(),
        Form(LoginForm {
            email: "a@x.com".to_string(),
            password: "secret1".to_string(),
        }),
    )
    .await
    .unwrap()
    .into_response();
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(response.headers()[header::LOCATION], "/");
    assert!(SessionUserId::get(&test.session).await.unwrap().is_some());

    // login("a@x.com", "wrong") is rejected with the generic message
    let response = submit_login(
        State(state.clone()),
        test.session.clone(),
        Form(LoginForm {
            email: "a@x.com".to_string(),
            password: "wrong".to_string(),
        }),
    )
    .await
    .err()
    .unwrap()
    .into_response();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(body_text(response).await.contains(INVALID_CREDENTIALS_MESSAGE));

    // register("a@x.com", "anything") again conflicts
    let response = submit_register(
        State(state),
        Form(RegisterForm {
            email: "a@x.com".to_string(),
            password: "anything".to_string(),
        }),
    )
    .await
    .err()
    .unwrap()
    .into_response();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // logout discards the authenticated session
    let response = logout(test.session.clone()).await;
    assert_eq!(response.status(), StatusCode::FOUND);
    assert!(SessionUserId::get(&test.session).await.unwrap().is_none());

    Ok(())
}
