use std::sync::Arc;

use axum::http::{header, StatusCode};
use heimdall::{controller::auth::logout, model::session::user::SessionUserId};
use heimdall_test_utils::prelude::*;
use tower_sessions::{session::Id, Session};

#[tokio::test]
/// Expect 302 to the login page after logout with a user ID in session, with
/// the session data discarded
async fn redirects_and_clears_session() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    SessionUserId::insert(&test.session, 1).await.unwrap();

    let response = logout(test.session.clone()).await;

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(response.headers()[header::LOCATION], "/login");

    let session_user_id = SessionUserId::get(&test.session).await.unwrap();
    assert!(session_user_id.is_none());

    Ok(())
}

#[tokio::test]
/// Expect 302 to the login page even when the session holds no data
async fn redirects_without_session_data() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let response = logout(test.session).await;

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(response.headers()[header::LOCATION], "/login");

    Ok(())
}

#[tokio::test]
/// Expect 302 to the login page even when session teardown fails; the error
/// is logged and swallowed, never surfaced to the user
async fn redirects_despite_failing_session_store() {
    let session = Session::new(Some(Id::default()), Arc::new(FailingStore), None);

    let response = logout(session).await;

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(response.headers()[header::LOCATION], "/login");
}
