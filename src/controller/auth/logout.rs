use axum::response::Response;
use tower_sessions::Session;

use crate::controller::util::found;

/// Logs the user out by destroying their session
///
/// The session is destroyed unconditionally, discarding the user ID and any
/// other session data. A teardown failure is logged and swallowed: the
/// redirect to the login page happens regardless, so a session-store outage
/// can never leave a user unable to log out.
///
/// # Responses
/// - 302 (Found): Redirect to the login page, whether or not teardown succeeded
pub async fn logout(session: Session) -> Response {
    if let Err(err) = session.flush().await {
        tracing::warn!(error = %err, "failed to destroy session during logout");
    }

    found("/login")
}
