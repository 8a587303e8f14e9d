use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

/// Builds a `302 Found` redirect to `location`.
///
/// Axum's `Redirect` helpers only emit 303/307/308; the auth flow redirects
/// after form posts with the classic `302 Found`.
pub fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}
