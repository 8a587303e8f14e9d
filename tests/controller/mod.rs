pub mod auth;

use axum::response::Response;

/// Reads a response body to a string for asserting on rendered views.
pub async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    String::from_utf8(bytes.to_vec()).expect("Response body was not UTF-8")
}
