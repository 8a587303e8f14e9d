//! Minimal HTML views for the authentication forms.
//!
//! Renders the login and registration forms with a fixed title, an optional
//! top-level error message, and the ordered field-error list produced by
//! validation. Nothing user-submitted is echoed back into the markup, so no
//! escaping is required here.

use axum::response::Html;

use crate::validate::FieldError;

pub const LOGIN_TITLE: &str = "Login";
pub const REGISTER_TITLE: &str = "Register";

/// Renders the login form.
pub fn login_page(errors: &[FieldError], message: Option<&str>) -> Html<String> {
    Html(form_page(LOGIN_TITLE, "/login", errors, message))
}

/// Renders the registration form.
pub fn register_page(errors: &[FieldError], message: Option<&str>) -> Html<String> {
    Html(form_page(REGISTER_TITLE, "/register", errors, message))
}

fn form_page(title: &str, action: &str, errors: &[FieldError], message: Option<&str>) -> String {
    let mut body = String::new();

    body.push_str(&format!("<h1>{title}</h1>\n"));

    if let Some(message) = message {
        body.push_str(&format!("<p class=\"error-message\">{message}</p>\n"));
    }

    if !errors.is_empty() {
        body.push_str("<ul class=\"field-errors\">\n");
        for error in errors {
            body.push_str(&format!(
                "<li data-field=\"{}\">{}</li>\n",
                error.field, error.message
            ));
        }
        body.push_str("</ul>\n");
    }

    body.push_str(&format!(
        "<form method=\"post\" action=\"{action}\">\n\
         <label>Email <input type=\"email\" name=\"email\"></label>\n\
         <label>Password <input type=\"password\" name=\"password\"></label>\n\
         <button type=\"submit\">{title}</button>\n\
         </form>\n"
    ));

    page(title, &body)
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!doctype html>\n\
         <html lang=\"en\">\n\
         <head><meta charset=\"utf-8\"><title>{title}</title></head>\n\
         <body>\n{body}</body>\n\
         </html>\n"
    )
}
