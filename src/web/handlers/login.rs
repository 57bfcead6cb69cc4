//! Sign-in page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

/// Template for the sign-in page.
///
/// Renders `templates/login.html` with a session token input form.
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
struct LoginTemplate {}

/// Renders the sign-in page.
///
/// # Endpoint
///
/// `GET /dashboard/login`
///
/// # Authentication
///
/// Users paste a session token issued by the `admin` bin; the page stores it
/// in the `session_token` cookie and navigates back to the dashboard.
pub async fn login_handler() -> impl IntoResponse {
    LoginTemplate {}
}
