//! Compliance dashboard page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    http::HeaderMap,
    response::{IntoResponse, Redirect, Response},
};

use crate::domain::entities::PageOutcome;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::session_cookie::extract_session_token;

/// Template for the dashboard page shell.
///
/// Renders `templates/dashboard.html`: a container wrapping a loading
/// placeholder. The compliance view itself mounts client-side from
/// `/static/compliance.js`, parameterized by the resolved identity, and
/// replaces the placeholder once ready.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub identity: String,
}

/// Renders the compliance dashboard, gated on a resolved session.
///
/// # Endpoint
///
/// `GET /dashboard`
///
/// # Access Gate
///
/// The session token is read from the `session_token` cookie and resolved via
/// [`crate::application::services::PageService`]. The service returns an
/// explicit outcome: without an identity the response is a redirect to the
/// sign-in page and no shell markup is produced; with one, the shell renders
/// and hands that identity to the client-side view.
///
/// # Errors
///
/// Session provider failures convert to `500` through [`AppError`]; there is
/// no other error branch here.
pub async fn dashboard_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let token = extract_session_token(&headers);

    match state
        .page_service
        .resolve_dashboard(token.as_deref())
        .await?
    {
        PageOutcome::RedirectTo(path) => Ok(Redirect::to(&path).into_response()),
        PageOutcome::Render(page) => Ok(DashboardTemplate {
            identity: page.identity.to_string(),
        }
        .into_response()),
    }
}
