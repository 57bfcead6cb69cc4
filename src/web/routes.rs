//! Web page route configuration.

use crate::state::AppState;
use crate::web::handlers::{dashboard_handler, login_handler};
use axum::{Router, routing::get};

/// All web page routes (mounted under `/dashboard`).
///
/// # Endpoints
///
/// - `GET /` - Compliance dashboard (access-gated)
/// - `GET /login` - Sign-in page (public)
///
/// The dashboard gate lives inside the handler, not in a middleware layer:
/// page resolution returns an explicit render-or-redirect outcome and the
/// handler acts on it.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard_handler))
        .route("/login", get(login_handler))
}
