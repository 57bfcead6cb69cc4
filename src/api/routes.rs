//! API route configuration.

use crate::api::handlers::click_handler;
use crate::state::AppState;
use axum::{Router, routing::post};

/// All API routes.
///
/// # Endpoints
///
/// - `POST /telemetry/click` - Record a UI click (public, fire-and-forget)
///
/// Ingestion is unauthenticated by design: the recorder's contract is
/// best-effort counting, and the rate limiter bounds abuse.
pub fn routes() -> Router<AppState> {
    Router::new().route("/telemetry/click", post(click_handler))
}
