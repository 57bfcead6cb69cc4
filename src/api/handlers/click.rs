//! Handler for telemetry click ingestion.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::click::ClickRequest;
use crate::error::AppError;
use crate::state::AppState;

/// Records a UI click event.
///
/// # Endpoint
///
/// `POST /api/telemetry/click`
///
/// # Request Body
///
/// ```json
/// {
///   "task": "signup",
///   "meta": { "plan": "pro", "step": 2 }  // optional
/// }
/// ```
///
/// # Behavior
///
/// Bumps the per-task click counter and queues the event for asynchronous
/// delivery to the analytics endpoint. Recording is best-effort: a counter
/// store failure or a full delivery queue is logged and does not change the
/// response. Callers fire and forget.
///
/// # Responses
///
/// - **202 Accepted**: payload accepted (even if recording partially failed)
/// - **400 Bad Request**: malformed or invalid payload
pub async fn click_handler(
    State(state): State<AppState>,
    Json(payload): Json<ClickRequest>,
) -> Result<StatusCode, AppError> {
    payload.validate()?;

    if let Err(e) = state
        .telemetry_service
        .record_click(&payload.task, payload.meta)
    {
        tracing::debug!(task = %payload.task, error = %e, "click recorded partially");
    }

    Ok(StatusCode::ACCEPTED)
}
