//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Components Checked
///
/// 1. **Counter store**: Probe read against the configured store
/// 2. **Telemetry queue**: Checks if the channel is open and reports capacity
/// 3. **Analytics**: Transport reachability report
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let store_check = check_counter_store(&state);

    let queue_check = check_telemetry_queue(&state);

    let analytics_check = check_analytics(&state).await;

    let all_healthy = store_check.status == "ok"
        && queue_check.status == "ok"
        && analytics_check.status == "ok";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            counter_store: store_check,
            telemetry_queue: queue_check,
            analytics: analytics_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks counter store availability with a probe read.
fn check_counter_store(state: &AppState) -> CheckStatus {
    match state.counter_store.get("health.probe") {
        Ok(_) => CheckStatus {
            status: "ok".to_string(),
            message: Some("Store readable".to_string()),
        },
        Err(e) => CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Store error: {}", e)),
        },
    }
}

/// Checks if the telemetry delivery queue is operational.
fn check_telemetry_queue(state: &AppState) -> CheckStatus {
    if state.telemetry_service.queue_is_closed() {
        CheckStatus {
            status: "error".to_string(),
            message: Some("Telemetry queue is closed".to_string()),
        }
    } else {
        CheckStatus {
            status: "ok".to_string(),
            message: Some(format!(
                "Capacity: {}",
                state.telemetry_service.queue_capacity()
            )),
        }
    }
}

/// Checks analytics endpoint reachability via the transport.
async fn check_analytics(state: &AppState) -> CheckStatus {
    if state.analytics.health_check().await {
        CheckStatus {
            status: "ok".to_string(),
            message: Some("Analytics endpoint reachable".to_string()),
        }
    } else {
        CheckStatus {
            status: "error".to_string(),
            message: Some("Analytics endpoint unreachable".to_string()),
        }
    }
}
