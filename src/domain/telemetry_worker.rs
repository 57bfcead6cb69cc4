//! Background worker delivering telemetry events to the analytics endpoint.

use std::sync::Arc;
use tokio::sync::mpsc;

use crate::domain::ports::AnalyticsTransport;
use crate::domain::telemetry_event::TelemetryEvent;

/// Drains the telemetry queue and transmits each event.
///
/// Delivery is best-effort by contract: a failed transmission is counted,
/// logged at debug level, and dropped. There is no retry and no ordering
/// guarantee between events. The loop ends when all senders are dropped.
pub async fn run_telemetry_worker(
    mut rx: mpsc::Receiver<TelemetryEvent>,
    transport: Arc<dyn AnalyticsTransport>,
) {
    while let Some(event) = rx.recv().await {
        match transport.send(&event).await {
            Ok(()) => {
                metrics::counter!("telemetry_events_delivered_total").increment(1);
            }
            Err(e) => {
                metrics::counter!("telemetry_events_failed_total").increment(1);
                tracing::debug!(task = %event.task, error = %e, "analytics delivery failed");
            }
        }
    }
}
