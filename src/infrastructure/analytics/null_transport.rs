//! No-op analytics transport for disabled delivery.

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{AnalyticsTransport, TransportResult};
use crate::domain::telemetry_event::TelemetryEvent;

/// A transport that discards every event.
///
/// Used when no analytics endpoint is configured or the HTTP transport fails
/// to construct at startup. Counters still work; only delivery is disabled.
pub struct NullAnalyticsTransport;

impl NullAnalyticsTransport {
    /// Creates a new NullAnalyticsTransport instance.
    pub fn new() -> Self {
        debug!("Using NullAnalyticsTransport (analytics delivery disabled)");
        Self
    }
}

impl Default for NullAnalyticsTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AnalyticsTransport for NullAnalyticsTransport {
    async fn send(&self, _event: &TelemetryEvent) -> TransportResult<()> {
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}
