//! Port for delivering telemetry events to the analytics endpoint.

use crate::domain::telemetry_event::TelemetryEvent;
use async_trait::async_trait;
use thiserror::Error;

/// Errors raised by analytics delivery attempts.
///
/// These exist for introspection and metrics only: the background worker logs
/// and discards every failure. Nothing retries.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("analytics endpoint unreachable: {0}")]
    Network(String),
    #[error("analytics endpoint rejected event: HTTP {0}")]
    Status(u16),
    #[error("analytics client initialization failed: {0}")]
    Client(String),
}

/// Result type for analytics transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// One-way delivery of telemetry events to an analytics collaborator.
///
/// # Implementations
///
/// - [`crate::infrastructure::analytics::HttpAnalyticsTransport`] - JSON POST
///   to a configured endpoint, response body ignored
/// - [`crate::infrastructure::analytics::NullAnalyticsTransport`] - discards
///   events when no endpoint is configured
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnalyticsTransport: Send + Sync {
    /// Transmits a single event.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] on network failure or a non-success
    /// response status. Callers treat every error as final.
    async fn send(&self, event: &TelemetryEvent) -> TransportResult<()>;

    /// Reports whether the analytics endpoint is reachable.
    ///
    /// Used by the health check endpoint; never affects event delivery.
    async fn health_check(&self) -> bool;
}
