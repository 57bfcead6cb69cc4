use std::sync::Arc;

use crate::application::services::{PageService, TelemetryService};
use crate::domain::ports::{AnalyticsTransport, CounterStore, SessionProvider};

/// Shared application state injected into all handlers.
///
/// Services are built once at startup over trait-object collaborators, so
/// tests can assemble the same state from in-memory implementations.
#[derive(Clone)]
pub struct AppState {
    pub page_service: Arc<PageService<dyn SessionProvider>>,
    pub telemetry_service: Arc<TelemetryService<dyn CounterStore>>,
    /// Kept alongside the telemetry service for health probing.
    pub counter_store: Arc<dyn CounterStore>,
    /// Kept alongside the worker for health probing.
    pub analytics: Arc<dyn AnalyticsTransport>,
}

impl AppState {
    pub fn new(
        page_service: Arc<PageService<dyn SessionProvider>>,
        telemetry_service: Arc<TelemetryService<dyn CounterStore>>,
        counter_store: Arc<dyn CounterStore>,
        analytics: Arc<dyn AnalyticsTransport>,
    ) -> Self {
        Self {
            page_service,
            telemetry_service,
            counter_store,
            analytics,
        }
    }
}
