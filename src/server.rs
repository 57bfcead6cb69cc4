//! HTTP server initialization and runtime setup.
//!
//! Handles collaborator setup, worker spawning, and Axum server lifecycle.

use crate::application::services::{PageService, TelemetryService};
use crate::config::Config;
use crate::domain::ports::{AnalyticsTransport, CounterStore, SessionProvider};
use crate::domain::telemetry_worker::run_telemetry_worker;
use crate::infrastructure::analytics::{HttpAnalyticsTransport, NullAnalyticsTransport};
use crate::infrastructure::session::SignedSessionProvider;
use crate::infrastructure::store::{FileCounterStore, MemoryCounterStore};
use crate::routes::app_router;
use crate::state::AppState;
use crate::web::SIGN_IN_PATH;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Counter store (file-backed, or in-memory fallback)
/// - Analytics transport (HTTP, or null fallback)
/// - Background telemetry worker
/// - Session provider and services
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let counters: Arc<dyn CounterStore> = match &config.counter_store_path {
        Some(path) => match FileCounterStore::open(path) {
            Ok(store) => {
                tracing::info!("Counter store: file ({})", path.display());
                Arc::new(store)
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to open counter store at {}: {}. Using in-memory store.",
                    path.display(),
                    e
                );
                Arc::new(MemoryCounterStore::new())
            }
        },
        None => {
            tracing::info!("Counter store: in-memory");
            Arc::new(MemoryCounterStore::new())
        }
    };

    let analytics: Arc<dyn AnalyticsTransport> = match &config.analytics_url {
        Some(url) => match HttpAnalyticsTransport::new(url) {
            Ok(transport) => {
                tracing::info!("Analytics delivery enabled ({url})");
                Arc::new(transport)
            }
            Err(e) => {
                tracing::warn!("Failed to set up analytics transport: {e}. Delivery disabled.");
                Arc::new(NullAnalyticsTransport::new())
            }
        },
        None => {
            tracing::info!("Analytics delivery disabled");
            Arc::new(NullAnalyticsTransport::new())
        }
    };

    let (event_tx, event_rx) = mpsc::channel(config.event_queue_capacity);
    tokio::spawn(run_telemetry_worker(event_rx, analytics.clone()));
    tracing::info!("Telemetry worker started");

    let sessions: Arc<dyn SessionProvider> = Arc::new(SignedSessionProvider::new(
        config.session_signing_secret.clone(),
    ));
    let page_service = Arc::new(PageService::new(sessions, SIGN_IN_PATH));
    let telemetry_service = Arc::new(TelemetryService::new(counters.clone(), event_tx));

    let state = AppState::new(page_service, telemetry_service, counters, analytics);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

/// Resolves when the process receives SIGINT.
async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("Shutdown signal received");
    }
}
