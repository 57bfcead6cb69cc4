#![allow(dead_code)]

use std::sync::Arc;
use tokio::sync::mpsc;

use compliance_portal::application::services::{PageService, TelemetryService};
use compliance_portal::domain::ports::{
    AnalyticsTransport, CounterStore, SessionProvider, StoreError, StoreResult,
};
use compliance_portal::domain::telemetry_event::TelemetryEvent;
use compliance_portal::infrastructure::analytics::NullAnalyticsTransport;
use compliance_portal::infrastructure::session::SignedSessionProvider;
use compliance_portal::infrastructure::store::MemoryCounterStore;
use compliance_portal::state::AppState;
use compliance_portal::web::SIGN_IN_PATH;

pub const TEST_SIGNING_SECRET: &str = "test-signing-secret";

/// Counter store failing every operation, for fault-tolerance tests.
pub struct FailingCounterStore;

impl CounterStore for FailingCounterStore {
    fn get(&self, _key: &str) -> StoreResult<Option<String>> {
        Err(StoreError::Io("storage unavailable".to_string()))
    }

    fn set(&self, _key: &str, _value: &str) -> StoreResult<()> {
        Err(StoreError::Io("storage unavailable".to_string()))
    }
}

/// Issues a session token valid against the test state's provider.
pub fn issue_session(identity: &str) -> String {
    SignedSessionProvider::new(TEST_SIGNING_SECRET.to_string()).issue(identity, "testnonce")
}

pub fn create_test_state() -> (
    AppState,
    Arc<MemoryCounterStore>,
    mpsc::Receiver<TelemetryEvent>,
) {
    let store = Arc::new(MemoryCounterStore::new());
    let (state, rx) = state_with_store(store.clone());
    (state, store, rx)
}

pub fn state_with_store(
    store: Arc<dyn CounterStore>,
) -> (AppState, mpsc::Receiver<TelemetryEvent>) {
    let (tx, rx) = mpsc::channel(100);

    let sessions: Arc<dyn SessionProvider> =
        Arc::new(SignedSessionProvider::new(TEST_SIGNING_SECRET.to_string()));
    let page_service = Arc::new(PageService::new(sessions, SIGN_IN_PATH));
    let telemetry_service = Arc::new(TelemetryService::new(store.clone(), tx));
    let analytics: Arc<dyn AnalyticsTransport> = Arc::new(NullAnalyticsTransport::new());

    let state = AppState::new(page_service, telemetry_service, store, analytics);

    (state, rx)
}
