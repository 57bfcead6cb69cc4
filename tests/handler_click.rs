mod common;

use std::sync::Arc;

use axum::{Router, routing::post};
use axum_test::TestServer;
use compliance_portal::api::handlers::click_handler;
use compliance_portal::application::services::counter_key;
use compliance_portal::domain::ports::CounterStore;
use compliance_portal::domain::telemetry_event::MetaValue;
use compliance_portal::state::AppState;
use serde_json::json;

fn click_server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/api/telemetry/click", post(click_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_click_is_counted_and_queued() {
    let (state, store, mut rx) = common::create_test_state();
    let server = click_server(state);

    let response = server
        .post("/api/telemetry/click")
        .json(&json!({ "task": "signup" }))
        .await;

    assert_eq!(response.status_code(), 202);
    assert_eq!(
        store.get(&counter_key("signup")).unwrap(),
        Some("1".to_string())
    );

    let event = rx.try_recv().unwrap();
    assert_eq!(event.event_type, "click");
    assert_eq!(event.task, "signup");
    assert!(event.meta.is_none());
}

#[tokio::test]
async fn test_repeated_clicks_accumulate() {
    let (state, store, _rx) = common::create_test_state();
    let server = click_server(state);

    for _ in 0..2 {
        let response = server
            .post("/api/telemetry/click")
            .json(&json!({ "task": "export.report" }))
            .await;
        assert_eq!(response.status_code(), 202);
    }

    assert_eq!(
        store.get(&counter_key("export.report")).unwrap(),
        Some("2".to_string())
    );
}

#[tokio::test]
async fn test_tasks_are_counted_independently() {
    let (state, store, _rx) = common::create_test_state();
    let server = click_server(state);

    server
        .post("/api/telemetry/click")
        .json(&json!({ "task": "signup" }))
        .await;
    server
        .post("/api/telemetry/click")
        .json(&json!({ "task": "export.report" }))
        .await;

    assert_eq!(
        store.get(&counter_key("signup")).unwrap(),
        Some("1".to_string())
    );
    assert_eq!(
        store.get(&counter_key("export.report")).unwrap(),
        Some("1".to_string())
    );
}

#[tokio::test]
async fn test_meta_is_forwarded_with_event() {
    let (state, _store, mut rx) = common::create_test_state();
    let server = click_server(state);

    let response = server
        .post("/api/telemetry/click")
        .json(&json!({ "task": "upgrade", "meta": { "plan": "pro", "step": 2 } }))
        .await;

    assert_eq!(response.status_code(), 202);

    let event = rx.try_recv().unwrap();
    let meta = event.meta.unwrap();
    assert_eq!(meta["plan"], MetaValue::Text("pro".to_string()));
    assert_eq!(meta["step"], MetaValue::Number(2.0));
}

#[tokio::test]
async fn test_empty_task_is_rejected() {
    let (state, store, mut rx) = common::create_test_state();
    let server = click_server(state);

    let response = server
        .post("/api/telemetry/click")
        .json(&json!({ "task": "" }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(store.get(&counter_key("")).unwrap(), None);
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn test_storage_failure_still_accepts_and_queues() {
    let (state, mut rx) = common::state_with_store(Arc::new(common::FailingCounterStore));
    let server = click_server(state);

    let response = server
        .post("/api/telemetry/click")
        .json(&json!({ "task": "signup" }))
        .await;

    // The counter write failed, but the caller never sees it and the
    // analytics event still goes out.
    assert_eq!(response.status_code(), 202);
    assert_eq!(rx.try_recv().unwrap().task, "signup");
}
