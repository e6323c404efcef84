//! Integration tests for the toolkit HTTP API.
//!
//! The router is built through the same composition root as the binary,
//! with in-memory storage, and driven with `oneshot` requests.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use mediaai_toolkit::adapters::http::ToolkitAppState;
use mediaai_toolkit::bootstrap::{build_router, build_state, build_storage};
use mediaai_toolkit::config::{AppConfig, StorageBackend, StorageConfig};

// =============================================================================
// Test Infrastructure
// =============================================================================

async fn app(pdf_export: bool) -> (Router, ToolkitAppState) {
    let mut config = AppConfig {
        storage: StorageConfig {
            backend: StorageBackend::Memory,
            ..Default::default()
        },
        ..Default::default()
    };
    config.features.enable_pdf_export = pdf_export;

    let storage = build_storage(&config);
    let state = build_state(&config, storage).await;
    (build_router(state.clone(), &config.server), state)
}

async fn call(router: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, bytes.to_vec())
}

async fn call_json(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let (status, bytes) = call(router, request).await;
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

fn event(tool: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(format!("/api/toolkit/pages/{}/events", tool))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn click(tool: &str, element: &str) -> Request<Body> {
    event(tool, json!({"type": "click", "element": element}))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn health_endpoint_responds() {
    let (router, _) = app(true).await;
    let (status, body) = call_json(&router, get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn roi_flow_produces_result_and_json_report() {
    let (router, _) = app(true).await;

    for element in [
        "option-organization_size-small",
        "option-use_case-transcription",
        "option-scope-pilot",
    ] {
        let (status, _) = call_json(&router, click("roi", element)).await;
        assert_eq!(status, StatusCode::OK);
    }
    for (element, value) in [
        ("input-staff_count", "4"),
        ("input-hours_saved_per_week", "2"),
        ("input-hourly_rate", "40"),
    ] {
        let (status, _) = call_json(
            &router,
            event("roi", json!({"type": "change", "element": element, "value": value})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, result) = call_json(&router, get("/api/toolkit/tools/roi/result")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["complete"], true);
    assert_eq!(result["result"]["tool"], "roi");
    // 50,000 x 0.5 x 0.9 x 0.4
    let cost = result["result"]["result"]["implementation_cost"].as_f64().unwrap();
    assert!((cost - 9000.0).abs() < 1e-6);

    let (status, bytes) = call(&router, get("/api/toolkit/tools/roi/report?format=json")).await;
    assert_eq!(status, StatusCode::OK);
    let report: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(report["title"], "Media AI ROI Analysis");
    assert_eq!(report["body"]["tool"], "roi");
}

#[tokio::test]
async fn change_on_a_button_is_rejected() {
    let (router, state) = app(true).await;
    let before = state.state.lock().await.clone();

    let (status, body) = call_json(
        &router,
        event("roi", json!({"type": "change", "element": "btn-next", "value": "1"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
    assert_eq!(*state.state.lock().await, before);
}

#[tokio::test]
async fn unsupported_report_format_is_bad_request() {
    let (router, _) = app(true).await;
    let (status, _) = call_json(&router, get("/api/toolkit/tools/roi/report?format=pdf")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn pdf_button_alerts_when_export_disabled() {
    let (router, _) = app(false).await;
    let (status, view) = call_json(&router, click("assessment", "btn-pdf")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(view["effects"][0]["type"], "alert");
}

#[tokio::test]
async fn page_hide_and_navigation_flow() {
    let (router, state) = app(true).await;

    let (_, view) = call_json(&router, click("assessment", "nav-architecture")).await;
    assert_eq!(view["tool"], "architecture");
    assert_eq!(view["effects"][0]["type"], "navigate");

    let (status, _) = call_json(&router, event("architecture", json!({"type": "visibility_hidden"}))).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = call_json(&router, get("/api/toolkit/state")).await;
    assert_eq!(body["state"]["current_tool"], "architecture");
    assert_eq!(
        state.state.lock().await.current_tool,
        mediaai_toolkit::domain::foundation::ToolKind::Architecture
    );
}
