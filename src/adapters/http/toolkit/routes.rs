//! Route configuration for toolkit endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    dispatch_event, download_report, get_result, get_state, health, open_page, reset_tool,
    ToolkitAppState,
};

/// Creates the toolkit router with all endpoints.
///
/// Routes:
/// - `GET /health` - Liveness check
/// - `GET /api/toolkit/state` - Whole shared state with progress
/// - `GET /api/toolkit/pages/:tool` - Open a tool page and render it
/// - `POST /api/toolkit/pages/:tool/events` - Apply a click, change or page-hide event
/// - `POST /api/toolkit/tools/:tool/reset` - Clear one tool's answers
/// - `GET /api/toolkit/tools/:tool/result` - Derived result, if any
/// - `GET /api/toolkit/tools/:tool/report?format=json|text` - Download a report
pub fn toolkit_router() -> Router<ToolkitAppState> {
    Router::new()
        .route("/health", get(health))
        .route("/api/toolkit/state", get(get_state))
        .route("/api/toolkit/pages/:tool", get(open_page))
        .route("/api/toolkit/pages/:tool/events", post(dispatch_event))
        .route("/api/toolkit/tools/:tool/reset", post(reset_tool))
        .route("/api/toolkit/tools/:tool/result", get(get_result))
        .route("/api/toolkit/tools/:tool/report", get(download_report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::binder::{BinderSettings, DomBinder};
    use crate::adapters::export::{JsonReportExporter, TextReportExporter};
    use crate::adapters::storage::InMemoryStateStorage;
    use crate::application::{GenerateReportHandler, StateCoordinator, DEFAULT_STATE_KEY};
    use crate::domain::foundation::ToolKind;
    use crate::domain::toolkit::ToolkitState;
    use crate::ports::{ReportExporter, StateStorage, StateStorageError};
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    struct ReadOnlyStorage;

    #[async_trait]
    impl StateStorage for ReadOnlyStorage {
        async fn get_item(&self, _key: &str) -> Result<Option<String>, StateStorageError> {
            Ok(None)
        }

        async fn set_item(&self, _key: &str, _value: &str) -> Result<(), StateStorageError> {
            Err(StateStorageError::Unavailable("read-only".to_string()))
        }

        async fn remove_item(&self, _key: &str) -> Result<(), StateStorageError> {
            Err(StateStorageError::Unavailable("read-only".to_string()))
        }
    }

    fn app_state(pdf: bool) -> ToolkitAppState {
        app_state_on(Arc::new(InMemoryStateStorage::new()), pdf)
    }

    fn app_state_on(storage: Arc<dyn StateStorage>, pdf: bool) -> ToolkitAppState {
        let coordinator = Arc::new(StateCoordinator::new(storage, DEFAULT_STATE_KEY));
        let mut exporters: Vec<Arc<dyn ReportExporter>> = vec![Arc::new(JsonReportExporter::new())];
        if pdf {
            exporters.push(Arc::new(TextReportExporter::new()));
        }
        let reports = Arc::new(GenerateReportHandler::new(exporters));
        let binder = Arc::new(DomBinder::new(
            coordinator,
            reports.clone(),
            BinderSettings::default(),
        ));
        ToolkitAppState::new(ToolkitState::new(), binder, reports)
    }

    async fn send(app: &ToolkitAppState, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = toolkit_router()
            .with_state(app.clone())
            .oneshot(request)
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    fn click(tool: &str, element: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(format!("/api/toolkit/pages/{}/events", tool))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(format!(
                r#"{{"type":"click","element":"{}"}}"#,
                element
            )))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let (status, json) = send(&app_state(false), get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn opening_a_page_activates_the_tool() {
        let app = app_state(false);
        let (status, json) = send(&app, get("/api/toolkit/pages/roi")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["tool"], "roi");
        assert_eq!(app.state.lock().await.current_tool, ToolKind::Roi);
    }

    #[tokio::test]
    async fn unknown_tool_is_not_found() {
        let (status, json) = send(&app_state(false), get("/api/toolkit/pages/budget")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn click_event_updates_state() {
        let app = app_state(false);
        let (status, json) = send(&app, click("roi", "option-scope-department")).await;

        assert_eq!(status, StatusCode::OK);
        assert!(json["options"]
            .as_array()
            .unwrap()
            .iter()
            .any(|o| o["dom_id"] == "option-scope-department" && o["selected"] == true));
    }

    #[tokio::test]
    async fn unknown_element_is_bad_request() {
        let (status, json) = send(&app_state(false), click("roi", "btn-launch")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn report_for_incomplete_tool_is_conflict() {
        let (status, json) =
            send(&app_state(false), get("/api/toolkit/tools/roi/report?format=json")).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(json["code"], "TOOL_INCOMPLETE");
        assert_eq!(json["details"]["tool"], "roi");
    }

    #[tokio::test]
    async fn text_report_is_not_found_when_disabled() {
        let (status, _) =
            send(&app_state(false), get("/api/toolkit/tools/roi/report?format=text")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn completed_assessment_downloads_as_attachment() {
        let app = app_state(true);
        for n in 1..=5 {
            let (status, _) = send(&app, click("assessment", &format!("answer-data_readiness-{}-3", n))).await;
            assert_eq!(status, StatusCode::OK);
        }

        let response = toolkit_router()
            .with_state(app.clone())
            .oneshot(get("/api/toolkit/tools/assessment/report?format=text"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let disposition = response.headers()[header::CONTENT_DISPOSITION].to_str().unwrap();
        assert!(disposition.contains("MediaAI_Readiness_Assessment.txt"));
    }

    #[tokio::test]
    async fn reset_clears_selection() {
        let app = app_state(false);
        send(&app, click("architecture", "option-infrastructure-hybrid")).await;
        let (status, json) = send(
            &app,
            Request::builder()
                .method("POST")
                .uri("/api/toolkit/tools/architecture/reset")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(json["options"]
            .as_array()
            .unwrap()
            .iter()
            .all(|o| o["selected"] == false));
    }

    #[tokio::test]
    async fn reset_warns_when_state_cannot_be_saved() {
        let app = app_state_on(Arc::new(ReadOnlyStorage), false);
        let (status, json) = send(
            &app,
            Request::builder()
                .method("POST")
                .uri("/api/toolkit/tools/roi/reset")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let effects = json["effects"].as_array().unwrap();
        assert!(effects
            .iter()
            .any(|e| e["type"] == "toast" && e["kind"] == "warning"));
        assert!(effects
            .iter()
            .any(|e| e["type"] == "toast" && e["kind"] == "info"));
    }

    #[tokio::test]
    async fn state_endpoint_reports_progress() {
        let (status, json) = send(&app_state(false), get("/api/toolkit/state")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["completed_tools"], 0);
        assert_eq!(json["state"]["current_tool"], "assessment");
    }
}
