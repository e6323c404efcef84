//! HTTP handlers for toolkit endpoints.
//!
//! Every handler works on the one shared `ToolkitState`, held behind a
//! single async mutex so page events apply in arrival order.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use tokio::sync::Mutex;

use crate::adapters::binder::{BinderError, DomBinder, UiEvent, ViewModel};
use crate::application::{GenerateReportError, GenerateReportHandler, GenerateReportQuery};
use crate::domain::foundation::ToolKind;
use crate::domain::report::ToolkitReport;
use crate::domain::toolkit::ToolkitState;
use crate::ports::{ExportError, ExportFormat};

use super::dto::{
    ErrorResponse, HealthResponse, ReportQuery, StateResponse, ToolResultResponse,
};

/// Application state for toolkit endpoints.
#[derive(Clone)]
pub struct ToolkitAppState {
    /// The shared toolkit record
    pub state: Arc<Mutex<ToolkitState>>,
    /// Event binder (owns the state coordinator)
    pub binder: Arc<DomBinder>,
    /// Report generation
    pub reports: Arc<GenerateReportHandler>,
}

impl ToolkitAppState {
    pub fn new(
        state: ToolkitState,
        binder: Arc<DomBinder>,
        reports: Arc<GenerateReportHandler>,
    ) -> Self {
        Self {
            state: Arc::new(Mutex::new(state)),
            binder,
            reports,
        }
    }
}

fn parse_tool(raw: &str) -> Result<ToolKind, ToolkitApiError> {
    raw.parse()
        .map_err(|_| ToolkitApiError::NotFound(format!("Tool not found: {}", raw)))
}

/// GET /health
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse::ok())
}

/// GET /api/toolkit/state
pub async fn get_state(State(app): State<ToolkitAppState>) -> impl IntoResponse {
    let state = app.state.lock().await.clone();
    Json(StateResponse::from(state))
}

/// GET /api/toolkit/pages/:tool - Opens a page and renders it
pub async fn open_page(
    State(app): State<ToolkitAppState>,
    Path(tool): Path<String>,
) -> Result<Json<ViewModel>, ToolkitApiError> {
    let tool = parse_tool(&tool)?;
    let mut state = app.state.lock().await;
    let view = app.binder.open_page(&mut state, tool).await;
    Ok(Json(view))
}

/// POST /api/toolkit/pages/:tool/events - Applies one page event
pub async fn dispatch_event(
    State(app): State<ToolkitAppState>,
    Path(tool): Path<String>,
    Json(event): Json<UiEvent>,
) -> Result<Json<ViewModel>, ToolkitApiError> {
    let tool = parse_tool(&tool)?;
    let mut state = app.state.lock().await;
    let view = app.binder.dispatch(&mut state, tool, event).await?;
    Ok(Json(view))
}

/// POST /api/toolkit/tools/:tool/reset
pub async fn reset_tool(
    State(app): State<ToolkitAppState>,
    Path(tool): Path<String>,
) -> Result<Json<ViewModel>, ToolkitApiError> {
    let tool = parse_tool(&tool)?;
    let mut state = app.state.lock().await;
    Ok(Json(app.binder.reset(&mut state, tool).await))
}

/// GET /api/toolkit/tools/:tool/result
pub async fn get_result(
    State(app): State<ToolkitAppState>,
    Path(tool): Path<String>,
) -> Result<Json<ToolResultResponse>, ToolkitApiError> {
    let tool = parse_tool(&tool)?;
    let state = app.state.lock().await;
    let wizard = state.wizard(tool);
    let result = ToolkitReport::build(&state, tool).ok().map(|r| r.body);

    Ok(Json(ToolResultResponse {
        tool,
        complete: wizard.is_complete(),
        missing_fields: wizard.missing_fields(),
        result,
    }))
}

/// GET /api/toolkit/tools/:tool/report?format=json|text
pub async fn download_report(
    State(app): State<ToolkitAppState>,
    Path(tool): Path<String>,
    Query(query): Query<ReportQuery>,
) -> Result<impl IntoResponse, ToolkitApiError> {
    let tool = parse_tool(&tool)?;
    let format: ExportFormat = query.format.parse()?;

    let exported = {
        let state = app.state.lock().await;
        app.reports
            .handle(&state, GenerateReportQuery { tool, format })
            .await?
    };

    tracing::info!(
        tool = %tool,
        format = %format,
        filename = %exported.filename,
        "Report downloaded"
    );

    let disposition = format!("attachment; filename=\"{}\"", exported.filename);
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, exported.content_type),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        exported.content,
    ))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts toolkit errors to HTTP responses.
#[derive(Debug)]
pub enum ToolkitApiError {
    BadRequest(String),
    NotFound(String),
    Incomplete(ErrorResponse),
    Internal(String),
}

impl From<BinderError> for ToolkitApiError {
    fn from(err: BinderError) -> Self {
        ToolkitApiError::BadRequest(err.to_string())
    }
}

impl From<ExportError> for ToolkitApiError {
    fn from(err: ExportError) -> Self {
        match err {
            ExportError::UnsupportedFormat(_) => ToolkitApiError::BadRequest(err.to_string()),
            ExportError::Unavailable(_) => ToolkitApiError::NotFound(err.to_string()),
            ExportError::SerializationFailed(_) => ToolkitApiError::Internal(err.to_string()),
        }
    }
}

impl From<GenerateReportError> for ToolkitApiError {
    fn from(err: GenerateReportError) -> Self {
        match err {
            GenerateReportError::Incomplete(e) => ToolkitApiError::Incomplete(ErrorResponse::from(&e)),
            GenerateReportError::Export(e) => e.into(),
        }
    }
}

impl IntoResponse for ToolkitApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ToolkitApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(msg))
            }
            ToolkitApiError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                ErrorResponse {
                    code: "NOT_FOUND".to_string(),
                    message: msg,
                    details: None,
                },
            ),
            ToolkitApiError::Incomplete(error) => (StatusCode::CONFLICT, error),
            ToolkitApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Toolkit request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::internal(msg))
            }
        };

        (status, Json(error)).into_response()
    }
}
