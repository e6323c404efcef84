//! Data transfer objects for toolkit HTTP endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ToolKind};
use crate::domain::report::ReportBody;
use crate::domain::toolkit::ToolkitState;

// ═══════════════════════════════════════════════════════════════════════════
// Request DTOs
// ═══════════════════════════════════════════════════════════════════════════

/// Query parameters for report downloads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportQuery {
    /// Export format: "json" or "text"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "json".to_string()
}

// ═══════════════════════════════════════════════════════════════════════════
// Response DTOs
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Whole shared state plus a progress summary.
#[derive(Debug, Clone, Serialize)]
pub struct StateResponse {
    pub completed_tools: usize,
    pub total_tools: usize,
    pub state: ToolkitState,
}

impl From<ToolkitState> for StateResponse {
    fn from(state: ToolkitState) -> Self {
        Self {
            completed_tools: state.completed_count(),
            total_tools: ToolKind::all().len(),
            state,
        }
    }
}

/// One tool's derived result, if it has one.
#[derive(Debug, Clone, Serialize)]
pub struct ToolResultResponse {
    pub tool: ToolKind,
    pub complete: bool,
    pub missing_fields: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<ReportBody>,
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: format!("{} not found: {}", resource_type, id),
            details: None,
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self {
            code: "CONFLICT".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

impl From<&DomainError> for ErrorResponse {
    fn from(err: &DomainError) -> Self {
        let details = serde_json::to_value(&err.details).ok();
        Self {
            code: err.code.to_string(),
            message: err.message.clone(),
            details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;

    #[test]
    fn report_query_defaults_to_json() {
        let query: ReportQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.format, "json");
    }

    #[test]
    fn state_response_counts_completed_tools() {
        let response = StateResponse::from(ToolkitState::new());
        assert_eq!(response.completed_tools, 0);
        assert_eq!(response.total_tools, 4);
    }

    #[test]
    fn error_response_from_domain_error_keeps_details() {
        let err = DomainError::new(ErrorCode::ToolIncomplete, "ROI Calculator is not complete")
            .with_detail("tool", "roi");
        let response = ErrorResponse::from(&err);

        assert_eq!(response.code, ErrorCode::ToolIncomplete.to_string());
        assert_eq!(response.details.unwrap()["tool"], "roi");
    }

    #[test]
    fn error_response_not_found_creates_correctly() {
        let error = ErrorResponse::not_found("Tool", "budget");
        assert_eq!(error.code, "NOT_FOUND");
        assert!(error.message.contains("budget"));
    }
}
