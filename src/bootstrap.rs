//! Composition root - wires adapters, handlers and the router from config.

use std::sync::Arc;
use std::time::Duration;

use axum::http::HeaderValue;
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::adapters::binder::{BinderSettings, DomBinder};
use crate::adapters::export::{JsonReportExporter, TextReportExporter};
use crate::adapters::http::{toolkit_router, ToolkitAppState};
use crate::adapters::storage::{FileStateStorage, InMemoryStateStorage};
use crate::application::{GenerateReportHandler, StateCoordinator};
use crate::config::{AppConfig, ServerConfig, StorageBackend};
use crate::ports::{ReportExporter, StateStorage};

/// Builds the storage adapter selected by `storage.backend`.
pub fn build_storage(config: &AppConfig) -> Arc<dyn StateStorage> {
    match config.storage.backend {
        StorageBackend::File => {
            tracing::info!(data_dir = %config.storage.data_dir.display(), "Using file state storage");
            Arc::new(FileStateStorage::new(&config.storage.data_dir))
        }
        StorageBackend::Memory => {
            tracing::info!("Using in-memory state storage");
            Arc::new(InMemoryStateStorage::new())
        }
    }
}

/// Registers the JSON exporter, plus the text exporter when PDF export is on.
pub fn build_report_handler(config: &AppConfig) -> GenerateReportHandler {
    let mut exporters: Vec<Arc<dyn ReportExporter>> = vec![Arc::new(JsonReportExporter::new())];
    if config.features.enable_pdf_export {
        exporters.push(Arc::new(TextReportExporter::new()));
    }
    GenerateReportHandler::new(exporters)
}

/// Loads the stored state and assembles the shared HTTP state.
pub async fn build_state(config: &AppConfig, storage: Arc<dyn StateStorage>) -> ToolkitAppState {
    let coordinator = Arc::new(StateCoordinator::new(storage, config.storage.state_key.clone()));
    let state = coordinator.load().await;
    let reports = Arc::new(build_report_handler(config));
    let binder = Arc::new(DomBinder::new(
        coordinator,
        reports.clone(),
        BinderSettings {
            autosave: config.features.autosave,
        },
    ));
    ToolkitAppState::new(state, binder, reports)
}

/// Toolkit routes with tracing, CORS and timeout layers.
pub fn build_router(state: ToolkitAppState, server: &ServerConfig) -> Router {
    toolkit_router()
        .with_state(state)
        .layer(TimeoutLayer::new(Duration::from_secs(server.request_timeout_secs)))
        .layer(cors_layer(server))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        if server.is_production() {
            CorsLayer::new()
        } else {
            CorsLayer::permissive()
        }
    } else {
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(tower_http::cors::Any)
            .allow_headers(tower_http::cors::Any)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Environment, StorageConfig};
    use crate::ports::ExportFormat;
    use axum::body::Body;
    use axum::http::{header, Request};
    use tower::ServiceExt;

    fn memory_config() -> AppConfig {
        AppConfig {
            storage: StorageConfig {
                backend: StorageBackend::Memory,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn pdf_flag_controls_text_exporter() {
        let mut config = memory_config();
        assert!(build_report_handler(&config).supports(ExportFormat::Text));

        config.features.enable_pdf_export = false;
        let handler = build_report_handler(&config);
        assert!(!handler.supports(ExportFormat::Text));
        assert!(handler.supports(ExportFormat::Json));
    }

    #[tokio::test]
    async fn build_state_starts_from_defaults() {
        let config = memory_config();
        let storage = build_storage(&config);
        let app = build_state(&config, storage).await;

        assert_eq!(app.state.lock().await.completed_count(), 0);
        assert!(app.binder.pdf_export_enabled());
    }

    async fn allowed_origin(server: ServerConfig, origin: &str) -> Option<String> {
        let config = AppConfig {
            server,
            ..memory_config()
        };
        let state = build_state(&config, build_storage(&config)).await;
        let request = Request::builder()
            .uri("/health")
            .header(header::ORIGIN, origin)
            .body(Body::empty())
            .unwrap();
        let response = build_router(state, &config.server)
            .oneshot(request)
            .await
            .unwrap();
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .map(|v| v.to_str().unwrap().to_string())
    }

    #[tokio::test]
    async fn only_configured_origins_are_allowed() {
        let server = ServerConfig {
            cors_origins: Some("http://localhost:5173, http://localhost:3000".to_string()),
            ..Default::default()
        };

        assert_eq!(
            allowed_origin(server.clone(), "http://localhost:3000").await.as_deref(),
            Some("http://localhost:3000")
        );
        assert_eq!(allowed_origin(server, "http://elsewhere.test").await, None);
    }

    #[tokio::test]
    async fn development_without_origins_allows_any() {
        let origin = allowed_origin(ServerConfig::default(), "http://elsewhere.test").await;
        assert_eq!(origin.as_deref(), Some("*"));
    }

    #[tokio::test]
    async fn production_without_origins_allows_none() {
        let server = ServerConfig {
            environment: Environment::Production,
            ..Default::default()
        };
        assert_eq!(allowed_origin(server, "http://localhost:5173").await, None);
    }
}
