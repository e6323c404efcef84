//! MediaAI Toolkit server binary.

use std::error::Error;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use mediaai_toolkit::bootstrap::{build_router, build_state, build_storage};
use mediaai_toolkit::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config);
    config.validate()?;

    tracing::info!(
        environment = ?config.server.environment,
        backend = ?config.storage.backend,
        pdf_export = config.features.enable_pdf_export,
        autosave = config.features.autosave,
        "Starting MediaAI Toolkit"
    );

    let storage = build_storage(&config);
    let app_state = build_state(&config, storage).await;
    let router = build_router(app_state.clone(), &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Same as a page unload: flush whatever is in memory.
    let state = app_state.state.lock().await;
    let outcome = app_state.binder.coordinator().save(&state).await;
    tracing::info!(persisted = outcome.is_persisted(), "Shut down");

    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.features.json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer())
            .init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
