// Main entry point - Dependency injection and server setup
mod domain;
mod application;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::application::footprint_service::FootprintService;
use crate::infrastructure::config::{load_presets_config, load_server_config, PresetCatalog};
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{calculate_report, get_preset, health_check, list_presets};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let server_config = load_server_config()?;
    let presets_config = load_presets_config()?;

    // Create application state
    let state = Arc::new(AppState {
        footprint_service: FootprintService::new(),
        preset_catalog: PresetCatalog::new(presets_config),
    });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/presets", get(list_presets))
        .route("/presets/:tag", get(get_preset))
        .route("/reports", post(calculate_report))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = format!(
        "{}:{}",
        server_config.server.host, server_config.server.port
    )
    .parse()?;
    println!("Starting network-footprint service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
