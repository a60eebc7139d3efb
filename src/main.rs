// Main entry point - Dependency injection and server setup
mod domain;
mod application;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::application::forecast_service::ForecastService;
use crate::application::ingest_service::IngestService;
use crate::application::telemetry_store::TelemetryStore;
use crate::domain::units::UnitConverter;
use crate::infrastructure::config::load_config;
use crate::infrastructure::open_meteo::OpenMeteoClient;
use crate::infrastructure::serial_source::SerialFrameSource;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{get_snapshot, health_check};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = load_config()?;

    // Shared store (application layer)
    let store = Arc::new(TelemetryStore::new(config.history.window));

    // Acquisition task: runs for as long as the serial link stays open.
    // A missing port is not fatal; the HTTP surface still serves the
    // (empty) snapshot and the forecast keeps refreshing.
    let converter = UnitConverter::new(
        config.calibration.voltage_reference,
        config.calibration.divider_r1,
        config.calibration.divider_r2,
        config.calibration.power_scale,
    );
    let ingest = IngestService::new(store.clone(), converter, config.serial.frame_pause());
    let serial_config = config.serial.clone();
    tokio::spawn(async move {
        match SerialFrameSource::open(&serial_config) {
            Ok(source) => ingest.run(source).await,
            Err(e) => tracing::error!("Serial port unavailable, live telemetry disabled: {}", e),
        }
    });

    // Forecast refresh task
    let provider = Arc::new(OpenMeteoClient::new(config.forecast.clone())?);
    let forecast = ForecastService::new(
        store.clone(),
        provider,
        config.panel.area_m2,
        config.panel.efficiency,
        config.forecast.refresh(),
    );
    tokio::spawn(forecast.run());

    // Create application state
    let state = Arc::new(AppState { store });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/snapshot", get(get_snapshot))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = "0.0.0.0:8080".parse().unwrap();
    println!("Starting solar-telemetry service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
