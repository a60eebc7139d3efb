// HTTP request handlers
use crate::domain::snapshot::TelemetrySnapshot;
use crate::presentation::app_state::AppState;
use axum::{extract::State, Json};
use std::sync::Arc;

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Consistent view of the live telemetry and forecast state
pub async fn get_snapshot(State(state): State<Arc<AppState>>) -> Json<TelemetrySnapshot> {
    Json(state.store.snapshot().await)
}
