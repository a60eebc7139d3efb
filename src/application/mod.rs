// Application layer - Acquisition services and the shared store
pub mod forecast_provider;
pub mod forecast_service;
pub mod frame_source;
pub mod ingest_service;
pub mod telemetry_store;
