// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod open_meteo;
pub mod serial_source;
