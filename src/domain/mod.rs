// Domain layer - Telemetry data models and unit conversions
pub mod forecast;
pub mod history;
pub mod sample;
pub mod snapshot;
pub mod units;
