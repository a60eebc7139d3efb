// Snapshot read model exposed to the presentation layer
use super::forecast::ForecastPoint;
use super::sample::Sample;
use serde::Serialize;

/// A single consistent view of current, historical, and forecast state.
///
/// `current` is `None` until the first frame has been ingested — never a
/// zero placeholder. Histories are oldest-first and advance in lock-step,
/// one element per successfully parsed frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TelemetrySnapshot {
    pub current: Option<Sample>,
    pub mode: String,
    pub voltage_history: Vec<f64>,
    pub power_history: Vec<f64>,
    pub illuminance_history: Vec<u16>,
    pub forecast: Vec<ForecastPoint>,
}

impl TelemetrySnapshot {
    pub fn new(
        current: Option<Sample>,
        mode: String,
        voltage_history: Vec<f64>,
        power_history: Vec<f64>,
        illuminance_history: Vec<u16>,
        forecast: Vec<ForecastPoint>,
    ) -> Self {
        Self {
            current,
            mode,
            voltage_history,
            power_history,
            illuminance_history,
            forecast,
        }
    }
}
