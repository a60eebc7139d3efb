// Shared telemetry state - the single synchronization point
use crate::domain::forecast::ForecastPoint;
use crate::domain::history::HistoryBuffer;
use crate::domain::sample::{Sample, UNKNOWN_MODE};
use crate::domain::snapshot::TelemetrySnapshot;
use tokio::sync::RwLock;

/// Aggregates the current sample, the per-metric histories, and the forecast
/// series behind one lock, so a reader never observes a torn write.
///
/// All mutation goes through [`record_sample`](Self::record_sample) and
/// [`replace_forecast`](Self::replace_forecast); critical sections are short
/// so readers never starve writers.
pub struct TelemetryStore {
    state: RwLock<StoreState>,
}

struct StoreState {
    current: Option<Sample>,
    mode: String,
    voltage_history: HistoryBuffer<f64>,
    power_history: HistoryBuffer<f64>,
    illuminance_history: HistoryBuffer<u16>,
    forecast: Vec<ForecastPoint>,
}

impl TelemetryStore {
    pub fn new(history_window: usize) -> Self {
        Self {
            state: RwLock::new(StoreState {
                current: None,
                mode: UNKNOWN_MODE.to_string(),
                voltage_history: HistoryBuffer::new(history_window),
                power_history: HistoryBuffer::new(history_window),
                illuminance_history: HistoryBuffer::new(history_window),
                forecast: Vec::new(),
            }),
        }
    }

    /// Publish one converted sample: appends one element to each of the
    /// three histories and overwrites `current` and `mode`, all in a single
    /// critical section.
    pub async fn record_sample(&self, sample: Sample, mode: String) {
        let mut state = self.state.write().await;
        state.voltage_history.push(sample.voltage);
        state.power_history.push(sample.power);
        state.illuminance_history.push(sample.illuminance);
        state.mode = mode;
        state.current = Some(sample);
    }

    /// Swap in a freshly fetched forecast series wholesale; the prior series
    /// is discarded in the same critical section.
    pub async fn replace_forecast(&self, series: Vec<ForecastPoint>) {
        let mut state = self.state.write().await;
        state.forecast = series;
    }

    /// A consistent copy of the full state.
    pub async fn snapshot(&self) -> TelemetrySnapshot {
        let state = self.state.read().await;
        TelemetrySnapshot::new(
            state.current.clone(),
            state.mode.clone(),
            state.voltage_history.to_vec(),
            state.power_history.to_vec(),
            state.illuminance_history.to_vec(),
            state.forecast.clone(),
        )
    }
}
