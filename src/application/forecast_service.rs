// Forecast refresh loop - turns irradiance forecasts into expected panel power
use crate::application::forecast_provider::ForecastProvider;
use crate::application::telemetry_store::TelemetryStore;
use crate::domain::forecast::{ForecastPoint, IrradiancePoint};
use std::sync::Arc;
use std::time::Duration;

/// Periodically pulls an irradiance forecast and publishes the derived
/// expected-power series. A failed refresh keeps the previous series in
/// place; the store is only touched on success.
pub struct ForecastService {
    store: Arc<TelemetryStore>,
    provider: Arc<dyn ForecastProvider>,
    panel_area_m2: f64,
    panel_efficiency: f64,
    refresh: Duration,
}

impl ForecastService {
    pub fn new(
        store: Arc<TelemetryStore>,
        provider: Arc<dyn ForecastProvider>,
        panel_area_m2: f64,
        panel_efficiency: f64,
        refresh: Duration,
    ) -> Self {
        Self {
            store,
            provider,
            panel_area_m2,
            panel_efficiency,
            refresh,
        }
    }

    /// Refresh immediately, then on every interval tick.
    pub async fn run(self) {
        let mut interval = tokio::time::interval(self.refresh);
        loop {
            interval.tick().await;
            self.refresh_once().await;
        }
    }

    pub async fn refresh_once(&self) {
        match self.provider.fetch_irradiance().await {
            Ok(series) => {
                let series = self.to_power_series(series);
                tracing::info!("Forecast refreshed with {} points", series.len());
                self.store.replace_forecast(series).await;
            }
            Err(e) => {
                tracing::warn!("Forecast refresh failed, keeping previous series: {}", e);
            }
        }
    }

    fn to_power_series(&self, series: Vec<IrradiancePoint>) -> Vec<ForecastPoint> {
        let mut points: Vec<ForecastPoint> = series
            .into_iter()
            .map(|p| {
                ForecastPoint::new(
                    p.time,
                    p.irradiance * self.panel_area_m2 * self.panel_efficiency,
                )
            })
            .collect();
        points.sort_by_key(|p| p.time);
        points
    }
}
