// Forecast domain models
use chrono::{DateTime, Utc};
use serde::Serialize;

/// One (timestamp, irradiance) pair as served by the forecast endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct IrradiancePoint {
    pub time: DateTime<Utc>,
    /// Shortwave radiation in W/m².
    pub irradiance: f64,
}

impl IrradiancePoint {
    pub fn new(time: DateTime<Utc>, irradiance: f64) -> Self {
        Self { time, irradiance }
    }
}

/// Expected panel output at one forecast hour.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastPoint {
    pub time: DateTime<Utc>,
    pub power_w: f64,
}

impl ForecastPoint {
    pub fn new(time: DateTime<Utc>, power_w: f64) -> Self {
        Self { time, power_w }
    }
}
