// Seam trait for the irradiance forecast endpoint
use crate::domain::forecast::IrradiancePoint;
use async_trait::async_trait;
use thiserror::Error;

/// Failures at the forecast-fetch boundary. Recoverable at fetch-cycle
/// granularity; never propagated past the forecast service.
#[derive(Debug, Error)]
pub enum ForecastError {
    #[error("forecast request failed: {0}")]
    Request(String),
    #[error("forecast endpoint returned status {0}")]
    Status(u16),
    #[error("forecast payload missing field {0}")]
    MissingField(&'static str),
    #[error("forecast payload malformed: {0}")]
    MalformedPayload(String),
}

#[async_trait]
pub trait ForecastProvider: Send + Sync {
    /// Fetch the hourly irradiance series for the configured location.
    async fn fetch_irradiance(&self) -> Result<Vec<IrradiancePoint>, ForecastError>;
}
