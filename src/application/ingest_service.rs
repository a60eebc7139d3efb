// Acquisition loop - decodes raw frames and publishes converted samples
use crate::application::frame_source::{FrameSource, SourceError};
use crate::application::telemetry_store::TelemetryStore;
use crate::domain::sample::{RawFrame, Sample};
use crate::domain::units::UnitConverter;
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("frame decode failed: {0}")]
pub struct FrameDecodeError(#[from] serde_json::Error);

/// Decode one line of frame text. Unknown keys are ignored, absent keys take
/// their defaults; anything that is not a JSON object of the expected shape
/// is an error.
pub fn decode_frame(line: &str) -> Result<RawFrame, FrameDecodeError> {
    Ok(serde_json::from_str(line)?)
}

/// Drains a [`FrameSource`], converting each well-formed frame to physical
/// units and recording it in the store. Malformed frames and transient read
/// errors are logged and skipped; the loop only ends when the source closes.
pub struct IngestService {
    store: Arc<TelemetryStore>,
    converter: UnitConverter,
    frame_pause: Duration,
}

impl IngestService {
    pub fn new(store: Arc<TelemetryStore>, converter: UnitConverter, frame_pause: Duration) -> Self {
        Self {
            store,
            converter,
            frame_pause,
        }
    }

    pub async fn run<S: FrameSource>(self, mut source: S) {
        loop {
            match source.next_line().await {
                Ok(Some(line)) => {
                    match decode_frame(&line) {
                        Ok(frame) => self.ingest(frame).await,
                        Err(e) => tracing::warn!("Skipping malformed frame '{}': {}", line, e),
                    }
                    tokio::time::sleep(self.frame_pause).await;
                }
                Ok(None) => continue,
                Err(SourceError::Closed) => {
                    tracing::info!("Frame source closed, stopping ingest");
                    return;
                }
                Err(e) => {
                    tracing::warn!("Frame read failed: {}", e);
                    tokio::time::sleep(self.frame_pause).await;
                }
            }
        }
    }

    async fn ingest(&self, frame: RawFrame) {
        let voltage = self.converter.voltage(frame.voltage_raw);
        let power = self.converter.power(voltage, frame.illuminance_raw);
        let sample = Sample::new(voltage, frame.illuminance_raw, power, Utc::now());
        tracing::debug!(
            "Recorded sample: {:.3} V, {:.3} W, mode {}",
            sample.voltage,
            sample.power,
            frame.mode
        );
        self.store.record_sample(sample, frame.mode).await;
    }
}
