// Sensor frame and sample domain models
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Mode label reported before the rig has identified one.
pub const UNKNOWN_MODE: &str = "UNKNOWN";

/// One frame as decoded from a sensor line.
///
/// Every field is optional on the wire; absent fields fall back to `0` and
/// `"UNKNOWN"`. Raw codes are 10-bit ADC readings, nominally 0..=1023.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawFrame {
    #[serde(default)]
    pub voltage_raw: u16,
    #[serde(default)]
    pub illuminance_raw: u16,
    #[serde(default = "default_mode")]
    pub mode: String,
}

fn default_mode() -> String {
    UNKNOWN_MODE.to_string()
}

/// A frame after unit conversion, timestamped at ingest. Immutable once
/// created.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sample {
    /// Panel voltage in volts.
    pub voltage: f64,
    /// Illuminance in raw ADC units.
    pub illuminance: u16,
    /// Derived output power in watts.
    pub power: f64,
    pub timestamp: DateTime<Utc>,
}

impl Sample {
    pub fn new(voltage: f64, illuminance: u16, power: f64, timestamp: DateTime<Utc>) -> Self {
        Self {
            voltage,
            illuminance,
            power,
            timestamp,
        }
    }
}
