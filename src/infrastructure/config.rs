use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub serial: SerialConfig,
    #[serde(default)]
    pub calibration: CalibrationConfig,
    #[serde(default)]
    pub panel: PanelConfig,
    #[serde(default)]
    pub history: HistoryConfig,
    #[serde(default)]
    pub forecast: ForecastConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SerialConfig {
    pub port: String,
    pub baud_rate: u32,
    pub read_timeout_ms: u64,
    pub frame_pause_ms: u64,
}

impl Default for SerialConfig {
    fn default() -> Self {
        Self {
            port: "/dev/ttyACM0".to_string(),
            baud_rate: 9600,
            read_timeout_ms: 1000,
            frame_pause_ms: 1000,
        }
    }
}

impl SerialConfig {
    pub fn read_timeout(&self) -> Duration {
        Duration::from_millis(self.read_timeout_ms)
    }

    pub fn frame_pause(&self) -> Duration {
        Duration::from_millis(self.frame_pause_ms)
    }
}

/// Voltage divider and scaling constants for the sensor board.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CalibrationConfig {
    pub voltage_reference: f64,
    pub divider_r1: f64,
    pub divider_r2: f64,
    pub power_scale: f64,
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self {
            voltage_reference: 5.0,
            divider_r1: 120.0,
            divider_r2: 220.0,
            power_scale: 10.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct PanelConfig {
    pub area_m2: f64,
    pub efficiency: f64,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            area_m2: 0.5,
            efficiency: 0.15,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct HistoryConfig {
    pub window: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self { window: 50 }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ForecastConfig {
    pub base_url: String,
    pub latitude: f64,
    pub longitude: f64,
    pub days: u8,
    pub refresh_secs: u64,
    pub timeout_secs: u64,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.open-meteo.com/v1/forecast".to_string(),
            latitude: 55.3333,
            longitude: 86.0833,
            days: 3,
            refresh_secs: 1800,
            timeout_secs: 10,
        }
    }
}

impl ForecastConfig {
    pub fn refresh(&self) -> Duration {
        Duration::from_secs(self.refresh_secs)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

pub fn load_config() -> anyhow::Result<AppConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/telemetry").required(false))
        .build()?;

    Ok(settings.try_deserialize()?)
}
