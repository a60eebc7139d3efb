// Open-Meteo client - hourly shortwave irradiance forecasts over HTTP
use crate::application::forecast_provider::{ForecastError, ForecastProvider};
use crate::domain::forecast::IrradiancePoint;
use crate::infrastructure::config::ForecastConfig;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;

pub struct OpenMeteoClient {
    client: reqwest::Client,
    config: ForecastConfig,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    hourly: Option<HourlyBlock>,
}

#[derive(Debug, Deserialize)]
struct HourlyBlock {
    time: Option<Vec<String>>,
    shortwave_radiation: Option<Vec<f64>>,
}

impl OpenMeteoClient {
    pub fn new(config: ForecastConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;

        Ok(Self { client, config })
    }

    fn request(&self) -> reqwest::RequestBuilder {
        self.client.get(&self.config.base_url).query(&[
            ("latitude", self.config.latitude.to_string()),
            ("longitude", self.config.longitude.to_string()),
            ("hourly", "shortwave_radiation".to_string()),
            ("forecast_days", self.config.days.to_string()),
            ("timezone", "UTC".to_string()),
        ])
    }
}

#[async_trait]
impl ForecastProvider for OpenMeteoClient {
    async fn fetch_irradiance(&self) -> Result<Vec<IrradiancePoint>, ForecastError> {
        let response = self
            .request()
            .send()
            .await
            .map_err(|e| ForecastError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ForecastError::Status(status.as_u16()));
        }

        let payload = response
            .json::<ForecastResponse>()
            .await
            .map_err(|e| ForecastError::MalformedPayload(e.to_string()))?;

        parse_hourly(payload)
    }
}

fn parse_hourly(response: ForecastResponse) -> Result<Vec<IrradiancePoint>, ForecastError> {
    let hourly = response.hourly.ok_or(ForecastError::MissingField("hourly"))?;
    let times = hourly.time.ok_or(ForecastError::MissingField("hourly.time"))?;
    let values = hourly
        .shortwave_radiation
        .ok_or(ForecastError::MissingField("hourly.shortwave_radiation"))?;

    // Zip truncates to the shorter list when the API returns ragged arrays.
    times
        .iter()
        .zip(values)
        .map(|(time, irradiance)| {
            let time = parse_forecast_time(time)?;
            Ok(IrradiancePoint::new(time, irradiance))
        })
        .collect()
}

// Open-Meteo returns local-naive timestamps; we request UTC so the naive
// value is taken as UTC directly. Seconds are optional in the payload.
fn parse_forecast_time(text: &str) -> Result<DateTime<Utc>, ForecastError> {
    NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S"))
        .map(|naive| naive.and_utc())
        .map_err(|_| ForecastError::MalformedPayload(format!("bad timestamp: {text}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn response(json: &str) -> ForecastResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_parse_hourly_pairs_times_with_irradiance() {
        let parsed = parse_hourly(response(
            r#"{"hourly": {"time": ["2024-06-01T00:00", "2024-06-01T01:00"],
                "shortwave_radiation": [0.0, 125.5]}}"#,
        ))
        .unwrap();

        assert_eq!(
            parsed,
            vec![
                IrradiancePoint::new(Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap(), 0.0),
                IrradiancePoint::new(Utc.with_ymd_and_hms(2024, 6, 1, 1, 0, 0).unwrap(), 125.5),
            ]
        );
    }

    #[test]
    fn test_parse_hourly_truncates_to_the_shorter_array() {
        let parsed = parse_hourly(response(
            r#"{"hourly": {"time": ["2024-06-01T00:00", "2024-06-01T01:00", "2024-06-01T02:00"],
                "shortwave_radiation": [10.0, 20.0]}}"#,
        ))
        .unwrap();

        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[1].irradiance, 20.0);
    }

    #[test]
    fn test_parse_hourly_reports_missing_blocks() {
        let err = parse_hourly(response(r#"{}"#)).unwrap_err();
        assert!(matches!(err, ForecastError::MissingField("hourly")));

        let err = parse_hourly(response(r#"{"hourly": {"time": ["2024-06-01T00:00"]}}"#))
            .unwrap_err();
        assert!(matches!(
            err,
            ForecastError::MissingField("hourly.shortwave_radiation")
        ));

        let err = parse_hourly(response(r#"{"hourly": {"shortwave_radiation": [1.0]}}"#))
            .unwrap_err();
        assert!(matches!(err, ForecastError::MissingField("hourly.time")));
    }

    #[test]
    fn test_parse_forecast_time_accepts_both_precisions() {
        let minute = parse_forecast_time("2024-06-01T12:30").unwrap();
        let second = parse_forecast_time("2024-06-01T12:30:00").unwrap();
        assert_eq!(minute, second);
        assert_eq!(minute, Utc.with_ymd_and_hms(2024, 6, 1, 12, 30, 0).unwrap());
    }

    #[test]
    fn test_parse_forecast_time_rejects_garbage() {
        let err = parse_forecast_time("yesterday-ish").unwrap_err();
        assert!(matches!(err, ForecastError::MalformedPayload(_)));
    }

    #[test]
    fn test_request_carries_forecast_query_parameters() {
        let client = OpenMeteoClient::new(ForecastConfig::default()).unwrap();
        let request = client.request().build().unwrap();
        let url = request.url();

        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert!(pairs.contains(&("latitude".to_string(), "55.3333".to_string())));
        assert!(pairs.contains(&("longitude".to_string(), "86.0833".to_string())));
        assert!(pairs.contains(&("hourly".to_string(), "shortwave_radiation".to_string())));
        assert!(pairs.contains(&("forecast_days".to_string(), "3".to_string())));
        assert!(pairs.contains(&("timezone".to_string(), "UTC".to_string())));
        assert!(url
            .as_str()
            .starts_with("https://api.open-meteo.com/v1/forecast"));
    }
}
