//! Current-conditions client for the Open-Meteo forecast API

use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

use crate::Result;
use crate::config::WeatherConfig;
use crate::error::TripCastError;
use crate::models::CurrentConditions;

/// Current weather lookup at a coordinate
#[async_trait]
pub trait CurrentWeatherLookup: Send + Sync {
    /// Fetch the current conditions at a coordinate
    async fn current(&self, latitude: f64, longitude: f64) -> Result<CurrentConditions>;
}

/// Open-Meteo forecast API client
pub struct WeatherClient {
    /// HTTP client
    client: Client,
    /// API configuration
    config: WeatherConfig,
}

impl WeatherClient {
    /// Create a new weather client
    pub fn new(config: WeatherConfig) -> anyhow::Result<Self> {
        let timeout = Duration::from_secs(config.timeout_seconds.into());

        let client = Client::builder()
            .timeout(timeout)
            .user_agent("TripCast/0.1.0")
            .build()
            .with_context(|| "Failed to create HTTP client")?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl CurrentWeatherLookup for WeatherClient {
    async fn current(&self, latitude: f64, longitude: f64) -> Result<CurrentConditions> {
        let url = format!(
            "{}/forecast?latitude={}&longitude={}&current=temperature_2m,rain,wind_speed_10m",
            self.config.base_url, latitude, longitude
        );

        debug!("Open-Meteo forecast request: {}", url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            warn!(
                "Weather request for ({:.4}, {:.4}) failed: {}",
                latitude, longitude, e
            );
            TripCastError::upstream("Weather", e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(
                "Weather request for ({:.4}, {:.4}) returned {}",
                latitude, longitude, status
            );
            return Err(TripCastError::upstream(
                "Weather",
                format!("unexpected status {status}"),
            ));
        }

        let forecast_response: open_meteo::ForecastResponse =
            response.json().await.map_err(|e| {
                warn!("Failed to parse weather response: {}", e);
                TripCastError::upstream("Weather", "invalid response body")
            })?;

        Ok(forecast_response.into_current_conditions())
    }
}

/// Open-Meteo forecast response structures and conversion utilities
mod open_meteo {
    use serde::Deserialize;

    use crate::models::CurrentConditions;

    /// Current weather response from Open-Meteo
    #[derive(Debug, Deserialize)]
    pub struct ForecastResponse {
        pub current: Option<CurrentData>,
    }

    /// Current readings, each optional on the wire
    #[derive(Debug, Default, Deserialize)]
    pub struct CurrentData {
        pub temperature_2m: Option<f64>,
        pub rain: Option<f64>,
        pub wind_speed_10m: Option<f64>,
    }

    impl ForecastResponse {
        /// Missing readings default to 0 rather than failing the request
        pub fn into_current_conditions(self) -> CurrentConditions {
            let current = self.current.unwrap_or_default();
            CurrentConditions {
                temperature_c: current.temperature_2m.unwrap_or(0.0),
                wind_speed: current.wind_speed_10m.unwrap_or(0.0),
                rainfall: current.rain.unwrap_or(0.0),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::open_meteo::ForecastResponse;

    #[test]
    fn test_parse_forecast_response() {
        let body = r#"{
            "latitude": 41.7,
            "longitude": -71.42,
            "current": {
                "time": "2024-05-01T12:00",
                "temperature_2m": 18.4,
                "rain": 0.2,
                "wind_speed_10m": 11.3
            }
        }"#;

        let parsed: ForecastResponse = serde_json::from_str(body).unwrap();
        let conditions = parsed.into_current_conditions();

        assert_eq!(conditions.temperature_c, 18.4);
        assert_eq!(conditions.rainfall, 0.2);
        assert_eq!(conditions.wind_speed, 11.3);
    }

    #[test]
    fn test_missing_readings_default_to_zero() {
        let body = r#"{"current": {"temperature_2m": 21.0}}"#;

        let parsed: ForecastResponse = serde_json::from_str(body).unwrap();
        let conditions = parsed.into_current_conditions();

        assert_eq!(conditions.temperature_c, 21.0);
        assert_eq!(conditions.rainfall, 0.0);
        assert_eq!(conditions.wind_speed, 0.0);
    }

    #[test]
    fn test_missing_current_block_defaults_to_zero() {
        let parsed: ForecastResponse = serde_json::from_str("{}").unwrap();
        let conditions = parsed.into_current_conditions();

        assert_eq!(conditions.temperature_c, 0.0);
        assert_eq!(conditions.rainfall, 0.0);
        assert_eq!(conditions.wind_speed, 0.0);
    }
}
