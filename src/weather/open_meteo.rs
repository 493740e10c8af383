//! Open-Meteo current-conditions client
//!
//! Open-Meteo needs no API key. Only the `current` block of the forecast
//! endpoint is requested, with wind speed in m/s.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info, instrument, warn};

use super::WeatherProvider;
use crate::config::WeatherConfig;
use crate::models::{Place, WeatherReading};
use crate::{Result, SunshineError};

const CURRENT_FIELDS: &str =
    "temperature_2m,apparent_temperature,relative_humidity_2m,wind_speed_10m,weather_code";

/// Forecast response from `OpenMeteo`, reduced to the current block
#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current: Option<CurrentData>,
}

/// Current weather data from `OpenMeteo`
#[derive(Debug, Deserialize)]
struct CurrentData {
    #[serde(rename = "temperature_2m")]
    temperature: f64,
    apparent_temperature: f64,
    #[serde(rename = "relative_humidity_2m")]
    relative_humidity: u8,
    #[serde(rename = "wind_speed_10m")]
    wind_speed: f64,
    weather_code: u8,
}

impl From<CurrentData> for WeatherReading {
    fn from(current: CurrentData) -> Self {
        Self {
            temperature: current.temperature,
            apparent_temperature: current.apparent_temperature,
            relative_humidity: current.relative_humidity,
            wind_speed: current.wind_speed,
            weather_code: current.weather_code,
        }
    }
}

/// [`WeatherProvider`] backed by the Open-Meteo forecast API
pub struct OpenMeteoClient {
    client: Client,
    base_url: String,
}

impl OpenMeteoClient {
    /// Create a new client from the weather configuration
    pub fn new(config: &WeatherConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .user_agent(concat!("sunshine/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn current_url(&self, place: &Place) -> String {
        format!(
            "{}/forecast?latitude={}&longitude={}&current={}&wind_speed_unit=ms&timezone=auto",
            self.base_url,
            place.latitude(),
            place.longitude(),
            CURRENT_FIELDS
        )
    }
}

#[async_trait]
impl WeatherProvider for OpenMeteoClient {
    #[instrument(name = "fetch_current_weather", skip(self), fields(place = %place.name()))]
    async fn fetch_current(&self, place: &Place) -> Result<WeatherReading> {
        let url = self.current_url(place);
        debug!("OpenMeteo API request URL: {}", url);
        let start_time = Instant::now();

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| SunshineError::upstream(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SunshineError::upstream(format!(
                "OpenMeteo returned status {status} for {}",
                place.format_coordinates()
            )));
        }

        let body: ForecastResponse = response.json().await.map_err(|e| {
            SunshineError::upstream(format!("invalid weather data from OpenMeteo: {e}"))
        })?;

        let current = body.current.ok_or_else(|| {
            SunshineError::upstream(format!(
                "no current weather data available for {}",
                place.format_coordinates()
            ))
        })?;

        let elapsed = start_time.elapsed();
        info!(
            "Retrieved current weather for {} in {:.3}s",
            place.name(),
            elapsed.as_secs_f64()
        );
        if elapsed.as_secs() > 5 {
            warn!("Slow API response detected: {:.3}s", elapsed.as_secs_f64());
        }

        Ok(current.into())
    }
}
