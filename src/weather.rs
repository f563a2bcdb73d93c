//! Open-Meteo current-weather client

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Default base URL for the Open-Meteo forecast API
pub const DEFAULT_BASE_URL: &str = "https://api.open-meteo.com/v1";

/// Weather retrieval errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The request or response decoding failed
    #[error("weather request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The response body carried no current-conditions object
    #[error("weather response missing current conditions")]
    MissingCurrentWeather,
}

/// HTTP client for the Open-Meteo forecast API
#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: Client,
    base_url: String,
}

impl WeatherClient {
    /// Create a new weather client against the given base URL
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Fetch the current temperature in degrees Celsius for the coordinates
    ///
    /// A single attempt, no retry. Extracts `current_weather.temperature`
    /// from the JSON body.
    pub async fn current_temperature(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<f64, WeatherError> {
        let url = format!(
            "{}/forecast?latitude={latitude}&longitude={longitude}&current_weather=true",
            self.base_url
        );
        debug!("Fetching current weather for ({}, {})", latitude, longitude);

        let response: ForecastResponse = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        response
            .current_weather
            .map(|current| current.temperature)
            .ok_or(WeatherError::MissingCurrentWeather)
    }
}

/// Current weather response from `OpenMeteo`
#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current_weather: Option<CurrentWeather>,
}

#[derive(Debug, Deserialize)]
struct CurrentWeather {
    temperature: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_weather_deserialization() {
        let body = r#"{"latitude":19.0,"longitude":72.9,"current_weather":{"temperature":31.5,"windspeed":4.2,"weathercode":1}}"#;
        let response: ForecastResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.current_weather.unwrap().temperature, 31.5);
    }

    #[test]
    fn test_missing_current_weather_field() {
        let response: ForecastResponse =
            serde_json::from_str(r#"{"latitude":19.0,"longitude":72.9}"#).unwrap();
        assert!(response.current_weather.is_none());
    }
}
