//! Open-Meteo geocoding client
//!
//! Resolves free-text city names into coordinates. The Open-Meteo geocoding
//! API requires no API key. A name that produces no results is reported as
//! `NoMatch`, distinct from transport failures, so callers can tell
//! "city does not exist" apart from "network is down".

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::models::Location;

/// Default base URL for the Open-Meteo geocoding API
pub const DEFAULT_BASE_URL: &str = "https://geocoding-api.open-meteo.com/v1";

/// Coordinate resolution errors
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// The geocoder returned no results for the given name
    #[error("no match for city '{city}'")]
    NoMatch { city: String },

    /// The request or response decoding failed
    #[error("geocoding request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// HTTP client for the Open-Meteo geocoding API
#[derive(Debug, Clone)]
pub struct GeocodingClient {
    client: Client,
    base_url: String,
}

impl GeocodingClient {
    /// Create a new geocoding client against the given base URL
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Resolve a city name to its best-matching location
    ///
    /// A single attempt, no retry. The first (best) result is used.
    pub async fn resolve(&self, city: &str) -> Result<Location, GeocodeError> {
        let url = format!(
            "{}/search?name={}&count=1&language=en&format=json",
            self.base_url,
            urlencoding::encode(city)
        );
        debug!("Geocoding city name: {}", city);

        let response: GeocodingResponse = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let location = response
            .results
            .unwrap_or_default()
            .into_iter()
            .next()
            .map(Location::from)
            .ok_or_else(|| GeocodeError::NoMatch {
                city: city.to_string(),
            })?;

        debug!(
            "Resolved '{}' to {} at ({}, {})",
            city, location.name, location.latitude, location.longitude
        );
        Ok(location)
    }
}

/// Geocoding response from `OpenMeteo`
#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    results: Option<Vec<GeocodingResult>>,
}

#[derive(Debug, Deserialize)]
struct GeocodingResult {
    name: String,
    latitude: f64,
    longitude: f64,
    country: Option<String>,
}

impl From<GeocodingResult> for Location {
    fn from(result: GeocodingResult) -> Self {
        Location {
            latitude: result.latitude,
            longitude: result.longitude,
            name: result.name,
            country: result.country,
        }
    }
}
