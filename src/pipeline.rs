//! Three-stage trip planning pipeline
//!
//! Strictly sequential: both cities are resolved before any weather call,
//! and both temperatures are fetched before generation. Clients are injected
//! by the driver; the pipeline owns no ambient state.

use tracing::{debug, warn};

use crate::Result;
use crate::advisor::{GroqClient, build_prompt};
use crate::config::GreenRouteConfig;
use crate::geocoding::GeocodingClient;
use crate::models::{Location, Temperature};
use crate::weather::WeatherClient;

/// The outcome of one pipeline invocation
#[derive(Debug, Clone)]
pub struct TripPlan {
    /// Resolved starting city
    pub start: Location,
    /// Resolved destination city
    pub destination: Location,
    /// Current temperature at the start, or unknown if retrieval failed
    pub start_temperature: Temperature,
    /// Current temperature at the destination, or unknown if retrieval failed
    pub destination_temperature: Temperature,
    /// The assembled prompt sent to the language model
    pub prompt: String,
    /// The generated advisory, verbatim
    pub advisory: String,
}

/// Orchestrates the geocoding, weather and advisory stages
pub struct TripPlanner {
    geocoder: GeocodingClient,
    weather: WeatherClient,
    advisor: GroqClient,
}

impl TripPlanner {
    /// Create a planner from explicitly constructed clients
    pub fn new(geocoder: GeocodingClient, weather: WeatherClient, advisor: GroqClient) -> Self {
        Self {
            geocoder,
            weather,
            advisor,
        }
    }

    /// Create a planner from configuration
    ///
    /// Builds one shared HTTP client for all three stages. Fails here, before
    /// any network call, when no Groq API key is configured.
    pub fn from_config(config: &GreenRouteConfig) -> Result<Self> {
        let client = reqwest::Client::new();
        let advisor = GroqClient::new(
            client.clone(),
            config.groq.api_key.clone(),
            &config.groq.base_url,
            &config.groq.model,
        )?;

        Ok(Self::new(
            GeocodingClient::new(client.clone(), &config.geocoding.base_url),
            WeatherClient::new(client, &config.weather.base_url),
            advisor,
        ))
    }

    /// Run the full pipeline for the two city names
    ///
    /// Resolution failure for either city halts the run before any
    /// later-stage network call. A weather failure degrades that city's
    /// temperature to unknown and the run continues. A generation failure
    /// is returned to the driver to surface.
    pub async fn plan(&self, start: &str, destination: &str) -> Result<TripPlan> {
        let start_location = self.geocoder.resolve(start).await?;
        let destination_location = self.geocoder.resolve(destination).await?;

        let start_temperature = self.temperature_for(&start_location).await;
        let destination_temperature = self.temperature_for(&destination_location).await;

        let prompt = build_prompt(
            &start_location.name,
            &destination_location.name,
            start_temperature,
            destination_temperature,
        );
        debug!(
            "Generating advisory for {} -> {}",
            start_location.name, destination_location.name
        );
        let advisory = self.advisor.complete(&prompt).await?;

        Ok(TripPlan {
            start: start_location,
            destination: destination_location,
            start_temperature,
            destination_temperature,
            prompt,
            advisory,
        })
    }

    async fn temperature_for(&self, location: &Location) -> Temperature {
        match self
            .weather
            .current_temperature(location.latitude, location.longitude)
            .await
        {
            Ok(celsius) => Temperature::Celsius(celsius),
            Err(err) => {
                warn!(
                    "Weather lookup for {} failed ({err}), continuing with unknown temperature",
                    location.name
                );
                Temperature::Unknown
            }
        }
    }
}
