//! Advisory generation via the Groq chat-completion API
//!
//! Assembles the fixed advisory prompt and sends it as a single user-role
//! message to Groq's OpenAI-compatible `/chat/completions` endpoint. The
//! model's text is returned verbatim, with no post-processing.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::models::Temperature;

/// Default base URL for the Groq OpenAI-compatible API
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Default model identifier for advisory generation
pub const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";

/// Fixed environmental framing included verbatim in every prompt
pub const ENVIRONMENTAL_CONTEXT: &str = "Urban transport is a major contributor to carbon \
emissions, and rising summer temperatures make heat-aware, low-emission travel planning more \
important every year.";

/// Advisory generation errors
#[derive(Debug, Error)]
pub enum CompletionError {
    /// No API key was configured; checked before any network call
    #[error("no Groq API key configured")]
    MissingApiKey,

    /// The request or response decoding failed
    #[error("completion request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The response carried no generated message
    #[error("completion response contained no choices")]
    EmptyResponse,
}

/// Build the Google Maps directions link for the two cities
fn build_map_link(start: &str, destination: &str) -> String {
    format!(
        "https://www.google.com/maps/dir/{}/{}",
        urlencoding::encode(start),
        urlencoding::encode(destination)
    )
}

/// Assemble the advisory prompt for the given cities and temperatures
///
/// The template instructs the model to restate the temperatures, propose a
/// cool route with a map link, list landmarks, relate the route to SDG 11
/// and SDG 13, and close with a weather-safety tip. An unknown temperature
/// is interpolated as `Unknown°C`.
#[must_use]
pub fn build_prompt(
    start: &str,
    destination: &str,
    start_temperature: Temperature,
    destination_temperature: Temperature,
) -> String {
    let map_link = build_map_link(start, destination);
    format!(
        "You are a sustainable travel planner. {ENVIRONMENTAL_CONTEXT}\n\n\
         A traveller wants to go from {start} to {destination}. The current temperature in \
         {start} is {start_temperature}°C and in {destination} is {destination_temperature}°C.\n\n\
         Please:\n\
         1. Restate the current temperatures in both cities.\n\
         2. Suggest a cool, eco-friendly route from {start} to {destination} and include this \
         map link: {map_link}\n\
         3. List notable landmarks along the way.\n\
         4. Explain how the suggested route aligns with UN Sustainable Development Goal 11 \
         (Sustainable Cities and Communities) and Goal 13 (Climate Action).\n\
         5. End with one practical weather-safety tip for the journey."
    )
}

/// HTTP client for the Groq chat-completion API
#[derive(Debug, Clone)]
pub struct GroqClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GroqClient {
    /// Create a new Groq client
    ///
    /// Fails with `MissingApiKey` when no usable key is supplied, so the
    /// missing-credential case halts before any network call is attempted.
    pub fn new(
        client: Client,
        api_key: Option<String>,
        base_url: impl Into<String>,
        model: impl Into<String>,
    ) -> Result<Self, CompletionError> {
        let api_key = api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or(CompletionError::MissingApiKey)?;

        Ok(Self {
            client,
            api_key,
            base_url: base_url.into(),
            model: model.into(),
        })
    }

    /// The model identifier used for generation
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send the prompt as a single user message and return the generated text
    pub async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };
        debug!("Requesting completion from model {}", self.model);

        let response: ChatResponse = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(CompletionError::EmptyResponse)
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_contains_cities_and_temperature() {
        let prompt = build_prompt(
            "Mumbai",
            "Bangalore",
            Temperature::Celsius(31.5),
            Temperature::Celsius(24.0),
        );

        assert!(prompt.contains("Mumbai"));
        assert!(prompt.contains("Bangalore"));
        assert!(prompt.contains("31.5"));
        assert!(prompt.contains(ENVIRONMENTAL_CONTEXT));
    }

    #[test]
    fn test_prompt_interpolates_unknown_temperature() {
        let prompt = build_prompt(
            "Mumbai",
            "Bangalore",
            Temperature::Unknown,
            Temperature::Celsius(24.0),
        );
        assert!(prompt.contains("Unknown°C"));
    }

    #[test]
    fn test_map_link_substitutes_city_names() {
        let link = build_map_link("New Delhi", "Agra");
        assert_eq!(link, "https://www.google.com/maps/dir/New%20Delhi/Agra");
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let a = build_prompt("A", "B", Temperature::Celsius(20.0), Temperature::Unknown);
        let b = build_prompt("A", "B", Temperature::Celsius(20.0), Temperature::Unknown);
        assert_eq!(a, b);
    }

    #[test]
    fn test_missing_api_key_is_rejected() {
        let client = Client::new();
        let none = GroqClient::new(client.clone(), None, DEFAULT_BASE_URL, DEFAULT_MODEL);
        assert!(matches!(none, Err(CompletionError::MissingApiKey)));

        let empty = GroqClient::new(
            client,
            Some("   ".to_string()),
            DEFAULT_BASE_URL,
            DEFAULT_MODEL,
        );
        assert!(matches!(empty, Err(CompletionError::MissingApiKey)));
    }
}
