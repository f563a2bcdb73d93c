//! Configuration management for the `GreenRoute` application
//!
//! Handles loading configuration from files and environment variables,
//! and provides validation for all configuration settings.

use crate::{GreenRouteError, advisor, geocoding, weather};
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the `GreenRoute` application
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GreenRouteConfig {
    /// Groq chat-completion configuration
    #[serde(default)]
    pub groq: GroqConfig,
    /// Geocoding API configuration
    #[serde(default)]
    pub geocoding: GeocodingConfig,
    /// Weather API configuration
    #[serde(default)]
    pub weather: WeatherConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Groq API configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroqConfig {
    /// Groq API key; generation halts before any network call without one
    pub api_key: Option<String>,
    /// Base URL for the Groq OpenAI-compatible API
    #[serde(default = "default_groq_base_url")]
    pub base_url: String,
    /// Model identifier used for advisory generation
    #[serde(default = "default_groq_model")]
    pub model: String,
}

/// Geocoding API configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodingConfig {
    /// Base URL for the geocoding API (no API key required)
    #[serde(default = "default_geocoding_base_url")]
    pub base_url: String,
}

/// Weather API configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Base URL for the weather API (no API key required)
    #[serde(default = "default_weather_base_url")]
    pub base_url: String,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default value functions
fn default_groq_base_url() -> String {
    advisor::DEFAULT_BASE_URL.to_string()
}

fn default_groq_model() -> String {
    advisor::DEFAULT_MODEL.to_string()
}

fn default_geocoding_base_url() -> String {
    geocoding::DEFAULT_BASE_URL.to_string()
}

fn default_weather_base_url() -> String {
    weather::DEFAULT_BASE_URL.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for GroqConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_groq_base_url(),
            model: default_groq_model(),
        }
    }
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            base_url: default_geocoding_base_url(),
        }
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_weather_base_url(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl GreenRouteConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        // Load from file if path is provided or use default location
        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Add environment variable overrides with GREENROUTE_ prefix
        builder = builder.add_source(
            Environment::with_prefix("GREENROUTE")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let config: GreenRouteConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("greenroute").join("config.toml"))
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_api_key()?;
        self.validate_urls()?;
        self.validate_log_level()?;
        Ok(())
    }

    /// Validate the Groq API key if one is provided
    ///
    /// Absence is not an error here; the pipeline guards against a missing
    /// key before generation is attempted.
    pub fn validate_api_key(&self) -> Result<()> {
        if let Some(api_key) = &self.groq.api_key {
            if api_key.trim().is_empty() {
                return Err(GreenRouteError::config(
                    "Groq API key cannot be empty if provided. Either remove it or provide a valid key."
                ).into());
            }

            if api_key.len() < 8 {
                return Err(GreenRouteError::config(
                    "Groq API key appears to be invalid (too short). Please check your API key.",
                )
                .into());
            }
        }

        Ok(())
    }

    fn validate_urls(&self) -> Result<()> {
        for (name, url) in [
            ("Groq", &self.groq.base_url),
            ("Geocoding", &self.geocoding.base_url),
            ("Weather", &self.weather.base_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(GreenRouteError::config(format!(
                    "{name} base URL must be a valid HTTP or HTTPS URL"
                ))
                .into());
            }
        }
        Ok(())
    }

    fn validate_log_level(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(GreenRouteError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }
        Ok(())
    }
}
