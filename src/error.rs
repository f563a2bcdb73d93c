//! Error types and handling for the `GreenRoute` application

use thiserror::Error;

use crate::advisor::CompletionError;
use crate::geocoding::GeocodeError;
use crate::weather::WeatherError;

/// Main error type for the `GreenRoute` application
#[derive(Error, Debug)]
pub enum GreenRouteError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Coordinate resolution errors
    #[error(transparent)]
    Geocoding(#[from] GeocodeError),

    /// Weather retrieval errors
    #[error(transparent)]
    Weather(#[from] WeatherError),

    /// Advisory generation errors
    #[error(transparent)]
    Completion(#[from] CompletionError),

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// General application errors
    #[error("Application error: {message}")]
    General { message: String },
}

impl GreenRouteError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new general error
    pub fn general<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            GreenRouteError::Config { .. } => {
                "Configuration error. Please check your config file and API key.".to_string()
            }
            GreenRouteError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            GreenRouteError::Geocoding(GeocodeError::NoMatch { city }) => {
                format!("Could not find a city named '{city}'. Try a different spelling.")
            }
            GreenRouteError::Geocoding(_) => {
                "Unable to reach the geocoding service. Please check your internet connection."
                    .to_string()
            }
            GreenRouteError::Weather(_) => {
                "Unable to fetch current weather for the requested location.".to_string()
            }
            GreenRouteError::Completion(CompletionError::MissingApiKey) => {
                "No Groq API key configured. Set groq.api_key in config.toml or the \
                 GREENROUTE_GROQ__API_KEY environment variable."
                    .to_string()
            }
            GreenRouteError::Completion(_) => {
                "The language model request failed. Please try again.".to_string()
            }
            GreenRouteError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
            GreenRouteError::General { message } => message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = GreenRouteError::config("missing API key");
        assert!(matches!(config_err, GreenRouteError::Config { .. }));

        let validation_err = GreenRouteError::validation("empty city name");
        assert!(matches!(validation_err, GreenRouteError::Validation { .. }));
    }

    #[test]
    fn test_user_messages() {
        let config_err = GreenRouteError::config("test");
        assert!(config_err.user_message().contains("Configuration error"));

        let not_found: GreenRouteError = GeocodeError::NoMatch {
            city: "Atlantis".to_string(),
        }
        .into();
        assert!(not_found.user_message().contains("Atlantis"));

        let missing_key: GreenRouteError = CompletionError::MissingApiKey.into();
        assert!(missing_key.user_message().contains("API key"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let app_err: GreenRouteError = io_err.into();
        assert!(matches!(app_err, GreenRouteError::Io { .. }));
    }
}
