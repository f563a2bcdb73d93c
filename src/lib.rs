//! `GreenRoute` - eco-friendly travel advisories between two cities
//!
//! This library chains Open-Meteo geocoding, Open-Meteo current weather
//! and a Groq chat completion into a single "cool route" travel suggestion.

pub mod advisor;
pub mod api;
pub mod config;
pub mod error;
pub mod geocoding;
pub mod models;
pub mod pipeline;
pub mod weather;
pub mod web;

// Re-export core types for public API
pub use advisor::{CompletionError, GroqClient, build_prompt};
pub use config::GreenRouteConfig;
pub use error::GreenRouteError;
pub use geocoding::{GeocodeError, GeocodingClient};
pub use models::{Location, Temperature};
pub use pipeline::{TripPlan, TripPlanner};
pub use weather::{WeatherClient, WeatherError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, GreenRouteError>;
