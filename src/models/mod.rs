//! Data models for the GreenRoute application
//!
//! This module contains the core domain models organized by concern:
//! - Location: Geographic coordinates and metadata
//! - Temperature: A current-weather reading or an explicit unknown

pub mod location;
pub mod temperature;

// Re-export all public types for convenient access
pub use location::Location;
pub use temperature::Temperature;
