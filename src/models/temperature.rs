//! Temperature model for current-weather readings
//!
//! A reading is either a concrete Celsius value or explicitly unknown,
//! replacing the number-or-string sentinel a naive implementation would use.

use std::fmt;

/// A current temperature reading in degrees Celsius, or an explicit unknown
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Temperature {
    /// A concrete reading in degrees Celsius
    Celsius(f64),
    /// The reading could not be retrieved
    Unknown,
}

impl Temperature {
    /// Whether a concrete reading is present
    #[must_use]
    pub fn is_known(&self) -> bool {
        matches!(self, Temperature::Celsius(_))
    }
}

impl fmt::Display for Temperature {
    /// Renders `31.5` or `Unknown`; callers append the unit
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Temperature::Celsius(value) => write!(f, "{value}"),
            Temperature::Unknown => write!(f, "Unknown"),
        }
    }
}
