//! Current weather conditions at a coordinate

use serde::{Deserialize, Serialize};

/// Current conditions fetched once per request
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct CurrentConditions {
    /// Temperature in Celsius
    pub temperature_c: f64,
    /// Wind speed in km/h
    pub wind_speed: f64,
    /// Rainfall in mm
    pub rainfall: f64,
}

impl CurrentConditions {
    /// Human-readable sky condition derived from the rainfall reading
    #[must_use]
    pub fn condition_label(&self) -> &'static str {
        if self.rainfall > 0.0 { "Raining" } else { "Clear" }
    }
}
