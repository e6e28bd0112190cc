//! Response body for the trip recommendation endpoint

use serde::{Deserialize, Serialize};

/// Weather details included with a recommendation
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WeatherDetails {
    pub temperature_c: f64,
    pub condition: String,
    pub wind_speed: f64,
}

/// Full response for one trip query
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Recommendation {
    pub country: String,
    pub city: String,
    pub state: String,
    pub score: u8,
    pub score_verdict: String,
    pub details: WeatherDetails,
}
