//! `TripCast` - travel condition scoring over live weather data
//!
//! This library resolves a city query into coordinates, fetches the current
//! conditions there and turns them into a travel-friendliness score.

pub mod api;
pub mod config;
pub mod error;
pub mod geocoding;
pub mod location_resolver;
pub mod models;
pub mod scoring;
pub mod weather;
pub mod web;

// Re-export core types for public API
pub use api::AppState;
pub use config::TripCastConfig;
pub use error::TripCastError;
pub use geocoding::{GeocodingClient, LocationLookup};
pub use location_resolver::LocationResolver;
pub use models::{CurrentConditions, GeocodingCandidate, Recommendation, ResolvedLocation};
pub use scoring::{ScoreResult, score_conditions};
pub use weather::{CurrentWeatherLookup, WeatherClient};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, TripCastError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
