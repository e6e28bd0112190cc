//! Data models for the TripCast service
//!
//! This module contains the core domain models organized by concern:
//! - Location: Geocoding candidates and the resolved place
//! - Weather: Current conditions at a coordinate
//! - Recommendation: The shaped API response

pub mod location;
pub mod recommendation;
pub mod weather;

// Re-export all public types for convenient access
pub use location::{GeocodingCandidate, ResolvedLocation};
pub use recommendation::{Recommendation, WeatherDetails};
pub use weather::CurrentConditions;
