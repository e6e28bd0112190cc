//! Location models for geocoding candidates and resolved places

use serde::{Deserialize, Serialize};

/// A single candidate returned by the geocoding provider
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GeocodingCandidate {
    /// Place name as reported by the provider
    pub name: String,
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// Country name
    pub country: Option<String>,
    /// Country code (ISO 3166-1 alpha-2)
    pub country_code: Option<String>,
    /// First-level administrative subdivision (state/province)
    pub admin1: Option<String>,
}

/// The single location selected for a trip query
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ResolvedLocation {
    /// City name
    pub name: String,
    /// State or province, "Unknown" when the provider has none
    pub state: String,
    /// Country name, "Unknown" when the provider has none
    pub country: String,
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

impl ResolvedLocation {
    /// Format location as coordinates string
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

impl From<GeocodingCandidate> for ResolvedLocation {
    fn from(candidate: GeocodingCandidate) -> Self {
        Self {
            name: candidate.name,
            state: candidate.admin1.unwrap_or_else(|| "Unknown".into()),
            country: candidate.country.unwrap_or_else(|| "Unknown".into()),
            latitude: candidate.latitude,
            longitude: candidate.longitude,
        }
    }
}
