//! Geocoding client for the Open-Meteo search API
//!
//! Turns a free-text city name into a list of candidate places. The lookup
//! sits behind a trait so the resolver can be exercised with fakes.

use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

use crate::Result;
use crate::config::GeocodingConfig;
use crate::error::TripCastError;
use crate::models::GeocodingCandidate;

/// Candidate lookup by place name
#[async_trait]
pub trait LocationLookup: Send + Sync {
    /// Fetch candidate places matching `city`, in provider order
    async fn search(&self, city: &str) -> Result<Vec<GeocodingCandidate>>;
}

/// Open-Meteo geocoding API client
pub struct GeocodingClient {
    /// HTTP client
    client: Client,
    /// API configuration
    config: GeocodingConfig,
}

impl GeocodingClient {
    /// Create a new geocoding client
    pub fn new(config: GeocodingConfig) -> anyhow::Result<Self> {
        let timeout = Duration::from_secs(config.timeout_seconds.into());

        let client = Client::builder()
            .timeout(timeout)
            .user_agent("TripCast/0.1.0")
            .build()
            .with_context(|| "Failed to create HTTP client")?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl LocationLookup for GeocodingClient {
    async fn search(&self, city: &str) -> Result<Vec<GeocodingCandidate>> {
        let url = format!(
            "{}/search?name={}&count={}&language=en&format=json",
            self.config.base_url,
            urlencoding::encode(city),
            self.config.max_candidates
        );

        debug!("Open-Meteo geocoding request: {}", url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            warn!("Geocoding request for '{}' failed: {}", city, e);
            TripCastError::upstream("Geocoding", e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Geocoding request for '{}' returned {}", city, status);
            return Err(TripCastError::upstream(
                "Geocoding",
                format!("unexpected status {status}"),
            ));
        }

        let search_response: open_meteo::SearchResponse = response.json().await.map_err(|e| {
            warn!("Failed to parse geocoding response for '{}': {}", city, e);
            TripCastError::upstream("Geocoding", "invalid response body")
        })?;

        let candidates: Vec<GeocodingCandidate> = search_response
            .results
            .unwrap_or_default()
            .into_iter()
            .map(Into::into)
            .collect();

        debug!("Found {} candidates for '{}'", candidates.len(), city);

        Ok(candidates)
    }
}

/// Open-Meteo geocoding response structures and conversion utilities
mod open_meteo {
    use serde::Deserialize;

    use crate::models::GeocodingCandidate;

    /// Geocoding response from Open-Meteo
    #[derive(Debug, Deserialize)]
    pub struct SearchResponse {
        pub results: Option<Vec<SearchResult>>,
    }

    #[derive(Debug, Deserialize)]
    pub struct SearchResult {
        pub name: String,
        pub latitude: f64,
        pub longitude: f64,
        pub country: Option<String>,
        pub country_code: Option<String>,
        pub admin1: Option<String>,
    }

    impl From<SearchResult> for GeocodingCandidate {
        fn from(result: SearchResult) -> Self {
            Self {
                name: result.name,
                latitude: result.latitude,
                longitude: result.longitude,
                country: result.country,
                country_code: result.country_code,
                admin1: result.admin1,
            }
        }
    }
}
