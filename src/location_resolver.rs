//! Location Resolution Module
//!
//! Narrows the geocoding provider's candidate list down to the single place
//! a trip query is asking about, using partial matches against the requested
//! country and state.

use tracing::debug;

use crate::Result;
use crate::error::TripCastError;
use crate::geocoding::LocationLookup;
use crate::models::{GeocodingCandidate, ResolvedLocation};

/// Service for resolving trip queries into locations
pub struct LocationResolver;

impl LocationResolver {
    /// Resolve a city query into a single location.
    ///
    /// Candidates are checked in provider order and the first one passing the
    /// country and state filters wins; there is no ranking among candidates.
    pub async fn resolve(
        lookup: &dyn LocationLookup,
        city: &str,
        country_code: Option<&str>,
        state: Option<&str>,
    ) -> Result<ResolvedLocation> {
        debug!(
            "Resolving city query: '{}' (country: {:?}, state: {:?})",
            city, country_code, state
        );

        let candidates = lookup.search(city).await?;
        if candidates.is_empty() {
            return Err(TripCastError::not_found("City could not be found"));
        }

        let selected = candidates.into_iter().find(|candidate| {
            Self::matches_country(candidate, country_code) && Self::matches_state(candidate, state)
        });

        match selected {
            Some(candidate) => {
                debug!(
                    "Selected candidate: {} at ({}, {})",
                    candidate.name, candidate.latitude, candidate.longitude
                );
                Ok(ResolvedLocation::from(candidate))
            }
            None => Err(TripCastError::not_found(format!(
                "Could not find {} in {}, {}",
                city,
                state.unwrap_or("any state"),
                country_code.unwrap_or("any country")
            ))),
        }
    }

    fn matches_country(candidate: &GeocodingCandidate, country_code: Option<&str>) -> bool {
        let Some(wanted) = country_code else {
            return true;
        };
        candidate
            .country_code
            .as_deref()
            .is_some_and(|code| code.eq_ignore_ascii_case(wanted))
    }

    /// Substring containment, so "rhode" still hits "Rhode Island"
    fn matches_state(candidate: &GeocodingCandidate, state: Option<&str>) -> bool {
        let Some(wanted) = state else {
            return true;
        };
        candidate
            .admin1
            .as_deref()
            .unwrap_or("")
            .to_lowercase()
            .contains(&wanted.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct FakeLookup {
        candidates: Vec<GeocodingCandidate>,
    }

    #[async_trait]
    impl LocationLookup for FakeLookup {
        async fn search(&self, _city: &str) -> Result<Vec<GeocodingCandidate>> {
            Ok(self.candidates.clone())
        }
    }

    fn candidate(name: &str, country_code: &str, admin1: &str) -> GeocodingCandidate {
        GeocodingCandidate {
            name: name.to_string(),
            latitude: 41.7001,
            longitude: -71.4162,
            country: Some("United States".to_string()),
            country_code: Some(country_code.to_string()),
            admin1: Some(admin1.to_string()),
        }
    }

    #[tokio::test]
    async fn test_first_matching_candidate_wins() {
        let lookup = FakeLookup {
            candidates: vec![
                candidate("Warwick", "US", "Rhode Island"),
                candidate("Warwick", "US", "New York"),
            ],
        };

        let location = LocationResolver::resolve(&lookup, "Warwick", Some("US"), Some("rhode"))
            .await
            .unwrap();

        assert_eq!(location.state, "Rhode Island");
    }

    #[tokio::test]
    async fn test_state_filter_skips_earlier_candidates() {
        let lookup = FakeLookup {
            candidates: vec![
                candidate("Warwick", "US", "Rhode Island"),
                candidate("Warwick", "US", "New York"),
            ],
        };

        let location = LocationResolver::resolve(&lookup, "Warwick", Some("US"), Some("new york"))
            .await
            .unwrap();

        assert_eq!(location.state, "New York");
    }

    #[tokio::test]
    async fn test_country_match_is_case_insensitive() {
        let lookup = FakeLookup {
            candidates: vec![candidate("Warwick", "US", "Rhode Island")],
        };

        let location = LocationResolver::resolve(&lookup, "Warwick", Some("us"), None)
            .await
            .unwrap();

        assert_eq!(location.name, "Warwick");
    }

    #[tokio::test]
    async fn test_no_filters_selects_first_candidate() {
        let lookup = FakeLookup {
            candidates: vec![
                candidate("Warwick", "GB", "England"),
                candidate("Warwick", "US", "Rhode Island"),
            ],
        };

        let location = LocationResolver::resolve(&lookup, "Warwick", None, None)
            .await
            .unwrap();

        assert_eq!(location.state, "England");
    }

    #[tokio::test]
    async fn test_no_candidate_in_requested_country() {
        let lookup = FakeLookup {
            candidates: vec![candidate("Warwick", "GB", "England")],
        };

        let err = LocationResolver::resolve(&lookup, "Warwick", Some("US"), None)
            .await
            .unwrap_err();

        assert!(matches!(err, TripCastError::NotFound { .. }));
        assert!(err.user_message().contains("Warwick"));
        assert!(err.user_message().contains("any state"));
        assert!(err.user_message().contains("US"));
    }

    #[tokio::test]
    async fn test_zero_results_is_not_found() {
        let lookup = FakeLookup { candidates: vec![] };

        let err = LocationResolver::resolve(&lookup, "Atlantis", None, None)
            .await
            .unwrap_err();

        assert!(matches!(err, TripCastError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_missing_admin1_never_matches_a_state_filter() {
        let mut bare = candidate("Warwick", "US", "");
        bare.admin1 = None;
        let lookup = FakeLookup {
            candidates: vec![bare],
        };

        let err = LocationResolver::resolve(&lookup, "Warwick", Some("US"), Some("rhode"))
            .await
            .unwrap_err();

        assert!(matches!(err, TripCastError::NotFound { .. }));
    }
}
