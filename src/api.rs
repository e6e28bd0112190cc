//! HTTP API for trip recommendations

use std::sync::Arc;

use axum::{
    Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
};
use serde::Deserialize;
use tracing::info;

use crate::error::TripCastError;
use crate::geocoding::LocationLookup;
use crate::location_resolver::LocationResolver;
use crate::models::{Recommendation, WeatherDetails};
use crate::scoring;
use crate::weather::CurrentWeatherLookup;

/// Shared handles to the outbound collaborators
#[derive(Clone)]
pub struct AppState {
    pub locations: Arc<dyn LocationLookup>,
    pub weather: Arc<dyn CurrentWeatherLookup>,
}

/// Query parameters for the recommendation endpoint
#[derive(Debug, Deserialize)]
pub struct RecommendTripParams {
    /// City name (e.g. Warwick)
    pub city: String,
    /// ISO country code (e.g. US, GB, CA)
    pub country_code: Option<String>,
    /// State (e.g. Rhode Island, New York)
    pub state: Option<String>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/recommend-trip", get(recommend_trip))
        .route("/health", get(health))
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn recommend_trip(
    State(state): State<AppState>,
    Query(params): Query<RecommendTripParams>,
) -> Result<Json<Recommendation>, ApiError> {
    validate_params(&params)?;

    let location = LocationResolver::resolve(
        state.locations.as_ref(),
        &params.city,
        params.country_code.as_deref(),
        params.state.as_deref(),
    )
    .await?;

    let conditions = state
        .weather
        .current(location.latitude, location.longitude)
        .await?;

    let analysis = scoring::score_conditions(&conditions);

    info!(
        "Scored {} ({}): {} - {}",
        location.name,
        location.format_coordinates(),
        analysis.score,
        analysis.verdict
    );

    Ok(Json(Recommendation {
        country: location.country,
        city: location.name,
        state: location.state,
        score: analysis.score,
        score_verdict: analysis.verdict,
        details: WeatherDetails {
            temperature_c: conditions.temperature_c,
            condition: conditions.condition_label().to_string(),
            wind_speed: conditions.wind_speed,
        },
    }))
}

fn validate_params(params: &RecommendTripParams) -> Result<(), TripCastError> {
    if params.city.trim().is_empty() {
        return Err(TripCastError::validation("City cannot be empty"));
    }

    if let Some(code) = &params.country_code {
        if code.len() != 2 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(TripCastError::validation(
                "Country code must be a 2-letter ISO code",
            ));
        }
    }

    Ok(())
}

/// Maps domain errors onto HTTP responses
pub struct ApiError(pub TripCastError);

impl From<TripCastError> for ApiError {
    fn from(err: TripCastError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            TripCastError::Validation { .. } => StatusCode::BAD_REQUEST,
            TripCastError::NotFound { .. } => StatusCode::NOT_FOUND,
            TripCastError::Upstream { .. } => StatusCode::SERVICE_UNAVAILABLE,
            TripCastError::Config { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = serde_json::json!({ "detail": self.0.user_message() });
        (status, Json(body)).into_response()
    }
}
