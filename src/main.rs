use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use tripcast::api::AppState;
use tripcast::config::TripCastConfig;
use tripcast::geocoding::GeocodingClient;
use tripcast::weather::WeatherClient;
use tripcast::web;

#[tokio::main]
async fn main() -> Result<()> {
    let config = TripCastConfig::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone())),
        )
        .init();

    tracing::info!("Starting TripCast {}", tripcast::VERSION);

    let state = AppState {
        locations: Arc::new(GeocodingClient::new(config.geocoding.clone())?),
        weather: Arc::new(WeatherClient::new(config.weather.clone())?),
    };

    web::run(config.server.port, state).await
}
