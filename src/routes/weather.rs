use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{validate_coordinates, validate_horizon, ApiError};
use crate::{compose, Config, Language, WeatherService, MAX_FORECAST_DAYS};

// ---

pub fn router() -> Router<(WeatherService, Config)> {
    // ---
    Router::new().route("/api/weather", get(handler))
}

/// Query parameters for the weather-only advisory.
#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    lat: f64,
    lon: f64,
    #[serde(default)]
    language: Language,
    days: Option<usize>,
}

async fn handler(
    State((service, config)): State<(WeatherService, Config)>,
    params: Result<Query<WeatherQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    // ---
    let Query(params) = params?;
    info!("GET /api/weather - {:?}", params);

    validate_coordinates(params.lat, params.lon)?;
    let days = params.days.unwrap_or(config.forecast_days);
    validate_horizon(days, MAX_FORECAST_DAYS)?;

    // Step 1: Fetch current conditions and forecast
    debug!("GET /api/weather - Step 1");
    let snapshot = service.snapshot(params.lat, params.lon, days).await;

    // Step 2: Aggregate, advise, score
    debug!("GET /api/weather - Step 2");
    let report = compose(snapshot, None, days, params.language);

    info!(
        "Advisory complete: score {}, {} alerts, synthetic={}",
        report.farming_score,
        report.alerts.len(),
        report.synthetic
    );
    Ok(Json(report))
}
