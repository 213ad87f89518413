use axum::{
    extract::{rejection::JsonRejection, State},
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{validate_coordinates, validate_horizon, ApiError};
use crate::{compose, Config, Language, SoilSummary, WeatherService, MAX_FORECAST_DAYS};

// ---

pub fn router() -> Router<(WeatherService, Config)> {
    // ---
    Router::new().route("/api/soil-weather", post(handler))
}

/// Request body for the combined soil and weather advisory.
///
/// `soil` is the soil classifier's output, passed through as-is; only its
/// `moisture_level` is read and anything unreadable counts as unknown.
#[derive(Debug, Deserialize)]
pub struct SoilWeatherRequest {
    latitude: f64,
    longitude: f64,
    #[serde(default)]
    soil: Option<serde_json::Value>,
    #[serde(default)]
    language: Language,
    days: Option<usize>,
}

async fn handler(
    State((service, config)): State<(WeatherService, Config)>,
    request: Result<Json<SoilWeatherRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    // ---
    let Json(request) = request?;
    info!(
        "POST /api/soil-weather - ({}, {}) soil={}",
        request.latitude,
        request.longitude,
        request.soil.is_some()
    );

    validate_coordinates(request.latitude, request.longitude)?;
    let days = request.days.unwrap_or(config.forecast_days);
    validate_horizon(days, MAX_FORECAST_DAYS)?;

    // Step 1: Read the soil summary
    debug!("POST /api/soil-weather - Step 1");
    let soil = request.soil.as_ref().map(SoilSummary::from_value);
    if let Some(s) = &soil {
        debug!("Soil moisture: {:?}", s.moisture_level);
    }

    // Step 2: Fetch current conditions and forecast
    debug!("POST /api/soil-weather - Step 2");
    let snapshot = service
        .snapshot(request.latitude, request.longitude, days)
        .await;

    // Step 3: Aggregate, advise, score
    debug!("POST /api/soil-weather - Step 3");
    let report = compose(snapshot, soil, days, request.language);

    info!(
        "Advisory complete: score {}, {} alerts, synthetic={}",
        report.farming_score,
        report.alerts.len(),
        report.synthetic
    );
    Ok(Json(report))
}
