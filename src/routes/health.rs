// src/routes/health.rs
//! Liveness endpoints for the advisory service.
//!
//! `/health` is used by container orchestrators and CI pipelines to verify
//! that the service is running and able to respond to HTTP requests. `/`
//! describes the service and lists its endpoints. Neither touches the weather
//! source.

use axum::{routing::get, Json, Router};
use serde::Serialize;

/// JSON response body for the `/health` endpoint.
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct Endpoints {
    weather: &'static str,
    soil_weather: &'static str,
    health: &'static str,
}

/// JSON response body for `/`.
#[derive(Serialize)]
struct ServiceInfo {
    name: &'static str,
    version: &'static str,
    status: &'static str,
    endpoints: Endpoints,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy" })
}

async fn index() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        status: "running",
        endpoints: Endpoints {
            weather: "/api/weather",
            soil_weather: "/api/soil-weather",
            health: "/health",
        },
    })
}

/// Create a subrouter containing the `/` and `/health` routes.
///
/// Generic over the application state so it can merge cleanly with the
/// gateway router.
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
}
