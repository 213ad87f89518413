use std::time::Instant;

use axum::{
    extract::Request,
    http::HeaderValue,
    middleware::{self, Next},
    response::Response,
    Router,
};
use tracing::Instrument;
use uuid::Uuid;

use crate::{Config, WeatherService};

mod health;
mod soil_weather;
mod weather;

// ---

pub fn router(service: WeatherService, config: Config) -> Router {
    // ---
    Router::new()
        .merge(weather::router())
        .merge(soil_weather::router())
        .merge(health::router())
        .layer(middleware::from_fn(trace_request))
        .with_state((service, config))
}

/// Wrap each request in a span carrying a request id, and report the id and
/// the handling time in `x-request-id` / `x-process-time` response headers.
async fn trace_request(request: Request, next: Next) -> Response {
    // ---
    let request_id = Uuid::new_v4().to_string();
    let span = tracing::info_span!(
        "http_request",
        method = %request.method(),
        path = %request.uri().path(),
        request_id = %request_id,
    );

    let started = Instant::now();
    let mut response = next.run(request).instrument(span).await;
    let elapsed = started.elapsed().as_secs_f64();

    let headers = response.headers_mut();
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        headers.insert("x-request-id", value);
    }
    if let Ok(value) = HeaderValue::from_str(&format!("{:.6}", elapsed)) {
        headers.insert("x-process-time", value);
    }
    response
}
