//! Application entry point for the `agroweather-advisor` service.
//!
//! This binary orchestrates the startup sequence for the advisory API:
//! - Loading configuration from environment variables or `.env`
//! - Initializing structured logging/tracing
//! - Choosing the weather source (OpenWeatherMap, or synthetic data when no
//!   API key is configured)
//! - Mounting all API routes via the `routes` gateway (EMBP pattern)
//! - Binding the Axum HTTP server and serving requests
//!
//! # Environment Variables
//! - `OPENWEATHER_API_KEY` (optional) – weather API key; synthetic data if unset
//! - `HOST` / `PORT` (optional) – bind address (default: `0.0.0.0:8000`)
//! - `AXUM_LOG_LEVEL` (optional) – log verbosity (default: `debug`)
//! - `AXUM_SPAN_EVENTS` (optional) – span event mode for tracing
//!
//! See `config.rs` for the full list.
use std::{env, sync::Arc};

use anyhow::Result;
use axum::Router;
use dotenvy::dotenv;
use is_terminal::IsTerminal;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;

use agroweather_advisor::{
    load_from_env, router, Config, OpenWeatherClient, SyntheticWeather, WeatherService,
    WeatherSource,
};

// ---

#[tokio::main]
async fn main() -> Result<()> {
    // ---
    init_tracing();
    dotenv().ok();

    let cfg = load_from_env()?;
    cfg.log_config();

    let service = WeatherService::new(weather_source(&cfg)?);
    tracing::info!("Weather source: {}", service.source_name());

    // Build app from routes gateway (EMBP)
    let addr = format!("{}:{}", cfg.host, cfg.port);
    let app: Router = router(service, cfg);

    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// ---

fn weather_source(cfg: &Config) -> Result<Arc<dyn WeatherSource>> {
    // ---
    match &cfg.weather_api_key {
        Some(key) => {
            let client = OpenWeatherClient::new(
                key.clone(),
                cfg.weather_api_url.clone(),
                cfg.weather_timeout,
            )?;
            Ok(Arc::new(client))
        }
        None => {
            tracing::warn!("OPENWEATHER_API_KEY not set, serving synthetic weather");
            Ok(Arc::new(SyntheticWeather::new()))
        }
    }
}

/// Initialize the global tracing subscriber for structured logging.
///
/// This function configures the [`tracing_subscriber`] with:
/// - Log target, file, and line number output enabled
/// - Color output controlled by TTY detection and `FORCE_COLOR` env var:
///   - `FORCE_COLOR=1|true|yes`: force colors on
///   - `FORCE_COLOR=0|false|no`: force colors off
///   - unset or other values: auto-detect TTY
/// - Span event emission mode controlled by the `AXUM_SPAN_EVENTS` env var:
///   - `"full"`       : emit ENTER, EXIT, and CLOSE events with timing
///   - `"enter_exit"` : emit ENTER and EXIT only
///   - unset or other values: emit CLOSE events only (default)
/// - Log level controlled by `RUST_LOG`, falling back to `AXUM_LOG_LEVEL`
///
/// Called once at startup before any logging macros are invoked.
fn init_tracing() {
    // ---
    let span_events = match env::var("AXUM_SPAN_EVENTS").as_deref() {
        Ok("full") => FmtSpan::FULL,
        Ok("enter_exit") => FmtSpan::ENTER | FmtSpan::EXIT,
        _ => FmtSpan::CLOSE,
    };

    let use_color = match env::var("FORCE_COLOR").as_deref() {
        Ok("1") | Ok("true") | Ok("yes") => true,
        Ok("0") | Ok("false") | Ok("no") => false,
        _ => std::io::stdout().is_terminal(),
    };

    // Use RUST_LOG if available, otherwise fall back to AXUM_LOG_LEVEL
    let env_filter = if env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        let level = match env::var("AXUM_LOG_LEVEL").ok().as_deref() {
            Some("trace") => "trace",
            Some("debug") => "debug",
            Some("info") => "info",
            Some("warn") => "warn",
            Some("error") => "error",
            _ => "debug",
        };
        EnvFilter::new(format!("{level},hyper=info,reqwest=info"))
    };

    tracing_subscriber::fmt()
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_span_events(span_events)
        .with_env_filter(env_filter)
        .with_ansi(use_color)
        .compact()
        .init();
}
