//! Weather aggregation and farming advisory service.
//!
//! Raw weather for a coordinate pair is turned into daily forecast summaries,
//! a rule-based advisory (ordered advice and alert lines), a 0–100 farming
//! score and a horizon rain probability. The engine modules (`aggregate`,
//! `advisory`, `scoring`, `compose`) are pure and synchronous; all I/O lives
//! behind the [`WeatherSource`] trait in `weather`.
//!
//! Module boundaries follow the Explicit Module Boundary Pattern (EMBP): each
//! module exports its public surface through the re-exports below, so sibling
//! modules and the binary only depend on this gateway.

mod advisory;
mod aggregate;
mod compose;
mod config;
mod error;
mod models;
mod routes;
mod scoring;
mod thresholds;
mod weather;

pub use advisory::{advise, Advice, Alert};
pub use aggregate::aggregate;
pub use compose::{advisory, compose, rain_probability, AdvisoryResult};
pub use config::{load_from_env, Config, MAX_FORECAST_DAYS};
pub use error::{ApiError, ErrorResponse};
pub use models::{
    CurrentWeather, DailyForecast, FarmingReport, ForecastInterval, Language, MoistureLevel,
    Provenance, SoilSummary, WeatherSnapshot,
};
pub use routes::router;
pub use scoring::farming_score;
pub use thresholds::{Thresholds, THRESHOLDS};
pub use weather::{
    OpenWeatherClient, SyntheticWeather, WeatherService, WeatherSource, WeatherSourceError,
};
