//! Weather source boundary.
//!
//! A [`WeatherSource`] supplies current conditions and raw forecast
//! intervals for a coordinate pair. [`OpenWeatherClient`] talks to
//! OpenWeatherMap; [`SyntheticWeather`] produces deterministic placeholder
//! data and is what [`WeatherService`] falls back to when a fetch fails.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{CurrentWeather, ForecastInterval};

mod openweather;
mod service;
mod synthetic;

pub use openweather::OpenWeatherClient;
pub use service::WeatherService;
pub use synthetic::SyntheticWeather;

// ---

/// Why a weather fetch produced nothing usable.
#[derive(Debug, Error)]
pub enum WeatherSourceError {
    // ---
    /// Connection failure, timeout or non-success status.
    #[error("weather API request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("malformed weather payload: {0}")]
    Malformed(String),
}

#[async_trait]
pub trait WeatherSource: Send + Sync {
    // ---
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Whether this source produces placeholder rather than observed data.
    fn is_synthetic(&self) -> bool {
        false
    }

    async fn fetch_current(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<CurrentWeather, WeatherSourceError>;

    /// Raw sub-daily intervals covering roughly `days` days.
    async fn fetch_forecast(
        &self,
        latitude: f64,
        longitude: f64,
        days: usize,
    ) -> Result<Vec<ForecastInterval>, WeatherSourceError>;
}
