//! Configuration loader for the `agroweather-advisor` service.
//!
//! This module centralizes all runtime configuration values and their defaults,
//! loading from environment variables (with optional `.env` file support
//! provided by the caller). The advisory engine itself has no configuration
//! beyond its compiled-in threshold table; everything here is about the
//! process and the upstream weather API.
//!
use std::{env, time::Duration};

use anyhow::{anyhow, bail, Result};

/// Parse an optional integer environment variable with a default value.
macro_rules! parse_env_u64 {
    ($var_name:expr, $default:expr) => {
        env::var($var_name)
            .ok()
            .map(|v| v.parse::<u64>())
            .transpose()
            .map_err(|e| anyhow!("Invalid {}: {}", $var_name, e))?
            .unwrap_or($default)
    };
}

/// Parse an optional string environment variable with a default value.
macro_rules! env_or {
    ($var_name:expr, $default:expr) => {
        env::var($var_name).unwrap_or_else(|_| $default.to_string())
    };
}

pub const DEFAULT_WEATHER_API_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Longest horizon the `/forecast` feed covers.
pub const MAX_FORECAST_DAYS: usize = 5;

/// Strongly typed application configuration.
///
/// All fields are immutable after loading, ensuring a consistent configuration
/// snapshot for the lifetime of the application.
#[derive(Debug, Clone)]
pub struct Config {
    // ---
    /// OpenWeatherMap API key. `None` runs the service on synthetic weather.
    pub weather_api_key: Option<String>,

    /// OpenWeatherMap base URL.
    pub weather_api_url: String,

    /// Per-request timeout for the weather API.
    pub weather_timeout: Duration,

    /// Default forecast horizon in days when a request does not name one.
    pub forecast_days: usize,

    pub host: String,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            weather_api_key: None,
            weather_api_url: DEFAULT_WEATHER_API_URL.to_string(),
            weather_timeout: Duration::from_secs(10),
            forecast_days: MAX_FORECAST_DAYS,
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

/// Load configuration from environment variables with defaults.
///
/// Optional:
/// - `OPENWEATHER_API_KEY` – weather API key (default: none, synthetic data)
/// - `OPENWEATHER_BASE_URL` – weather API base URL
/// - `WEATHER_TIMEOUT_SECS` – upstream request timeout (default: 10)
/// - `FORECAST_DAYS` – default horizon, 1..=5 (default: 5)
/// - `HOST` – bind address (default: 0.0.0.0)
/// - `PORT` – bind port (default: 8000)
///
/// Returns an error if any variable is present but invalid.
pub fn load_from_env() -> Result<Config> {
    // ---
    let weather_api_key = env::var("OPENWEATHER_API_KEY")
        .ok()
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty());
    let weather_api_url = env_or!("OPENWEATHER_BASE_URL", DEFAULT_WEATHER_API_URL);
    let weather_timeout = Duration::from_secs(parse_env_u64!("WEATHER_TIMEOUT_SECS", 10));
    let forecast_days = parse_env_u64!("FORECAST_DAYS", MAX_FORECAST_DAYS as u64) as usize;
    let host = env_or!("HOST", "0.0.0.0");
    let port = u16::try_from(parse_env_u64!("PORT", 8000))
        .map_err(|e| anyhow!("Invalid PORT: {}", e))?;

    if forecast_days == 0 || forecast_days > MAX_FORECAST_DAYS {
        bail!(
            "Invalid FORECAST_DAYS: {} (must be 1..={})",
            forecast_days,
            MAX_FORECAST_DAYS
        );
    }

    Ok(Config {
        weather_api_key,
        weather_api_url,
        weather_timeout,
        forecast_days,
        host,
        port,
    })
}

impl Config {
    /// Log the loaded configuration for debugging purposes.
    ///
    /// Masks the API key while showing all configuration values that were
    /// loaded.
    pub fn log_config(&self) {
        // ---
        let masked_key = match &self.weather_api_key {
            Some(key) => match key.get(key.len().saturating_sub(4)..) {
                Some(tail) if key.len() > 4 => format!("****{}", tail),
                _ => "****".to_string(),
            },
            None => "(unset, synthetic weather)".to_string(),
        };

        tracing::info!("Configuration loaded:");
        tracing::info!("  OPENWEATHER_API_KEY  : {}", masked_key);
        tracing::info!("  OPENWEATHER_BASE_URL : {}", self.weather_api_url);
        tracing::info!("  WEATHER_TIMEOUT_SECS : {}", self.weather_timeout.as_secs());
        tracing::info!("  FORECAST_DAYS        : {}", self.forecast_days);
        tracing::info!("  HOST:PORT            : {}:{}", self.host, self.port);
    }
}
