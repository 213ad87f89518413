//! OpenWeatherMap 2.5 client (`/weather` and `/forecast`).

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize};

use super::{WeatherSource, WeatherSourceError};
use crate::models::{CurrentWeather, ForecastInterval};

// ---

/// 3-hour slots per day in the `/forecast` feed.
const SLOTS_PER_DAY: usize = 8;

#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    // ---
    client: Client,
    api_key: String,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct OwmCondition {
    description: String,
    #[serde(default)]
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OwmMain {
    temp: f64,
    #[serde(default)]
    feels_like: Option<f64>,
    humidity: f64,
    #[serde(default)]
    pressure: f64,
}

#[derive(Debug, Default, Deserialize)]
struct OwmWind {
    #[serde(default)]
    speed: f64,
}

#[derive(Debug, Default, Deserialize)]
struct OwmClouds {
    #[serde(default)]
    all: f64,
}

#[derive(Debug, Default, Deserialize)]
struct OwmRain {
    #[serde(rename = "1h")]
    one_hour: Option<f64>,
    #[serde(rename = "3h")]
    three_hour: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct OwmCurrentResponse {
    main: OwmMain,
    weather: Vec<OwmCondition>,
    #[serde(default)]
    wind: OwmWind,
    #[serde(default)]
    clouds: OwmClouds,
    /// Metres.
    visibility: Option<f64>,
    #[serde(default)]
    rain: OwmRain,
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OwmCity {
    /// Shift from UTC in seconds.
    #[serde(default)]
    timezone: i32,
}

#[derive(Debug, Deserialize)]
struct OwmForecastItem {
    dt: i64,
    main: OwmMain,
    weather: Vec<OwmCondition>,
    #[serde(default)]
    rain: OwmRain,
}

#[derive(Debug, Deserialize)]
struct OwmForecastResponse {
    list: Vec<OwmForecastItem>,
    city: Option<OwmCity>,
}

impl OpenWeatherClient {
    // ---
    /// Build a client with a per-request `timeout`.
    pub fn new(
        api_key: String,
        base_url: String,
        timeout: Duration,
    ) -> Result<Self, WeatherSourceError> {
        // ---
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        latitude: f64,
        longitude: f64,
        count: Option<usize>,
    ) -> Result<T, WeatherSourceError> {
        // ---
        let url = format!("{}/{}", self.base_url, path);
        tracing::debug!("Fetching {} for ({}, {})", url, latitude, longitude);

        let mut request = self.client.get(&url).query(&[
            ("lat", latitude.to_string()),
            ("lon", longitude.to_string()),
            ("appid", self.api_key.clone()),
            ("units", "metric".to_string()),
        ]);
        if let Some(cnt) = count {
            request = request.query(&[("cnt", cnt)]);
        }

        let body = request.send().await?.error_for_status()?.text().await?;
        serde_json::from_str(&body).map_err(|e| WeatherSourceError::Malformed(e.to_string()))
    }
}

fn first_condition(conditions: &[OwmCondition]) -> Result<&OwmCondition, WeatherSourceError> {
    conditions
        .first()
        .ok_or_else(|| WeatherSourceError::Malformed("empty weather array".to_string()))
}

#[async_trait]
impl WeatherSource for OpenWeatherClient {
    // ---
    fn name(&self) -> &'static str {
        "openweathermap"
    }

    async fn fetch_current(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<CurrentWeather, WeatherSourceError> {
        // ---
        let raw: OwmCurrentResponse = self.get("weather", latitude, longitude, None).await?;
        let condition = first_condition(&raw.weather)?;

        Ok(CurrentWeather {
            temperature: raw.main.temp,
            feels_like: raw.main.feels_like.unwrap_or(raw.main.temp),
            humidity: raw.main.humidity,
            pressure: raw.main.pressure,
            wind_speed: raw.wind.speed,
            clouds: raw.clouds.all,
            visibility: raw.visibility.unwrap_or(10_000.0) / 1000.0,
            rain_1h: raw.rain.one_hour.unwrap_or(0.0),
            description: condition.description.clone(),
            icon: condition.icon.clone(),
            location: raw
                .name
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| "Unknown".to_string()),
        })
    }

    async fn fetch_forecast(
        &self,
        latitude: f64,
        longitude: f64,
        days: usize,
    ) -> Result<Vec<ForecastInterval>, WeatherSourceError> {
        // ---
        let raw: OwmForecastResponse = self
            .get("forecast", latitude, longitude, Some(days * SLOTS_PER_DAY))
            .await?;

        let shift = raw.city.map_or(0, |c| c.timezone);
        let offset = FixedOffset::east_opt(shift)
            .ok_or_else(|| WeatherSourceError::Malformed(format!("bad timezone shift {}", shift)))?;

        raw.list
            .into_iter()
            .map(|item| -> Result<ForecastInterval, WeatherSourceError> {
                let timestamp = DateTime::from_timestamp(item.dt, 0)
                    .ok_or_else(|| {
                        WeatherSourceError::Malformed(format!("bad timestamp {}", item.dt))
                    })?
                    .with_timezone(&offset);
                let description = first_condition(&item.weather)?.description.clone();

                Ok(ForecastInterval {
                    timestamp,
                    temperature: item.main.temp,
                    humidity: item.main.humidity,
                    description,
                    rain_3h: item.rain.three_hour.unwrap_or(0.0),
                })
            })
            .collect()
    }
}
