//! Deterministic placeholder weather.
//!
//! Used when no API key is configured and as the substitute for any failed
//! upstream fetch. Output depends only on the coordinates and the anchor date.

use async_trait::async_trait;
use chrono::{Duration, NaiveDate, NaiveTime, Offset, TimeZone, Utc};

use super::{WeatherSource, WeatherSourceError};
use crate::models::{CurrentWeather, ForecastInterval};

// ---

const SYNTHETIC_DAYS: usize = 5;
const DESCRIPTIONS: [&str; SYNTHETIC_DAYS] =
    ["sunny", "partly cloudy", "cloudy", "light rain", "sunny"];
const DAILY_RAIN_MM: [f64; SYNTHETIC_DAYS] = [0.0, 0.0, 2.0, 8.0, 0.0];
/// Local hours of the three samples emitted per day.
const SLOT_HOURS: [i64; 3] = [6, 12, 18];

/// Placeholder weather generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyntheticWeather {
    // ---
    /// First forecast day; `None` means "today (UTC) at call time".
    anchor: Option<NaiveDate>,
}

impl SyntheticWeather {
    // ---
    pub fn new() -> Self {
        Self::default()
    }

    /// Generator whose forecast always starts on `date`.
    pub fn anchored(date: NaiveDate) -> Self {
        Self { anchor: Some(date) }
    }

    /// Copy with the anchor fixed, defaulting to today (UTC) if unset.
    pub fn pinned(&self) -> Self {
        Self::anchored(self.start())
    }

    fn start(&self) -> NaiveDate {
        self.anchor.unwrap_or_else(|| Utc::now().date_naive())
    }

    pub fn current(&self, latitude: f64, longitude: f64) -> CurrentWeather {
        // ---
        CurrentWeather {
            temperature: 28.0,
            feels_like: 30.0,
            humidity: 65.0,
            pressure: 1013.0,
            wind_speed: 3.5,
            clouds: 40.0,
            visibility: 10.0,
            rain_1h: 0.0,
            description: "partly cloudy".to_string(),
            icon: "02d".to_string(),
            location: format!("Location ({:.2}, {:.2})", latitude, longitude),
        }
    }

    /// Five days of samples: temperatures ramp up, humidity ramps down.
    ///
    /// Each day `i` has samples at 22+i, 27+i and 32+i °C so the daily
    /// summary is min 22+i, avg 27+i, max 32+i. That day's rain lands on the
    /// midday sample. Always five days regardless of the requested horizon;
    /// aggregation truncates.
    pub fn intervals(&self) -> Vec<ForecastInterval> {
        // ---
        let start = self.start();
        let utc = Utc.fix();

        let mut intervals = Vec::with_capacity(SYNTHETIC_DAYS * SLOT_HOURS.len());
        for (i, date) in start.iter_days().take(SYNTHETIC_DAYS).enumerate() {
            let ramp = i as f64;
            for (slot, hour) in SLOT_HOURS.iter().enumerate() {
                let local = date.and_time(NaiveTime::MIN) + Duration::hours(*hour);
                let timestamp = utc.from_utc_datetime(&local);
                intervals.push(ForecastInterval {
                    timestamp,
                    temperature: 22.0 + 5.0 * slot as f64 + ramp,
                    humidity: 60.0 - 2.0 * ramp,
                    description: DESCRIPTIONS[i].to_string(),
                    rain_3h: if slot == 1 { DAILY_RAIN_MM[i] } else { 0.0 },
                });
            }
        }
        intervals
    }
}

#[async_trait]
impl WeatherSource for SyntheticWeather {
    // ---
    fn name(&self) -> &'static str {
        "synthetic"
    }

    fn is_synthetic(&self) -> bool {
        true
    }

    async fn fetch_current(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<CurrentWeather, WeatherSourceError> {
        Ok(self.current(latitude, longitude))
    }

    async fn fetch_forecast(
        &self,
        _latitude: f64,
        _longitude: f64,
        _days: usize,
    ) -> Result<Vec<ForecastInterval>, WeatherSourceError> {
        Ok(self.intervals())
    }
}
