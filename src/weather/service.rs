//! Fetch current conditions and forecast, substituting placeholder data for
//! whatever the primary source fails to deliver.

use std::sync::Arc;

use tracing::{debug, warn};

use super::{SyntheticWeather, WeatherSource};
use crate::models::{Provenance, WeatherSnapshot};

// ---

#[derive(Clone)]
pub struct WeatherService {
    // ---
    primary: Arc<dyn WeatherSource>,
    fallback: SyntheticWeather,
}

impl WeatherService {
    // ---
    pub fn new(primary: Arc<dyn WeatherSource>) -> Self {
        Self::with_fallback(primary, SyntheticWeather::new())
    }

    pub fn with_fallback(primary: Arc<dyn WeatherSource>, fallback: SyntheticWeather) -> Self {
        Self { primary, fallback }
    }

    pub fn source_name(&self) -> &'static str {
        self.primary.name()
    }

    /// Fetch both feeds concurrently. Never fails: each failed feed is
    /// replaced by synthetic data carrying the error text.
    pub async fn snapshot(&self, latitude: f64, longitude: f64, days: usize) -> WeatherSnapshot {
        // ---
        let fallback = self.fallback.pinned();
        let (current, forecast) = tokio::join!(
            self.primary.fetch_current(latitude, longitude),
            self.primary.fetch_forecast(latitude, longitude, days),
        );

        let (current, current_source) = match current {
            Ok(current) => (current, self.provenance()),
            Err(e) => {
                warn!(
                    "Current weather from {} unavailable, using synthetic data: {}",
                    self.primary.name(),
                    e
                );
                (
                    fallback.current(latitude, longitude),
                    Provenance::Synthetic {
                        error: Some(e.to_string()),
                    },
                )
            }
        };

        let (intervals, forecast_source) = match forecast {
            Ok(intervals) => (intervals, self.provenance()),
            Err(e) => {
                warn!(
                    "Forecast from {} unavailable, using synthetic data: {}",
                    self.primary.name(),
                    e
                );
                (
                    fallback.intervals(),
                    Provenance::Synthetic {
                        error: Some(e.to_string()),
                    },
                )
            }
        };

        debug!(
            "Snapshot for ({}, {}): {} forecast intervals",
            latitude,
            longitude,
            intervals.len()
        );

        WeatherSnapshot {
            current,
            current_source,
            intervals,
            forecast_source,
        }
    }

    fn provenance(&self) -> Provenance {
        if self.primary.is_synthetic() {
            Provenance::Synthetic { error: None }
        } else {
            Provenance::Live
        }
    }
}
