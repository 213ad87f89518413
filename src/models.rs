//! Data models for the weather advisory pipeline.
//!
//! Every value here is request-scoped: produced once per request, read by the
//! engine, serialized into the response and then dropped.

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

// ---

/// Snapshot of current conditions at a location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    // ---
    /// Air temperature in °C.
    pub temperature: f64,
    pub feels_like: f64,
    /// Relative humidity in percent.
    pub humidity: f64,
    /// Pressure in hPa.
    pub pressure: f64,
    /// Wind speed in m/s.
    pub wind_speed: f64,
    /// Cloud cover in percent.
    pub clouds: f64,
    /// Visibility in km.
    pub visibility: f64,
    /// Rainfall over the last hour in mm.
    pub rain_1h: f64,
    pub description: String,
    pub icon: String,
    pub location: String,
}

/// A single raw sub-daily forecast sample.
///
/// The timestamp carries the location's UTC offset so that
/// `timestamp.date_naive()` is the local calendar day.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastInterval {
    // ---
    pub timestamp: DateTime<FixedOffset>,
    pub temperature: f64,
    pub humidity: f64,
    pub description: String,
    /// Rainfall over the 3-hour slot in mm.
    pub rain_3h: f64,
}

/// One summary record per local calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecast {
    // ---
    pub date: NaiveDate,
    pub temp_min: f64,
    pub temp_max: f64,
    pub temp_avg: f64,
    pub humidity_avg: f64,
    /// Most frequent description of the day; first seen wins ties.
    pub description: String,
    pub rain_total: f64,
}

/// Soil moisture category reported by the soil classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoistureLevel {
    Dry,
    SlightlyMoist,
    Moist,
    Wet,
    Waterlogged,
    #[default]
    Unknown,
}

impl MoistureLevel {
    // ---
    /// Lenient parse: case-insensitive, spaces and hyphens treated as `_`.
    /// Anything unrecognised is [`MoistureLevel::Unknown`].
    pub fn parse(raw: &str) -> Self {
        // ---
        let normalized = raw.trim().to_lowercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "dry" => Self::Dry,
            "slightly_moist" => Self::SlightlyMoist,
            "moist" => Self::Moist,
            "wet" => Self::Wet,
            "waterlogged" => Self::Waterlogged,
            _ => Self::Unknown,
        }
    }
}

/// Externally classified soil summary. Only the moisture level is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SoilSummary {
    // ---
    pub moisture_level: MoistureLevel,
}

impl SoilSummary {
    // ---
    /// Build a summary from whatever JSON the classifier produced.
    ///
    /// Other fields are ignored; a missing or non-string `moisture_level`
    /// yields `unknown` instead of an error.
    pub fn from_value(value: &serde_json::Value) -> Self {
        // ---
        let moisture_level = value
            .get("moisture_level")
            .and_then(|m| m.as_str())
            .map(MoistureLevel::parse)
            .unwrap_or_default();

        Self { moisture_level }
    }
}

/// Where a piece of weather data came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum Provenance {
    Live,
    Synthetic {
        #[serde(skip_serializing_if = "Option::is_none")]
        error: Option<String>,
    },
}

impl Provenance {
    pub fn is_synthetic(&self) -> bool {
        matches!(self, Provenance::Synthetic { .. })
    }
}

/// Raw weather inputs for one request, each tagged with its provenance.
#[derive(Debug, Clone)]
pub struct WeatherSnapshot {
    // ---
    pub current: CurrentWeather,
    pub current_source: Provenance,
    pub intervals: Vec<ForecastInterval>,
    pub forecast_source: Provenance,
}

/// Response language tag. Only echoed; advice text is not translated here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "hi")]
    Hindi,
    #[serde(rename = "te")]
    Telugu,
}

/// Response body of the advisory endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct FarmingReport {
    // ---
    pub location: String,
    pub current: CurrentWeather,
    pub current_source: Provenance,
    pub forecast: Vec<DailyForecast>,
    pub forecast_source: Provenance,
    /// True when any part of the report is placeholder data.
    pub synthetic: bool,
    pub rain_probability: f64,
    pub advice: Vec<String>,
    pub alerts: Vec<String>,
    pub farming_score: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub soil: Option<SoilSummary>,
    pub language: Language,
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use serde_json::json;

    #[test]
    fn test_moisture_level_parse() {
        // ---
        assert_eq!(MoistureLevel::parse("dry"), MoistureLevel::Dry);
        assert_eq!(MoistureLevel::parse("DRY"), MoistureLevel::Dry);
        assert_eq!(MoistureLevel::parse(" Waterlogged "), MoistureLevel::Waterlogged);
        assert_eq!(MoistureLevel::parse("slightly moist"), MoistureLevel::SlightlyMoist);
        assert_eq!(MoistureLevel::parse("slightly-moist"), MoistureLevel::SlightlyMoist);
        assert_eq!(MoistureLevel::parse("soggy"), MoistureLevel::Unknown);
        assert_eq!(MoistureLevel::parse(""), MoistureLevel::Unknown);
    }

    #[test]
    fn test_soil_summary_reads_only_moisture() {
        // ---
        let soil = SoilSummary::from_value(&json!({
            "soil_type": "loam",
            "moisture_level": "Wet",
            "ph_estimate": "6.5"
        }));
        assert_eq!(soil.moisture_level, MoistureLevel::Wet);
    }

    #[test]
    fn test_malformed_soil_is_unknown() {
        // ---
        let cases = [
            json!(null),
            json!("dry"),
            json!([1, 2, 3]),
            json!({}),
            json!({ "moisture_level": 42 }),
        ];
        for case in cases {
            assert_eq!(
                SoilSummary::from_value(&case).moisture_level,
                MoistureLevel::Unknown,
                "input: {}",
                case
            );
        }
    }

    #[test]
    fn test_provenance_serialization() {
        // ---
        let live = serde_json::to_value(Provenance::Live).unwrap();
        assert_eq!(live, json!({ "source": "live" }));

        let fallback = serde_json::to_value(Provenance::Synthetic {
            error: Some("timed out".to_string()),
        })
        .unwrap();
        assert_eq!(fallback, json!({ "source": "synthetic", "error": "timed out" }));
    }

    #[test]
    fn test_language_tags() {
        // ---
        let lang: Language = serde_json::from_value(json!("te")).unwrap();
        assert_eq!(lang, Language::Telugu);
        assert!(serde_json::from_value::<Language>(json!("fr")).is_err());
        assert_eq!(serde_json::to_value(Language::default()).unwrap(), json!("en"));
    }
}
