//! Merge aggregation, rules and scoring into the response handed to the API.

use serde::Serialize;

use crate::advisory::{advise, Advice, Alert};
use crate::aggregate::aggregate;
use crate::models::{
    CurrentWeather, DailyForecast, FarmingReport, Language, SoilSummary, WeatherSnapshot,
};
use crate::scoring::farming_score;

// ---

/// Advice, alerts and score for one weather (and optional soil) snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdvisoryResult {
    // ---
    pub advice: Vec<Advice>,
    pub alerts: Vec<Alert>,
    pub farming_score: u8,
}

/// Run the rule table and the scoring model over the same reading.
pub fn advisory(current: &CurrentWeather, soil: Option<&SoilSummary>) -> AdvisoryResult {
    // ---
    let (advice, alerts) = advise(current, soil);
    AdvisoryResult {
        advice,
        alerts,
        farming_score: farming_score(current),
    }
}

/// Share of forecast days with any rain, in percent. Zero for no days.
pub fn rain_probability(days: &[DailyForecast]) -> f64 {
    // ---
    if days.is_empty() {
        return 0.0;
    }
    let rainy = days.iter().filter(|d| d.rain_total > 0.0).count();
    (rainy * 100) as f64 / days.len() as f64
}

/// Build the full report for a request.
pub fn compose(
    snapshot: WeatherSnapshot,
    soil: Option<SoilSummary>,
    horizon_days: usize,
    language: Language,
) -> FarmingReport {
    // ---
    let forecast = aggregate(&snapshot.intervals, horizon_days);
    let result = advisory(&snapshot.current, soil.as_ref());

    tracing::debug!(
        "Advisory: {} advice, alerts [{}], score {}",
        result.advice.len(),
        result
            .alerts
            .iter()
            .map(Alert::code)
            .collect::<Vec<_>>()
            .join(", "),
        result.farming_score
    );

    let synthetic =
        snapshot.current_source.is_synthetic() || snapshot.forecast_source.is_synthetic();

    FarmingReport {
        location: snapshot.current.location.clone(),
        rain_probability: rain_probability(&forecast),
        forecast,
        forecast_source: snapshot.forecast_source,
        current: snapshot.current,
        current_source: snapshot.current_source,
        synthetic,
        advice: result.advice.iter().map(|a| a.message().to_string()).collect(),
        alerts: result.alerts.iter().map(|a| a.message().to_string()).collect(),
        farming_score: result.farming_score,
        soil,
        language,
    }
}
