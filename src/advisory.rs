//! Rule-based farming advice from current conditions and optional soil data.
//!
//! Rules live in one ordered table and are evaluated top to bottom; several
//! may fire for the same reading. Output order follows the table:
//! temperature, humidity, rain, wind, soil, then the fallback line.

use serde::Serialize;

use crate::models::{CurrentWeather, MoistureLevel, SoilSummary};
use crate::thresholds::THRESHOLDS;

// ---

/// Advice lines the engine can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Advice {
    WaterOffPeak,
    ApplyMulch,
    EnsureWatering,
    CoverYoungPlants,
    ImproveCirculation,
    AvoidOverheadWatering,
    ExtraWater,
    DelayPesticide,
    LightRainBeneficial,
    WaterAsNeeded,
    DelaySpraying,
    GoodConditions,
}

impl Advice {
    // ---
    /// Stable identifier for localisation layers.
    pub fn code(&self) -> &'static str {
        match self {
            Self::WaterOffPeak => "water_off_peak",
            Self::ApplyMulch => "apply_mulch",
            Self::EnsureWatering => "ensure_watering",
            Self::CoverYoungPlants => "cover_young_plants",
            Self::ImproveCirculation => "improve_circulation",
            Self::AvoidOverheadWatering => "avoid_overhead_watering",
            Self::ExtraWater => "extra_water",
            Self::DelayPesticide => "delay_pesticide",
            Self::LightRainBeneficial => "light_rain_beneficial",
            Self::WaterAsNeeded => "water_as_needed",
            Self::DelaySpraying => "delay_spraying",
            Self::GoodConditions => "good_conditions",
        }
    }

    /// English text of the advice line.
    pub fn message(&self) -> &'static str {
        match self {
            Self::WaterOffPeak => "Water plants early morning or evening, not midday.",
            Self::ApplyMulch => "Use mulch to keep soil cool and retain moisture.",
            Self::EnsureWatering => "Hot weather - ensure adequate watering.",
            Self::CoverYoungPlants => "Cover young plants to protect from cold.",
            Self::ImproveCirculation => "Improve air circulation around plants.",
            Self::AvoidOverheadWatering => "Avoid overhead watering to prevent disease.",
            Self::ExtraWater => "Low humidity - plants may need extra water.",
            Self::DelayPesticide => "Delay pesticide application until rain stops.",
            Self::LightRainBeneficial => "Light rain expected - good for crops.",
            Self::WaterAsNeeded => "No rain expected - water as needed.",
            Self::DelaySpraying => "Delay spraying operations.",
            Self::GoodConditions => "✅ Good conditions for farming today!",
        }
    }
}

/// Alert lines the engine can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Alert {
    ExtremeHeat,
    Cold,
    HighHumidity,
    HeavyRain,
    StrongWind,
    IrrigationUrgent,
    PoorDrainage,
}

impl Alert {
    // ---
    pub fn code(&self) -> &'static str {
        match self {
            Self::ExtremeHeat => "extreme_heat",
            Self::Cold => "cold",
            Self::HighHumidity => "high_humidity",
            Self::HeavyRain => "heavy_rain",
            Self::StrongWind => "strong_wind",
            Self::IrrigationUrgent => "irrigation_urgent",
            Self::PoorDrainage => "poor_drainage",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::ExtremeHeat => "🌡️ Extreme heat warning! Protect your crops.",
            Self::Cold => "❄️ Cold weather alert! Protect sensitive crops.",
            Self::HighHumidity => "💧 High humidity - watch for fungal diseases.",
            Self::HeavyRain => "🌧️ Heavy rain expected - check drainage.",
            Self::StrongWind => "💨 Strong winds - stake tall plants.",
            Self::IrrigationUrgent => "🏜️ Dry soil + no rain - irrigation urgent!",
            Self::PoorDrainage => "⚠️ Soil waterlogged - improve drainage.",
        }
    }
}

/// Inputs a rule predicate can look at.
struct Conditions<'a> {
    // ---
    weather: &'a CurrentWeather,
    moisture: Option<MoistureLevel>,
}

impl Conditions<'_> {
    fn no_rain(&self) -> bool {
        self.weather.rain_1h <= 0.0
    }
}

/// One row of the rule table.
struct Rule {
    // ---
    name: &'static str,
    applies: fn(&Conditions) -> bool,
    alert: Option<Alert>,
    advice: &'static [Advice],
}

const RULES: [Rule; 11] = [
    Rule {
        name: "extreme_heat",
        applies: |c| c.weather.temperature > THRESHOLDS.advisory.heat_c,
        alert: Some(Alert::ExtremeHeat),
        advice: &[Advice::WaterOffPeak, Advice::ApplyMulch],
    },
    Rule {
        name: "hot",
        applies: |c| {
            c.weather.temperature > THRESHOLDS.advisory.warm_c
                && c.weather.temperature <= THRESHOLDS.advisory.heat_c
        },
        alert: None,
        advice: &[Advice::EnsureWatering],
    },
    Rule {
        name: "cold",
        applies: |c| c.weather.temperature < THRESHOLDS.advisory.cold_c,
        alert: Some(Alert::Cold),
        advice: &[Advice::CoverYoungPlants],
    },
    Rule {
        name: "high_humidity",
        applies: |c| c.weather.humidity > THRESHOLDS.advisory.humid_pct,
        alert: Some(Alert::HighHumidity),
        advice: &[Advice::ImproveCirculation, Advice::AvoidOverheadWatering],
    },
    Rule {
        name: "low_humidity",
        applies: |c| c.weather.humidity < THRESHOLDS.advisory.dry_air_pct,
        alert: None,
        advice: &[Advice::ExtraWater],
    },
    Rule {
        name: "heavy_rain",
        applies: |c| c.weather.rain_1h > THRESHOLDS.advisory.heavy_rain_mm,
        alert: Some(Alert::HeavyRain),
        advice: &[Advice::DelayPesticide],
    },
    Rule {
        name: "light_rain",
        applies: |c| {
            c.weather.rain_1h > 0.0 && c.weather.rain_1h <= THRESHOLDS.advisory.heavy_rain_mm
        },
        alert: None,
        advice: &[Advice::LightRainBeneficial],
    },
    Rule {
        name: "no_rain",
        applies: |c| c.no_rain(),
        alert: None,
        advice: &[Advice::WaterAsNeeded],
    },
    Rule {
        name: "strong_wind",
        applies: |c| c.weather.wind_speed > THRESHOLDS.advisory.strong_wind_ms,
        alert: Some(Alert::StrongWind),
        advice: &[Advice::DelaySpraying],
    },
    Rule {
        name: "dry_soil",
        applies: |c| c.moisture == Some(MoistureLevel::Dry) && c.no_rain(),
        alert: Some(Alert::IrrigationUrgent),
        advice: &[],
    },
    Rule {
        name: "waterlogged_soil",
        applies: |c| c.moisture == Some(MoistureLevel::Waterlogged),
        alert: Some(Alert::PoorDrainage),
        advice: &[],
    },
];

/// Evaluate the rule table against `current` and optional `soil`.
///
/// Returns `(advice, alerts)` in table order. When no alert fires the
/// "good conditions" line is appended to the advice.
pub fn advise(current: &CurrentWeather, soil: Option<&SoilSummary>) -> (Vec<Advice>, Vec<Alert>) {
    // ---
    let conditions = Conditions {
        weather: current,
        moisture: soil.map(|s| s.moisture_level),
    };

    let mut advice = Vec::new();
    let mut alerts = Vec::new();

    for rule in RULES.iter().filter(|r| (r.applies)(&conditions)) {
        tracing::trace!("Advisory rule fired: {}", rule.name);
        alerts.extend(rule.alert);
        advice.extend_from_slice(rule.advice);
    }

    if alerts.is_empty() {
        advice.push(Advice::GoodConditions);
    }

    (advice, alerts)
}
