//! Fixed cut-points used by the advisory rules and the farming score.
//!
//! The table is compiled in and never changes at runtime. Bump `version`
//! whenever a value changes so downstream consumers can tell outputs apart.

// ---

/// Cut-points for the advisory rule table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdvisoryThresholds {
    // ---
    /// Above this (°C): heat alert.
    pub heat_c: f64,
    /// Above this and up to `heat_c` (°C): hot-weather watering advice.
    pub warm_c: f64,
    /// Below this (°C): cold alert.
    pub cold_c: f64,
    /// Above this (%): humidity alert.
    pub humid_pct: f64,
    /// Below this (%): extra water advice.
    pub dry_air_pct: f64,
    /// Above this (mm/h): heavy rain alert.
    pub heavy_rain_mm: f64,
    /// Above this (m/s): strong wind alert.
    pub strong_wind_ms: f64,
}

/// A two-tier penalty band: the severe tier wins over the mild one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PenaltyBand {
    // ---
    pub severe_below: f64,
    pub severe_above: f64,
    pub severe_penalty: i32,
    pub mild_below: f64,
    pub mild_above: f64,
    pub mild_penalty: i32,
}

impl PenaltyBand {
    // ---
    /// Penalty for `value`; at most one tier applies.
    pub fn penalty(&self, value: f64) -> i32 {
        // ---
        if value < self.severe_below || value > self.severe_above {
            self.severe_penalty
        } else if value < self.mild_below || value > self.mild_above {
            self.mild_penalty
        } else {
            0
        }
    }
}

/// Penalty bands for the farming score, one per dimension.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreThresholds {
    // ---
    pub temperature: PenaltyBand,
    pub humidity: PenaltyBand,
    pub rain: PenaltyBand,
    pub wind: PenaltyBand,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    // ---
    pub version: u32,
    pub advisory: AdvisoryThresholds,
    pub score: ScoreThresholds,
}

pub const THRESHOLDS: Thresholds = Thresholds {
    version: 1,
    advisory: AdvisoryThresholds {
        heat_c: 35.0,
        warm_c: 30.0,
        cold_c: 10.0,
        humid_pct: 80.0,
        dry_air_pct: 30.0,
        heavy_rain_mm: 10.0,
        strong_wind_ms: 10.0,
    },
    score: ScoreThresholds {
        temperature: PenaltyBand {
            severe_below: 10.0,
            severe_above: 35.0,
            severe_penalty: 30,
            mild_below: 15.0,
            mild_above: 30.0,
            mild_penalty: 15,
        },
        humidity: PenaltyBand {
            severe_below: 25.0,
            severe_above: 85.0,
            severe_penalty: 20,
            mild_below: 35.0,
            mild_above: 75.0,
            mild_penalty: 10,
        },
        // Rain and wind only penalise the high side.
        rain: PenaltyBand {
            severe_below: f64::NEG_INFINITY,
            severe_above: 20.0,
            severe_penalty: 25,
            mild_below: f64::NEG_INFINITY,
            mild_above: 10.0,
            mild_penalty: 15,
        },
        wind: PenaltyBand {
            severe_below: f64::NEG_INFINITY,
            severe_above: 15.0,
            severe_penalty: 20,
            mild_below: f64::NEG_INFINITY,
            mild_above: 10.0,
            mild_penalty: 10,
        },
    },
};

#[cfg(test)]
mod tests {
    // ---
    use super::*;

    #[test]
    fn test_band_tiers_are_exclusive() {
        // ---
        let temp = THRESHOLDS.score.temperature;
        assert_eq!(temp.penalty(22.0), 0);
        assert_eq!(temp.penalty(14.9), 15);
        assert_eq!(temp.penalty(31.0), 15);
        assert_eq!(temp.penalty(9.9), 30);
        assert_eq!(temp.penalty(36.0), 30);
    }

    #[test]
    fn test_band_edges_are_exclusive() {
        // ---
        let temp = THRESHOLDS.score.temperature;
        assert_eq!(temp.penalty(35.0), 15);
        assert_eq!(temp.penalty(30.0), 0);
        assert_eq!(temp.penalty(10.0), 15);
        assert_eq!(temp.penalty(15.0), 0);
    }

    #[test]
    fn test_one_sided_bands() {
        // ---
        let rain = THRESHOLDS.score.rain;
        assert_eq!(rain.penalty(0.0), 0);
        assert_eq!(rain.penalty(-5.0), 0);
        assert_eq!(rain.penalty(10.5), 15);
        assert_eq!(rain.penalty(20.5), 25);
    }
}
