//! 0–100 farming score from current conditions.

use crate::models::CurrentWeather;
use crate::thresholds::THRESHOLDS;

// ---

/// Start from 100 and subtract one penalty per dimension.
///
/// Penalties stack across temperature, humidity, rain and wind; within a
/// dimension only the matching band applies. The sum is clamped to [0, 100]
/// once, at the end.
pub fn farming_score(current: &CurrentWeather) -> u8 {
    // ---
    let bands = &THRESHOLDS.score;
    let penalty = bands.temperature.penalty(current.temperature)
        + bands.humidity.penalty(current.humidity)
        + bands.rain.penalty(current.rain_1h)
        + bands.wind.penalty(current.wind_speed);

    (100 - penalty).clamp(0, 100) as u8
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;

    fn reading(temperature: f64, humidity: f64, rain_1h: f64, wind_speed: f64) -> CurrentWeather {
        // ---
        CurrentWeather {
            temperature,
            feels_like: temperature,
            humidity,
            pressure: 1013.0,
            wind_speed,
            clouds: 0.0,
            visibility: 10.0,
            rain_1h,
            description: "clear sky".to_string(),
            icon: "01d".to_string(),
            location: "Test Farm".to_string(),
        }
    }

    #[test]
    fn test_ideal_conditions() {
        // ---
        assert_eq!(farming_score(&reading(22.0, 50.0, 0.0, 2.0)), 100);
    }

    #[test]
    fn test_heat_and_humidity_scenario() {
        // ---
        // 85% is still the mild humidity band; the severe band starts above it
        assert_eq!(farming_score(&reading(36.0, 85.0, 0.0, 5.0)), 60);
        assert_eq!(farming_score(&reading(36.0, 86.0, 0.0, 5.0)), 50);
    }

    #[test]
    fn test_mild_bands() {
        // ---
        assert_eq!(farming_score(&reading(31.0, 50.0, 0.0, 0.0)), 85);
        assert_eq!(farming_score(&reading(22.0, 80.0, 0.0, 0.0)), 90);
        assert_eq!(farming_score(&reading(22.0, 50.0, 15.0, 0.0)), 85);
        assert_eq!(farming_score(&reading(22.0, 50.0, 0.0, 12.0)), 90);
    }

    #[test]
    fn test_penalties_stack() {
        // ---
        // 100 - 30 - 20 - 25 - 20
        assert_eq!(farming_score(&reading(40.0, 95.0, 30.0, 20.0)), 5);
        assert_eq!(farming_score(&reading(5.0, 10.0, 21.0, 16.0)), 5);
    }

    #[test]
    fn test_extreme_inputs_stay_in_range() {
        // ---
        let extremes = [
            reading(200.0, 500.0, 1000.0, 300.0),
            reading(-200.0, -50.0, -10.0, -5.0),
            reading(f64::MAX, f64::MIN, f64::MAX, f64::MAX),
            reading(f64::INFINITY, f64::NEG_INFINITY, f64::INFINITY, f64::INFINITY),
            reading(f64::NAN, f64::NAN, f64::NAN, f64::NAN),
        ];
        for w in &extremes {
            let score = farming_score(w);
            assert!(score <= 100, "score {} out of range for {:?}", score, w);
        }
        assert_eq!(farming_score(&extremes[0]), 5);
    }
}
