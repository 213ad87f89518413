//! Collapse sub-daily forecast intervals into one summary per calendar day.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::models::{DailyForecast, ForecastInterval};

// ---

/// Running totals for a single calendar day.
struct DayAccumulator {
    // ---
    date: NaiveDate,
    temp_min: f64,
    temp_max: f64,
    temp_sum: f64,
    humidity_sum: f64,
    rain_total: f64,
    samples: usize,
    /// Description counts in first-seen order.
    descriptions: Vec<(String, usize)>,
}

impl DayAccumulator {
    // ---
    fn new(date: NaiveDate) -> Self {
        Self {
            date,
            temp_min: f64::INFINITY,
            temp_max: f64::NEG_INFINITY,
            temp_sum: 0.0,
            humidity_sum: 0.0,
            rain_total: 0.0,
            samples: 0,
            descriptions: Vec::new(),
        }
    }

    fn push(&mut self, interval: &ForecastInterval) {
        // ---
        self.temp_min = self.temp_min.min(interval.temperature);
        self.temp_max = self.temp_max.max(interval.temperature);
        self.temp_sum += interval.temperature;
        self.humidity_sum += interval.humidity;
        // Negative or NaN rainfall counts as none
        self.rain_total += interval.rain_3h.max(0.0);
        self.samples += 1;

        match self
            .descriptions
            .iter_mut()
            .find(|(d, _)| *d == interval.description)
        {
            Some((_, count)) => *count += 1,
            None => self.descriptions.push((interval.description.clone(), 1)),
        }
    }

    /// Most frequent description; on a tie the one seen first wins.
    fn dominant_description(&self) -> String {
        // ---
        let mut best: Option<&(String, usize)> = None;
        for entry in &self.descriptions {
            if best.map_or(true, |b| entry.1 > b.1) {
                best = Some(entry);
            }
        }
        best.map(|(d, _)| d.clone()).unwrap_or_default()
    }

    fn finish(self) -> DailyForecast {
        // ---
        let n = self.samples as f64;
        let temp_avg = self.temp_sum / n;
        // Rounding in the mean must not push it outside the observed range
        let temp_avg = if self.temp_min <= self.temp_max {
            temp_avg.clamp(self.temp_min, self.temp_max)
        } else {
            temp_avg
        };

        DailyForecast {
            date: self.date,
            temp_min: self.temp_min,
            temp_max: self.temp_max,
            temp_avg,
            humidity_avg: self.humidity_sum / n,
            description: self.dominant_description(),
            rain_total: self.rain_total,
        }
    }
}

/// Group `intervals` by local calendar day and summarise each day.
///
/// Days appear in the order they are first seen and the result holds at most
/// `horizon_days` entries. Empty input gives an empty result.
pub fn aggregate(intervals: &[ForecastInterval], horizon_days: usize) -> Vec<DailyForecast> {
    // ---
    let mut days: Vec<DayAccumulator> = Vec::new();
    let mut index: HashMap<NaiveDate, usize> = HashMap::new();

    for interval in intervals {
        let date = interval.timestamp.date_naive();
        let slot = match index.get(&date) {
            Some(&i) => i,
            None => {
                if days.len() >= horizon_days {
                    // Beyond the horizon; later samples for known days still count
                    continue;
                }
                index.insert(date, days.len());
                days.push(DayAccumulator::new(date));
                days.len() - 1
            }
        };
        days[slot].push(interval);
    }

    tracing::debug!(
        "Aggregated {} intervals into {} days (horizon {})",
        intervals.len(),
        days.len(),
        horizon_days
    );

    days.into_iter().map(DayAccumulator::finish).collect()
}
