//! Group-by-day aggregation of temperature readings

use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::core::types::{DailyAverage, Reading};

/// Running sum for one calendar day
#[derive(Debug, Default)]
struct DayAccumulator {
    sum: f64,
    count: u64,
}

impl DayAccumulator {
    fn add(&mut self, temperature: f64) {
        self.sum += temperature;
        self.count += 1;
    }

    fn mean(&self) -> f64 {
        self.sum / self.count as f64
    }
}

/// Round to one decimal place, halves away from zero
pub(crate) fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Average readings per calendar date (consumes readings).
/// Output is ascending by date with one entry per distinct date.
pub(crate) fn aggregate_daily(readings: Vec<Reading>) -> Vec<DailyAverage> {
    let mut days: BTreeMap<NaiveDate, DayAccumulator> = BTreeMap::new();

    for reading in readings {
        days.entry(reading.date())
            .or_default()
            .add(reading.temperature);
    }

    days.into_iter()
        .map(|(date, acc)| DailyAverage {
            date,
            average: round_one_decimal(acc.mean()),
        })
        .collect()
}
