//! Core data types for the parsing and aggregation pipeline

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// One CSV row: a timestamp and a temperature in Fahrenheit
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Reading {
    pub(crate) timestamp: NaiveDateTime,
    pub(crate) temperature: f64,
}

impl Reading {
    pub(crate) fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }
}

/// Mean temperature of one calendar day, rounded to one decimal
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct DailyAverage {
    pub(crate) date: NaiveDate,
    pub(crate) average: f64,
}

/// Sensor identity and claimed date range, taken from a file name.
/// Dates are kept as written (`01/02/2023`), never interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct SensorMetadata {
    pub(crate) sensor: String,
    pub(crate) date_from: String,
    pub(crate) date_to: String,
}

/// Result of matching a file name against the MOCREO naming convention
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum FilenameMatch {
    Matched(SensorMetadata),
    NoMatch,
}

/// Date filter for daily averages
#[derive(Debug, Clone, Default)]
pub(crate) struct DateFilter {
    pub(crate) since: Option<NaiveDate>,
    pub(crate) until: Option<NaiveDate>,
}

impl DateFilter {
    pub(crate) fn new(since: Option<NaiveDate>, until: Option<NaiveDate>) -> Self {
        Self { since, until }
    }

    pub(crate) fn contains(&self, date: NaiveDate) -> bool {
        if let Some(s) = self.since
            && date < s
        {
            return false;
        }
        if let Some(u) = self.until
            && date > u
        {
            return false;
        }
        true
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.since.is_none() && self.until.is_none()
    }

    pub(crate) fn apply(&self, averages: Vec<DailyAverage>) -> Vec<DailyAverage> {
        if self.is_empty() {
            return averages;
        }
        averages
            .into_iter()
            .filter(|day| self.contains(day.date))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn reading_date_truncates_time() {
        let reading = Reading {
            timestamp: d(2024, 1, 1).and_hms_opt(23, 59, 59).unwrap(),
            temperature: 70.0,
        };
        assert_eq!(reading.date(), d(2024, 1, 1));
    }

    #[test]
    fn date_filter_no_bounds() {
        let f = DateFilter::new(None, None);
        assert!(f.is_empty());
        assert!(f.contains(d(2020, 1, 1)));
        assert!(f.contains(d(2099, 12, 31)));
    }

    #[test]
    fn date_filter_both_bounds_inclusive() {
        let f = DateFilter::new(Some(d(2025, 3, 1)), Some(d(2025, 3, 31)));
        assert!(!f.contains(d(2025, 2, 28)));
        assert!(f.contains(d(2025, 3, 1)));
        assert!(f.contains(d(2025, 3, 31)));
        assert!(!f.contains(d(2025, 4, 1)));
    }

    #[test]
    fn date_filter_apply_keeps_order() {
        let days = vec![
            DailyAverage {
                date: d(2024, 1, 1),
                average: 70.0,
            },
            DailyAverage {
                date: d(2024, 1, 2),
                average: 71.0,
            },
            DailyAverage {
                date: d(2024, 1, 3),
                average: 72.0,
            },
        ];
        let f = DateFilter::new(Some(d(2024, 1, 2)), None);
        let kept = f.apply(days);
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].date, d(2024, 1, 2));
        assert_eq!(kept[1].date, d(2024, 1, 3));
    }
}
