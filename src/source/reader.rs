//! MOCREO CSV reader
//!
//! Reads the `Timestamp` and `Temperature(Fahrenheit)` columns of an
//! export. Any bad row fails the whole file.

use chrono::NaiveDateTime;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::consts::{TEMPERATURE_COLUMN, TIMESTAMP_COLUMN, TIMESTAMP_FORMAT};
use crate::core::Reading;
use crate::error::ParseFailure;

/// Positions of the required columns in the header row
#[derive(Debug, Clone, Copy)]
struct Columns {
    timestamp: usize,
    temperature: usize,
}

impl Columns {
    fn resolve(headers: &StringRecord) -> Result<Self, ParseFailure> {
        let find = |name: &'static str| {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or(ParseFailure::MissingColumn { column: name })
        };
        Ok(Columns {
            timestamp: find(TIMESTAMP_COLUMN)?,
            temperature: find(TEMPERATURE_COLUMN)?,
        })
    }
}

pub(crate) fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value.trim(), TIMESTAMP_FORMAT).ok()
}

fn parse_temperature(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|t| t.is_finite())
}

/// Read all readings from a CSV file on disk
pub(crate) fn read_readings(path: &Path) -> Result<Vec<Reading>, ParseFailure> {
    let file = File::open(path).map_err(|source| ParseFailure::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_readings(file)
}

/// Parse readings from any CSV source. Extra columns are ignored, but every
/// row must have as many fields as the header.
pub(crate) fn parse_readings<R: Read>(input: R) -> Result<Vec<Reading>, ParseFailure> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(input);

    let columns = Columns::resolve(reader.headers()?)?;

    let mut readings = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record?;
        let row = index as u64 + 1;

        let raw_ts = record.get(columns.timestamp).unwrap_or_default();
        let timestamp = parse_timestamp(raw_ts).ok_or_else(|| ParseFailure::InvalidTimestamp {
            row,
            value: raw_ts.to_string(),
        })?;

        let raw_temp = record.get(columns.temperature).unwrap_or_default();
        let temperature =
            parse_temperature(raw_temp).ok_or_else(|| ParseFailure::InvalidTemperature {
                row,
                value: raw_temp.to_string(),
            })?;

        readings.push(Reading {
            timestamp,
            temperature,
        });
    }

    Ok(readings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn parse(csv: &str) -> Result<Vec<Reading>, ParseFailure> {
        parse_readings(csv.as_bytes())
    }

    #[test]
    fn parses_twelve_hour_timestamps() {
        let readings = parse(
            "Timestamp,Temperature(Fahrenheit)\n\
             01/01/2024 08:00:00 AM,70.0\n\
             01/01/2024 06:00:00 PM,74\n",
        )
        .unwrap();
        assert_eq!(readings.len(), 2);
        let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(readings[0].timestamp, day.and_hms_opt(8, 0, 0).unwrap());
        assert_eq!(readings[1].timestamp, day.and_hms_opt(18, 0, 0).unwrap());
        assert_eq!(readings[1].temperature, 74.0);
    }

    #[test]
    fn midnight_and_noon() {
        assert_eq!(
            parse_timestamp("03/10/2024 12:15:00 AM").unwrap().time(),
            chrono::NaiveTime::from_hms_opt(0, 15, 0).unwrap()
        );
        assert_eq!(
            parse_timestamp("03/10/2024 12:15:00 PM").unwrap().time(),
            chrono::NaiveTime::from_hms_opt(12, 15, 0).unwrap()
        );
    }

    #[test]
    fn padding_is_optional() {
        let ts = parse_timestamp("3/5/2024 7:05:09 PM").unwrap();
        assert_eq!(
            ts,
            NaiveDate::from_ymd_opt(2024, 3, 5)
                .unwrap()
                .and_hms_opt(19, 5, 9)
                .unwrap()
        );
    }

    #[test]
    fn extra_columns_are_ignored() {
        let readings = parse(
            "Timestamp,Humidity(%),Temperature(Fahrenheit),Battery\n\
             01/02/2024 01:00:00 PM,40,68.5,99\n",
        )
        .unwrap();
        assert_eq!(readings.len(), 1);
        assert_eq!(readings[0].temperature, 68.5);
    }

    #[test]
    fn missing_temperature_column_fails() {
        let err = parse("Timestamp,Humidity(%)\n01/01/2024 08:00:00 AM,40\n").unwrap_err();
        assert!(matches!(
            err,
            ParseFailure::MissingColumn {
                column: "Temperature(Fahrenheit)"
            }
        ));
    }

    #[test]
    fn missing_timestamp_column_fails() {
        let err = parse("Time,Temperature(Fahrenheit)\n01/01/2024 08:00:00 AM,70\n").unwrap_err();
        assert!(matches!(err, ParseFailure::MissingColumn { column: "Timestamp" }));
    }

    #[test]
    fn bad_timestamp_fails_whole_file() {
        let err = parse(
            "Timestamp,Temperature(Fahrenheit)\n\
             01/01/2024 08:00:00 AM,70.0\n\
             2024-01-01 18:00:00,74.0\n",
        )
        .unwrap_err();
        match err {
            ParseFailure::InvalidTimestamp { row, value } => {
                assert_eq!(row, 2);
                assert_eq!(value, "2024-01-01 18:00:00");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_numeric_temperature_fails() {
        let err = parse("Timestamp,Temperature(Fahrenheit)\n01/01/2024 08:00:00 AM,warm\n")
            .unwrap_err();
        assert!(matches!(err, ParseFailure::InvalidTemperature { row: 1, .. }));
    }

    #[test]
    fn empty_temperature_cell_fails() {
        let err =
            parse("Timestamp,Temperature(Fahrenheit)\n01/01/2024 08:00:00 AM,\n").unwrap_err();
        assert!(matches!(err, ParseFailure::InvalidTemperature { .. }));
    }

    #[test]
    fn ragged_row_fails_whole_file() {
        let err = parse(
            "Timestamp,Temperature(Fahrenheit)\n\
             01/01/2024 08:00:00 AM,70.0\n\
             01/01/2024 09:00:00 AM,71.0,junk,more\n",
        )
        .unwrap_err();
        match err {
            ParseFailure::Csv(e) => {
                assert!(matches!(e.kind(), csv::ErrorKind::UnequalLengths { .. }))
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn short_row_fails_whole_file() {
        let err =
            parse("Timestamp,Temperature(Fahrenheit)\n01/01/2024 08:00:00 AM\n").unwrap_err();
        assert!(matches!(err, ParseFailure::Csv(_)));
    }

    #[test]
    fn header_only_yields_no_readings() {
        assert!(parse("Timestamp,Temperature(Fahrenheit)\n").unwrap().is_empty());
    }

    #[test]
    fn missing_file_is_io_failure() {
        let err = read_readings(Path::new("/definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, ParseFailure::Io { .. }));
    }
}
