//! Sensor metadata from MOCREO export file names
//!
//! Exports are named like
//! `MOCREO_ST4_Freezer_(01_02_2023, 03_04_2023)_record.csv`.

use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

use crate::core::types::{FilenameMatch, SensorMetadata};

static SENSOR_FILENAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"MOCREO_ST4_(\w+)_\((\d{2}_\d{2}_\d{4}), (\d{2}_\d{2}_\d{4})\)_record")
        .expect("valid sensor filename pattern")
});

/// Search a base name for the naming convention (substring search, not a full match)
pub(crate) fn parse_sensor_filename(stem: &str) -> FilenameMatch {
    let Some(caps) = SENSOR_FILENAME.captures(stem) else {
        return FilenameMatch::NoMatch;
    };
    match (caps.get(1), caps.get(2), caps.get(3)) {
        (Some(sensor), Some(from), Some(to)) => FilenameMatch::Matched(SensorMetadata {
            sensor: sensor.as_str().to_string(),
            date_from: from.as_str().replace('_', "/"),
            date_to: to.as_str().replace('_', "/"),
        }),
        _ => FilenameMatch::NoMatch,
    }
}

/// File name without directory or extension
pub(crate) fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}
