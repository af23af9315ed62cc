use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Invalid date \"{input}\" (expected YYYYMMDD or YYYY-MM-DD)")]
    InvalidDate { input: String },

    #[error("No CSV files found in the given inputs")]
    NoInputs,

    #[error("Failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Any problem loading or parsing one CSV file.
///
/// A file that fails never yields a partial result.
#[derive(Debug, Error)]
pub(crate) enum ParseFailure {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing required column \"{column}\"")]
    MissingColumn { column: &'static str },

    #[error("Row {row}: invalid timestamp \"{value}\" (expected MM/DD/YYYY hh:mm:ss AM/PM)")]
    InvalidTimestamp { row: u64, value: String },

    #[error("Row {row}: invalid temperature \"{value}\"")]
    InvalidTemperature { row: u64, value: String },
}
