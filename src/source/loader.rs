//! File processing pipeline: read → aggregate → match file name.
//!
//! Files are processed one at a time, each to completion.

use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::core::{DailyAverage, FilenameMatch, aggregate_daily, file_stem, parse_sensor_filename};
use crate::error::ParseFailure;
use crate::source::reader::read_readings;

/// A file whose CSV was read and aggregated successfully
#[derive(Debug, Clone)]
pub(crate) struct ProcessedFile {
    pub(crate) path: PathBuf,
    pub(crate) stem: String,
    pub(crate) metadata: FilenameMatch,
    pub(crate) averages: Vec<DailyAverage>,
}

#[derive(Debug)]
pub(crate) enum FileOutcome {
    Processed(ProcessedFile),
    Failed { path: PathBuf, error: ParseFailure },
}

/// Outcomes of a batch, in input order
#[derive(Debug, Default)]
pub(crate) struct BatchReport {
    pub(crate) outcomes: Vec<FileOutcome>,
    pub(crate) elapsed_ms: f64,
}

impl BatchReport {
    pub(crate) fn failed_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, FileOutcome::Failed { .. }))
            .count()
    }
}

/// Aggregate one file and extract its sensor metadata.
/// The CSV is aggregated even when the name does not match.
pub(crate) fn process_file(path: &Path) -> Result<ProcessedFile, ParseFailure> {
    let readings = read_readings(path)?;
    let reading_count = readings.len();
    let averages = aggregate_daily(readings);

    let stem = file_stem(path);
    let metadata = parse_sensor_filename(&stem);
    tracing::debug!(
        file = %path.display(),
        readings = reading_count,
        days = averages.len(),
        matched = matches!(metadata, FilenameMatch::Matched(_)),
        "processed file"
    );

    Ok(ProcessedFile {
        path: path.to_path_buf(),
        stem,
        metadata,
        averages,
    })
}

pub(crate) fn process_batch(paths: &[PathBuf]) -> BatchReport {
    let start = Instant::now();
    let mut outcomes = Vec::with_capacity(paths.len());

    for path in paths {
        match process_file(path) {
            Ok(processed) => outcomes.push(FileOutcome::Processed(processed)),
            Err(error) => {
                tracing::error!(file = %path.display(), error = %error, "failed to process file");
                outcomes.push(FileOutcome::Failed {
                    path: path.clone(),
                    error,
                });
            }
        }
    }

    BatchReport {
        outcomes,
        elapsed_ms: start.elapsed().as_secs_f64() * 1000.0,
    }
}
