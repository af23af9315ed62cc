//! Core module - types and pure logic of the processing pipeline

mod aggregator;
mod filename;
mod types;

pub(crate) use aggregator::aggregate_daily;
pub(crate) use filename::{file_stem, parse_sensor_filename};
pub(crate) use types::{DailyAverage, DateFilter, FilenameMatch, Reading, SensorMetadata};
