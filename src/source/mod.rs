//! Data source layer
//!
//! Finds MOCREO CSV exports, reads them and runs them through the
//! aggregation pipeline.

pub(crate) mod discover;
pub(crate) mod loader;
pub(crate) mod reader;

pub(crate) use discover::find_files;
pub(crate) use loader::{BatchReport, FileOutcome, process_batch};
