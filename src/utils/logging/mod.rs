//! Logging utilities
//!
//! Standardized log lines for the life of a dataset load: where it came
//! from, how many records survived, and whether they were validated.

use std::fmt;
use std::path::Path;
use std::time::Duration;

use crate::error::LoadError;

/// Where a dataset is being read from
#[derive(Debug, Clone, Copy)]
pub enum DatasetSource<'a> {
    /// A file on disk
    File(&'a Path),
    /// A JSON string already in memory
    Memory,
    /// An arbitrary reader
    Reader,
}

impl fmt::Display for DatasetSource<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Memory => f.write_str("in-memory JSON"),
            Self::Reader => f.write_str("reader"),
        }
    }
}

/// Log that a dataset load is starting
pub fn log_dataset_load_start(source: DatasetSource<'_>) {
    log::info!("Loading salary records from {source}");
}

/// Log the outcome of a successful dataset load
///
/// An empty dataset is reported as a warning, since both tables will be
/// zero-filled.
///
/// # Arguments
/// * `source` - Where the records came from
/// * `records` - Number of records loaded
/// * `validated` - Whether the records passed validation or skipped it
/// * `elapsed` - Optional elapsed time
pub fn log_dataset_loaded(
    source: DatasetSource<'_>,
    records: usize,
    validated: bool,
    elapsed: Option<Duration>,
) {
    if records == 0 {
        log::warn!("Dataset from {source} contains no salary records");
        return;
    }

    let validation = if validated { "validated" } else { "unvalidated" };
    match elapsed {
        Some(duration) => log::info!(
            "Loaded {records} {validation} salary records from {source} in {duration:?}"
        ),
        None => log::info!("Loaded {records} {validation} salary records from {source}"),
    }
}

/// Log a dataset that could not be loaded
pub fn log_dataset_rejected(source: DatasetSource<'_>, error: &LoadError) {
    log::warn!("Rejected dataset from {source}: {error}");
}
