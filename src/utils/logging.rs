//! Logging utilities
//!
//! Standardized log lines for the pipeline's passes over the two input
//! datasets.

use std::path::Path;
use std::time::Duration;

/// Log the start of a pass over one of the input datasets
///
/// # Arguments
/// * `dataset` - Which dataset is being processed ("people", "meeting")
/// * `path` - Path of the dataset file
pub fn log_dataset_pass(dataset: &str, path: &Path) {
    log::info!("Processing {dataset} dataset at {}", path.display());
}

/// Log the completion of a dataset pass
///
/// # Arguments
/// * `dataset` - Which dataset was processed ("people", "meeting")
/// * `path` - Path of the dataset file
/// * `records` - Number of records read and applied
/// * `elapsed` - Time the pass took
pub fn log_dataset_done(dataset: &str, path: &Path, records: usize, elapsed: Duration) {
    log::info!(
        "Processed {records} {dataset} records from {} in {elapsed:?}",
        path.display()
    );
}
