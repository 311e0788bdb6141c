//! Configuration for the tracing pipeline.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Result, TracerError};

/// Configuration for the tracing pipeline
///
/// The defaults reproduce the deployed parameter set; individual fields can
/// be overridden from a JSON sidecar file via [`TracerConfig::from_json_file`].
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TracerConfig {
    /// Minimum safe distance between two people, in meters
    pub reference_distance: f64,
    /// Maximum safe exposure time, in minutes
    pub reference_time: f64,
    /// Probability at or above which medical supervision is required
    pub medical_supervision_threshold: f64,
    /// Probability at or above which regular quarantine is required
    pub regular_quarantine_threshold: f64,
    /// Path the report artifact is written to
    pub output_path: PathBuf,
    /// Maximum accepted record length in bytes; longer records are rejected
    pub max_record_len: usize,
    /// Report template for the medical-supervision category
    pub medical_supervision_template: String,
    /// Report template for the regular-quarantine category
    pub regular_quarantine_template: String,
    /// Report template for the clean category
    pub clean_template: String,
}

impl Default for TracerConfig {
    fn default() -> Self {
        Self {
            reference_distance: 2.0,
            reference_time: 15.0,
            medical_supervision_threshold: 0.4,
            regular_quarantine_threshold: 0.2,
            output_path: PathBuf::from("SpreaderDetectorAnalysis.out"),
            max_record_len: 1024,
            medical_supervision_template: "Hospitalization required for: {name} {id}."
                .to_string(),
            regular_quarantine_template: "Quarantine required for: {name} {id}.".to_string(),
            clean_template: "No quarantine required for: {name} {id}.".to_string(),
        }
    }
}

impl TracerConfig {
    /// Load configuration overrides from a JSON file
    ///
    /// Fields absent from the file keep their default values.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| TracerError::InputFile {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|err| TracerError::InvalidRecord {
            path: path.to_path_buf(),
            line: err.line(),
            reason: err.to_string(),
        })
    }
}
