//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use spreader_detector::TracerConfig;

/// Write a fixture file into the test directory
pub fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

/// Write a people dataset of `(name, id, age)` records
pub fn people_file(dir: &Path, entries: &[(&str, u64, f64)]) -> PathBuf {
    let contents: String = entries
        .iter()
        .map(|(name, id, age)| format!("{name} {id} {age}\n"))
        .collect();
    write_file(dir, "people.in", &contents)
}

/// Write a meetings dataset: the spreader line followed by
/// `(infector, infected, distance, duration)` records
pub fn meetings_file(dir: &Path, spreader: u64, meetings: &[(u64, u64, f64, f64)]) -> PathBuf {
    let mut contents = format!("{spreader}\n");
    for (infector, infected, distance, duration) in meetings {
        contents.push_str(&format!("{infector} {infected} {distance} {duration}\n"));
    }
    write_file(dir, "meetings.in", &contents)
}

/// Default configuration with the report redirected into the test directory
pub fn test_config(dir: &Path) -> TracerConfig {
    TracerConfig {
        output_path: dir.join("analysis.out"),
        ..TracerConfig::default()
    }
}
