//! Integration tests for loading and ordering the people registry.

mod common;

use rand::seq::SliceRandom;
use spreader_detector::{PersonRegistry, TracerError};
use tempfile::TempDir;

use common::{people_file, test_config, write_file};

#[test]
fn test_load_sort_and_lookup() {
    let dir = TempDir::new().unwrap();
    let config = test_config(dir.path());
    let path = people_file(
        dir.path(),
        &[("Carol", 3, 40.0), ("Alice", 1, 30.0), ("Bob", 2, 25.0)],
    );

    let mut registry = PersonRegistry::load(&path, &config).unwrap();
    assert_eq!(registry.len(), 3);

    registry.sort_by_id();
    let alice = registry.index_by_id(1).unwrap();
    assert_eq!(registry.people()[alice].name, "Alice");
    assert_eq!(registry.people()[alice].probability, 0.0);
    assert_eq!(registry.index_by_id(99), None);
}

#[test]
fn test_lookup_finds_every_loaded_id() {
    let dir = TempDir::new().unwrap();
    let config = test_config(dir.path());

    // Load the ids in a random order; lookups must not depend on it.
    let mut ids: Vec<u64> = (0..200).map(|n| n * 3 + 1).collect();
    ids.shuffle(&mut rand::rng());
    let entries: Vec<(String, u64)> = ids.iter().map(|id| (format!("p{id}"), *id)).collect();
    let contents: String = entries
        .iter()
        .map(|(name, id)| format!("{name} {id} 30\n"))
        .collect();
    let path = write_file(dir.path(), "people.in", &contents);

    let mut registry = PersonRegistry::load(&path, &config).unwrap();
    registry.sort_by_id();

    for (name, id) in &entries {
        let idx = registry.index_by_id(*id).expect("loaded id must resolve");
        assert_eq!(&registry.people()[idx].name, name);
    }
    // Ids between the loaded ones are absent.
    assert_eq!(registry.index_by_id(0), None);
    assert_eq!(registry.index_by_id(2), None);
    assert_eq!(registry.index_by_id(600), None);
}

#[test]
fn test_empty_dataset_yields_empty_registry() {
    let dir = TempDir::new().unwrap();
    let config = test_config(dir.path());
    let path = write_file(dir.path(), "people.in", "");

    let registry = PersonRegistry::load(&path, &config).unwrap();
    assert!(registry.is_empty());
    assert_eq!(registry.len(), 0);
}

#[test]
fn test_malformed_record_is_rejected() {
    let dir = TempDir::new().unwrap();
    let config = test_config(dir.path());
    let path = write_file(dir.path(), "people.in", "Alice 1 30\nBob 2\n");

    let err = PersonRegistry::load(&path, &config).unwrap_err();
    assert!(matches!(err, TracerError::InvalidRecord { line: 2, .. }));
    assert_eq!(err.diagnostic(), "Standard library error.");
}

#[test]
fn test_overlong_record_is_rejected() {
    let dir = TempDir::new().unwrap();
    let mut config = test_config(dir.path());
    config.max_record_len = 32;
    let long_name = "x".repeat(64);
    let path = write_file(dir.path(), "people.in", &format!("{long_name} 1 30\n"));

    let err = PersonRegistry::load(&path, &config).unwrap_err();
    assert!(matches!(err, TracerError::InvalidRecord { line: 1, .. }));
}

#[test]
fn test_missing_dataset_is_an_input_error() {
    let dir = TempDir::new().unwrap();
    let config = test_config(dir.path());
    let path = dir.path().join("no-such-file.in");

    let err = PersonRegistry::load(&path, &config).unwrap_err();
    assert!(matches!(err, TracerError::InputFile { .. }));
    assert_eq!(err.diagnostic(), "Error in input files.");
}
