//! People registry: loading, lookup and ordering.
//!
//! The registry owns every person for the lifetime of the run. It is sorted
//! by identifier once after loading so meetings can resolve both parties in
//! O(log n), then re-sorted by probability (descending) before the report is
//! rendered.

use std::path::Path;
use std::time::Instant;

use crate::config::TracerConfig;
use crate::error::{Result, TracerError};
use crate::models::Person;
use crate::utils::io::RecordReader;
use crate::utils::logging::{log_dataset_done, log_dataset_pass};

/// Collection of every person in the people dataset
#[derive(Debug, Default)]
pub struct PersonRegistry {
    people: Vec<Person>,
    sorted_by_id: bool,
}

impl PersonRegistry {
    /// Load a registry from the people dataset
    ///
    /// Each record is `<name> <id> <age>`, whitespace-separated, exactly
    /// three fields. An empty dataset is valid and yields an empty registry.
    ///
    /// # Arguments
    /// * `path` - Path to the people dataset
    /// * `config` - Pipeline configuration (record-length limit)
    pub fn load(path: &Path, config: &TracerConfig) -> Result<Self> {
        let start = Instant::now();
        log_dataset_pass("people", path);

        let mut reader = RecordReader::open(path, config.max_record_len)?;
        let mut people = Vec::new();
        while let Some((line_no, line)) = reader.next_record()? {
            people.push(parse_person_record(&line, path, line_no)?);
        }

        log_dataset_done("people", path, people.len(), start.elapsed());
        Ok(Self {
            people,
            sorted_by_id: false,
        })
    }

    /// Number of people in the registry
    #[must_use]
    pub fn len(&self) -> usize {
        self.people.len()
    }

    /// Whether the registry holds no people
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// Position of the person with the given identifier, or `None` if absent
    ///
    /// Iterative binary search in O(log n) comparisons. Requires
    /// [`sort_by_id`](Self::sort_by_id) to have been called since the last
    /// reordering; that precondition is asserted.
    #[must_use]
    pub fn index_by_id(&self, id: u64) -> Option<usize> {
        debug_assert!(
            self.sorted_by_id,
            "index_by_id requires the registry to be sorted by identifier"
        );
        self.people.binary_search_by_key(&id, |person| person.id).ok()
    }

    /// Sort the registry by identifier, ascending
    pub fn sort_by_id(&mut self) {
        self.people.sort_unstable_by_key(|person| person.id);
        self.sorted_by_id = true;
    }

    /// Sort the registry by infection probability, descending
    ///
    /// Ties land in arbitrary order. Invalidates identifier lookups until
    /// [`sort_by_id`](Self::sort_by_id) is called again.
    pub fn sort_by_probability(&mut self) {
        self.people
            .sort_unstable_by(|a, b| b.probability.total_cmp(&a.probability));
        self.sorted_by_id = false;
    }

    /// View of the people in their current order
    #[must_use]
    pub fn people(&self) -> &[Person] {
        &self.people
    }

    /// Mutable access to the person at a position previously returned by
    /// [`index_by_id`](Self::index_by_id)
    pub fn person_mut(&mut self, index: usize) -> &mut Person {
        &mut self.people[index]
    }
}

/// Parse one record of the people dataset into a [`Person`]
fn parse_person_record(line: &str, path: &Path, line_no: usize) -> Result<Person> {
    let invalid = |reason: String| TracerError::InvalidRecord {
        path: path.to_path_buf(),
        line: line_no,
        reason,
    };

    let mut fields = line.split_whitespace();
    let (Some(name), Some(id), Some(age), None) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        return Err(invalid("expected `<name> <id> <age>`".to_string()));
    };

    let id: u64 = id
        .parse()
        .map_err(|_| invalid(format!("invalid identifier `{id}`")))?;
    let age: f64 = age
        .parse()
        .map_err(|_| invalid(format!("invalid age `{age}`")))?;

    Ok(Person::new(name.to_string(), id, age))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry_of(entries: &[(&str, u64, f64)]) -> PersonRegistry {
        PersonRegistry {
            people: entries
                .iter()
                .map(|(name, id, age)| Person::new((*name).to_string(), *id, *age))
                .collect(),
            sorted_by_id: false,
        }
    }

    #[test]
    fn test_parse_person_record() {
        let person = parse_person_record("Alice 1 30.5", Path::new("people.in"), 1).unwrap();
        assert_eq!(person.name, "Alice");
        assert_eq!(person.id, 1);
        assert_eq!(person.age, 30.5);
        assert_eq!(person.probability, 0.0);
    }

    #[test]
    fn test_parse_person_record_rejects_wrong_arity() {
        assert!(parse_person_record("Alice 1", Path::new("people.in"), 1).is_err());
        assert!(parse_person_record("Alice 1 30 extra", Path::new("people.in"), 1).is_err());
        assert!(parse_person_record("", Path::new("people.in"), 1).is_err());
    }

    #[test]
    fn test_parse_person_record_rejects_bad_fields() {
        assert!(parse_person_record("Alice x 30", Path::new("people.in"), 1).is_err());
        assert!(parse_person_record("Alice -1 30", Path::new("people.in"), 1).is_err());
        assert!(parse_person_record("Alice 1 old", Path::new("people.in"), 1).is_err());
    }

    #[test]
    fn test_index_by_id_after_sort() {
        let mut registry = registry_of(&[("c", 30, 1.0), ("a", 10, 1.0), ("b", 20, 1.0)]);
        registry.sort_by_id();
        assert_eq!(registry.index_by_id(10), Some(0));
        assert_eq!(registry.index_by_id(20), Some(1));
        assert_eq!(registry.index_by_id(30), Some(2));
        assert_eq!(registry.index_by_id(15), None);
        assert_eq!(registry.index_by_id(40), None);
    }

    #[test]
    fn test_sort_by_probability_descending() {
        let mut registry = registry_of(&[("a", 1, 0.0), ("b", 2, 0.0), ("c", 3, 0.0)]);
        registry.people[0].probability = 0.3;
        registry.people[1].probability = 8.0;
        registry.people[2].probability = 1.0;
        registry.sort_by_probability();
        let order: Vec<u64> = registry.people().iter().map(|p| p.id).collect();
        assert_eq!(order, vec![2, 3, 1]);
    }
}
