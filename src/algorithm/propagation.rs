//! Infection-probability propagation over the meeting chain.
//!
//! The meetings dataset encodes the causal chain of transmission: the first
//! record names the index spreader, every later record is one encounter.
//! Records are applied strictly in file order, and a person's probability is
//! overwritten by the most recent meeting naming them as the infected party.
//! No accumulation, no clamping, no ordering validation.

use std::path::Path;
use std::time::Instant;

use crate::config::TracerConfig;
use crate::error::{Result, TracerError};
use crate::models::Meeting;
use crate::registry::PersonRegistry;
use crate::utils::io::RecordReader;
use crate::utils::logging::{log_dataset_done, log_dataset_pass};

/// Replays the meetings dataset against a registry
pub struct InfectionPropagator<'a> {
    config: &'a TracerConfig,
}

impl<'a> InfectionPropagator<'a> {
    /// Create a propagator with the given reference constants
    #[must_use]
    pub fn new(config: &'a TracerConfig) -> Self {
        Self { config }
    }

    /// Apply the meetings dataset to the registry, in file order
    ///
    /// The registry must be sorted by identifier. With an empty registry the
    /// dataset is still opened, so a missing meetings file is an error even
    /// when there is nobody to infect, but no records are read.
    ///
    /// An empty meetings file is valid: nothing propagates and every
    /// probability stays at its initial value.
    pub fn apply(&self, path: &Path, registry: &mut PersonRegistry) -> Result<()> {
        let start = Instant::now();
        log_dataset_pass("meeting", path);

        let mut reader = RecordReader::open(path, self.config.max_record_len)?;
        if registry.is_empty() {
            // The open above is the whole validation when nobody is tracked.
            return Ok(());
        }

        let Some((line_no, first)) = reader.next_record()? else {
            return Ok(());
        };
        let spreader_id = parse_spreader_record(&first, path, line_no)?;
        let spreader = registry
            .index_by_id(spreader_id)
            .ok_or(TracerError::UnknownPerson { id: spreader_id })?;
        // Ground truth: the index case is infected with certainty.
        registry.person_mut(spreader).probability = 1.0;

        let mut applied = 0usize;
        while let Some((line_no, line)) = reader.next_record()? {
            let meeting = parse_meeting_record(&line, path, line_no)?;
            self.apply_meeting(&meeting, registry)?;
            applied += 1;
        }

        log_dataset_done("meeting", path, applied, start.elapsed());
        Ok(())
    }

    /// Apply a single meeting: overwrite the infected party's probability
    /// with the infector's probability times the transmission factor
    fn apply_meeting(&self, meeting: &Meeting, registry: &mut PersonRegistry) -> Result<()> {
        let infector = registry
            .index_by_id(meeting.infector_id)
            .ok_or(TracerError::UnknownPerson {
                id: meeting.infector_id,
            })?;
        let infected = registry
            .index_by_id(meeting.infected_id)
            .ok_or(TracerError::UnknownPerson {
                id: meeting.infected_id,
            })?;

        let factor = meeting.transmission_factor(self.config);
        let source_probability = registry.people()[infector].probability;
        registry.person_mut(infected).probability = source_probability * factor;
        Ok(())
    }
}

/// Parse the first record of the meetings dataset: the index spreader's id
fn parse_spreader_record(line: &str, path: &Path, line_no: usize) -> Result<u64> {
    let mut fields = line.split_whitespace();
    let (Some(id), None) = (fields.next(), fields.next()) else {
        return Err(invalid_record(path, line_no, "expected `<spreader-id>`"));
    };
    id.parse()
        .map_err(|_| invalid_record(path, line_no, &format!("invalid identifier `{id}`")))
}

/// Parse one encounter record of the meetings dataset
fn parse_meeting_record(line: &str, path: &Path, line_no: usize) -> Result<Meeting> {
    let mut fields = line.split_whitespace();
    let (Some(infector), Some(infected), Some(distance), Some(duration), None) = (
        fields.next(),
        fields.next(),
        fields.next(),
        fields.next(),
        fields.next(),
    ) else {
        return Err(invalid_record(
            path,
            line_no,
            "expected `<infector-id> <infected-id> <distance> <duration>`",
        ));
    };

    Ok(Meeting {
        infector_id: infector.parse().map_err(|_| {
            invalid_record(path, line_no, &format!("invalid identifier `{infector}`"))
        })?,
        infected_id: infected.parse().map_err(|_| {
            invalid_record(path, line_no, &format!("invalid identifier `{infected}`"))
        })?,
        distance: distance
            .parse()
            .map_err(|_| invalid_record(path, line_no, &format!("invalid distance `{distance}`")))?,
        duration: duration
            .parse()
            .map_err(|_| invalid_record(path, line_no, &format!("invalid duration `{duration}`")))?,
    })
}

fn invalid_record(path: &Path, line: usize, reason: &str) -> TracerError {
    TracerError::InvalidRecord {
        path: path.to_path_buf(),
        line,
        reason: reason.to_string(),
    }
}
