//! Report rendering and the output artifact.
//!
//! One line per person, in the registry's current order. The wording comes
//! from the configured message templates, with `{name}` and `{id}`
//! substituted, so the instructional text is a configuration concern rather
//! than part of the triage logic.

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};

use itertools::Itertools;

use crate::algorithm::triage::{TriageCategory, classify};
use crate::config::TracerConfig;
use crate::error::{Result, TracerError};
use crate::models::Person;
use crate::registry::PersonRegistry;

/// Render the report line for one person
#[must_use]
pub fn render_line(person: &Person, config: &TracerConfig) -> String {
    let template = match classify(person.probability, config) {
        TriageCategory::MedicalSupervision => &config.medical_supervision_template,
        TriageCategory::Quarantine => &config.regular_quarantine_template,
        TriageCategory::Clean => &config.clean_template,
    };
    template
        .replace("{name}", &person.name)
        .replace("{id}", &person.id.to_string())
}

/// Per-category counts from one report run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TriageSummary {
    /// People requiring hospitalization
    pub medical_supervision: usize,
    /// People requiring regular quarantine
    pub quarantine: usize,
    /// People requiring no measures
    pub clean: usize,
}

impl fmt::Display for TriageSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Triage summary: {} medical supervision, {} regular quarantine, {} clean",
            self.medical_supervision, self.quarantine, self.clean
        )
    }
}

/// Write the report artifact for every person in the registry's current order
///
/// The file is created fresh on every run, so no content from a previous run
/// survives. Returns the per-category counts for the run summary.
pub fn write_report(registry: &PersonRegistry, config: &TracerConfig) -> Result<TriageSummary> {
    let output_error = |source| TracerError::OutputFile {
        path: config.output_path.clone(),
        source,
    };

    let file = File::create(&config.output_path).map_err(output_error)?;
    let mut writer = BufWriter::new(file);
    for person in registry.people() {
        writeln!(writer, "{}", render_line(person, config)).map_err(output_error)?;
    }
    writer.flush().map_err(output_error)?;

    let counts = registry
        .people()
        .iter()
        .counts_by(|person| classify(person.probability, config));
    Ok(TriageSummary {
        medical_supervision: counts
            .get(&TriageCategory::MedicalSupervision)
            .copied()
            .unwrap_or(0),
        quarantine: counts.get(&TriageCategory::Quarantine).copied().unwrap_or(0),
        clean: counts.get(&TriageCategory::Clean).copied().unwrap_or(0),
    })
}
