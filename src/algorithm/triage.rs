//! Risk triage for infection probabilities
//!
//! This module maps a raw infection probability onto one of three mutually
//! exclusive triage categories. Probabilities are compared unclamped; the
//! propagation formula can legitimately produce values above 1.0 and those
//! simply land in the strictest category.

use std::fmt;

use crate::config::TracerConfig;

/// Triage categories, from most to least severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TriageCategory {
    /// Hospitalization under medical supervision
    MedicalSupervision,
    /// Regular home quarantine
    Quarantine,
    /// No measures required
    Clean,
}

impl TriageCategory {
    /// Get a descriptive name for this category
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::MedicalSupervision => "medical supervision",
            Self::Quarantine => "regular quarantine",
            Self::Clean => "clean",
        }
    }
}

impl fmt::Display for TriageCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Classify a raw infection probability into a triage category
///
/// Thresholds are evaluated high to low and are closed at the top: a
/// probability exactly equal to a threshold falls into the stricter category.
#[must_use]
pub fn classify(probability: f64, config: &TracerConfig) -> TriageCategory {
    if probability >= config.medical_supervision_threshold {
        TriageCategory::MedicalSupervision
    } else if probability >= config.regular_quarantine_threshold {
        TriageCategory::Quarantine
    } else {
        TriageCategory::Clean
    }
}
