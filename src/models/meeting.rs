//! Meeting record model
//!
//! A `Meeting` is one record from the meetings dataset: a single physical
//! encounter between an already-tracked infector and the person they met.
//! Meetings are transient; each one is parsed, applied and discarded.

use crate::config::TracerConfig;

/// A single pairwise encounter from the meetings dataset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Meeting {
    /// Identifier of the party presumed already infected
    pub infector_id: u64,
    /// Identifier of the party exposed during the meeting
    pub infected_id: u64,
    /// Distance between the two parties, in meters
    pub distance: f64,
    /// Duration of the encounter, in minutes
    pub duration: f64,
}

impl Meeting {
    /// Multiplier applied to the infector's probability for this encounter
    ///
    /// Grows with duration, shrinks with distance, relative to the configured
    /// safety reference values. The result is deliberately not clamped to
    /// [0, 1]; downstream thresholds compare against the raw value.
    #[must_use]
    pub fn transmission_factor(&self, config: &TracerConfig) -> f64 {
        (self.duration * config.reference_distance) / (self.distance * config.reference_time)
    }
}
