//! Core algorithms: probability propagation and risk triage.

pub mod propagation;
pub mod triage;

pub use propagation::InfectionPropagator;
pub use triage::{TriageCategory, classify};
