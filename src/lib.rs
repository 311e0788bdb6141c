//! A contact-tracing library that propagates infection probabilities along a
//! chain of recorded meetings and classifies every person into a triage
//! category.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod models;
pub mod registry;
pub mod report;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::TracerConfig;
pub use error::{Result, TracerError};
pub use models::{Meeting, Person};
pub use registry::PersonRegistry;

// Pipeline stages
pub use algorithm::propagation::InfectionPropagator;
pub use algorithm::triage::{TriageCategory, classify};
pub use report::{TriageSummary, render_line, write_report};
