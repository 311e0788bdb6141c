//! Data model for the tracing pipeline.

pub mod meeting;
pub mod person;

pub use meeting::Meeting;
pub use person::Person;
