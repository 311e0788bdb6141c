//! Person entity model
//!
//! A `Person` is one record from the people dataset. The registry owns every
//! person exclusively; the propagator mutates the probability in place and
//! nothing is dropped until the registry itself is.

/// A person read from the people dataset
#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    /// Unique identifier
    pub id: u64,
    /// Name, with no embedded whitespace
    pub name: String,
    /// Age in years; carried through but never used in the computation
    pub age: f64,
    /// Current infection-probability estimate
    pub probability: f64,
}

impl Person {
    /// Create a new person with the initial infection probability of 0.0
    ///
    /// Everyone is presumed uninfected until the meetings dataset says
    /// otherwise.
    #[must_use]
    pub fn new(name: String, id: u64, age: f64) -> Self {
        Self {
            id,
            name,
            age,
            probability: 0.0,
        }
    }
}
