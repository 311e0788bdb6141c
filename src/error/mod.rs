//! Error handling for the tracing pipeline.
//!
//! Every failure carries a detailed message for the logs, but the user only
//! ever sees one fixed diagnostic line on stderr and exit status 1. The
//! categories are distinguished by that line alone.

use std::io;
use std::path::PathBuf;

/// Usage line printed when the program is invoked with the wrong arity
pub const USAGE_MSG: &str =
    "Usage: spreader-detector <Path to People.in> <Path to Meetings.in>";

/// Diagnostic printed when an input dataset cannot be opened or read
pub const INPUT_FILE_ERR_MSG: &str = "Error in input files.";

/// Diagnostic printed when the report file cannot be opened or written
pub const OUTPUT_FILE_ERR_MSG: &str = "Error in output file.";

/// Diagnostic printed for malformed records and internal failures
pub const INTERNAL_ERR_MSG: &str = "Standard library error.";

/// Specialized error type for the tracing pipeline
#[derive(Debug, thiserror::Error)]
pub enum TracerError {
    /// Wrong number of command-line arguments
    #[error("expected exactly two arguments: a people file and a meetings file")]
    Usage,

    /// An input dataset could not be opened or read
    #[error("failed to read input file {path}: {source}")]
    InputFile {
        /// Path of the dataset that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The report file could not be opened or written
    #[error("failed to write report file {path}: {source}")]
    OutputFile {
        /// Path of the report artifact
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// A record in one of the datasets did not parse
    #[error("malformed record at {path}:{line}: {reason}")]
    InvalidRecord {
        /// Dataset containing the record
        path: PathBuf,
        /// 1-based record number
        line: usize,
        /// What was wrong with the record
        reason: String,
    },

    /// A meeting referenced an identifier absent from the registry.
    ///
    /// The meetings dataset is contractually required to only name people
    /// present in the people dataset, so this is not expected in practice.
    #[error("person {id} referenced by the meetings file is not in the registry")]
    UnknownPerson {
        /// The identifier that failed to resolve
        id: u64,
    },
}

impl TracerError {
    /// The single fixed diagnostic line shown to the user for this error
    #[must_use]
    pub const fn diagnostic(&self) -> &'static str {
        match self {
            Self::Usage => USAGE_MSG,
            Self::InputFile { .. } => INPUT_FILE_ERR_MSG,
            Self::OutputFile { .. } => OUTPUT_FILE_ERR_MSG,
            Self::InvalidRecord { .. } | Self::UnknownPerson { .. } => INTERNAL_ERR_MSG,
        }
    }
}

/// Result type for tracing pipeline operations
pub type Result<T> = std::result::Result<T, TracerError>;
