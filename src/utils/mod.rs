//! Utility modules for file access and logging.

pub mod io;
pub mod logging;

// Re-export commonly used items for convenience
pub use io::RecordReader;
pub use logging::{log_dataset_done, log_dataset_pass};
