//! File helpers for the line-oriented datasets.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

use crate::error::{Result, TracerError};

/// Line-by-line reader over a dataset file
///
/// Tracks 1-based record numbers for diagnostics and enforces the maximum
/// record length. Records are returned verbatim; blank lines are records too
/// and fail parsing downstream rather than being skipped.
pub struct RecordReader {
    lines: Lines<BufReader<File>>,
    path: PathBuf,
    line_no: usize,
    max_len: usize,
}

impl RecordReader {
    /// Open a dataset file for reading
    ///
    /// # Arguments
    /// * `path` - The dataset to open
    /// * `max_len` - Maximum accepted record length in bytes
    pub fn open(path: &Path, max_len: usize) -> Result<Self> {
        let file = File::open(path).map_err(|source| TracerError::InputFile {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            lines: BufReader::new(file).lines(),
            path: path.to_path_buf(),
            line_no: 0,
            max_len,
        })
    }

    /// The next record and its 1-based number, or `None` at end of file
    pub fn next_record(&mut self) -> Result<Option<(usize, String)>> {
        match self.lines.next() {
            None => Ok(None),
            Some(Err(source)) => Err(TracerError::InputFile {
                path: self.path.clone(),
                source,
            }),
            Some(Ok(line)) => {
                self.line_no += 1;
                if line.len() > self.max_len {
                    return Err(TracerError::InvalidRecord {
                        path: self.path.clone(),
                        line: self.line_no,
                        reason: format!(
                            "record is {} bytes, limit is {}",
                            line.len(),
                            self.max_len
                        ),
                    });
                }
                Ok(Some((self.line_no, line)))
            }
        }
    }

    /// Path of the underlying dataset
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}
