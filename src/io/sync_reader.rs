//! Streaming readers for the two input files
//!
//! Provides iterator interfaces over match rows and operation rows.
//! File handling lives here; format concerns are delegated to the
//! csv_format module.
//!
//! # Design
//!
//! Both readers wrap a `csv::Reader` configured for the headerless,
//! comma-delimited input: whitespace is trimmed, and rows may carry four
//! or five fields (deposit and withdrawal rows omit the trailing side
//! column). Records are processed one at a time; memory usage is O(1) per
//! record, not O(file size).
//!
//! # Error Handling
//!
//! - Fatal errors (file not found) are returned from `new()`
//! - Individual row errors are yielded as Err variants with line numbers,
//!   so the caller can log and skip them

use crate::io::csv_format::{
    convert_match_record, convert_operation_record, MatchCsvRecord, OperationCsvRecord,
};
use crate::types::{Match, OperationRecord};
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::path::Path;

/// Open a headerless, flexible-width CSV reader over a file
fn open_reader(path: &Path) -> Result<csv::Reader<File>, String> {
    let file =
        File::open(path).map_err(|e| format!("Failed to open file '{}': {}", path.display(), e))?;

    Ok(ReaderBuilder::new()
        .has_headers(false)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(file))
}

/// Streaming reader over match rows
///
/// Yields one `Result<Match, String>` per input line, in file order.
#[derive(Debug)]
pub struct MatchReader {
    reader: csv::Reader<File>,
    line_num: usize,
}

impl MatchReader {
    /// Create a new MatchReader from a file path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    pub fn new(path: &Path) -> Result<Self, String> {
        Ok(Self {
            reader: open_reader(path)?,
            line_num: 0,
        })
    }
}

impl Iterator for MatchReader {
    type Item = Result<Match, String>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut deserializer = self.reader.deserialize::<MatchCsvRecord>();

        match deserializer.next()? {
            Ok(record) => {
                self.line_num += 1;
                Some(
                    convert_match_record(record)
                        .map_err(|e| format!("Line {}: {}", self.line_num, e)),
                )
            }
            Err(e) => {
                self.line_num += 1;
                Some(Err(format!("Line {}: row error: {}", self.line_num, e)))
            }
        }
    }
}

/// Streaming reader over operation rows
///
/// Yields one `Result<OperationRecord, String>` per input line, in file
/// order, which is the replay order the ledger depends on.
#[derive(Debug)]
pub struct OperationReader {
    reader: csv::Reader<File>,
    line_num: usize,
}

impl OperationReader {
    /// Create a new OperationReader from a file path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    pub fn new(path: &Path) -> Result<Self, String> {
        Ok(Self {
            reader: open_reader(path)?,
            line_num: 0,
        })
    }
}

impl Iterator for OperationReader {
    type Item = Result<OperationRecord, String>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut deserializer = self.reader.deserialize::<OperationCsvRecord>();

        match deserializer.next()? {
            Ok(record) => {
                self.line_num += 1;
                Some(
                    convert_operation_record(record)
                        .map_err(|e| format!("Line {}: {}", self.line_num, e)),
                )
            }
            Err(e) => {
                self.line_num += 1;
                Some(Err(format!("Line {}: row error: {}", self.line_num, e)))
            }
        }
    }
}
