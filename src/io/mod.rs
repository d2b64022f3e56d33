//! I/O module
//!
//! Handles input parsing and report output.
//!
//! # Components
//!
//! - `csv_format` - Input format handling (raw records, conversions)
//! - `sync_reader` - Streaming readers with an iterator interface
//! - `report` - Final report writer

pub mod csv_format;
pub mod report;
pub mod sync_reader;

pub use csv_format::{convert_match_record, convert_operation_record};
pub use report::write_report;
pub use sync_reader::{MatchReader, OperationReader};
