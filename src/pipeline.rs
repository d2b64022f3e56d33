//! End-to-end processing pipeline
//!
//! This module orchestrates a complete run by coordinating between the
//! streaming readers (input), the BettingEngine (replay and settlement),
//! and the report writer (output):
//!
//! 1. Load the match catalogue; all matches are known before replay
//! 2. Replay the operation log in file order through the engine
//! 3. Settle all accepted bets exactly once
//! 4. Write the final report
//!
//! # Error Handling
//!
//! Fatal errors (missing input file, unwritable output) are returned
//! immediately. Individual malformed rows and rejected operations are
//! logged to stderr and the run continues; a rejected operation is
//! terminal for that account, never for the run.

use crate::core::{BettingEngine, MatchCatalogue};
use crate::io::report::write_report;
use crate::io::sync_reader::{MatchReader, OperationReader};
use std::io::Write;
use std::path::Path;

/// Process a full run and write the report
///
/// # Arguments
///
/// * `match_path` - Path to the match data file
/// * `operation_path` - Path to the operation log file
/// * `output` - Writer receiving the final report
///
/// # Errors
///
/// Returns an error if either input file cannot be opened, settlement
/// fails, or the report cannot be written.
pub fn run(match_path: &Path, operation_path: &Path, output: &mut dyn Write) -> Result<(), String> {
    // Load the catalogue first; settlement relies on it being complete
    let mut catalogue = MatchCatalogue::new();
    for result in MatchReader::new(match_path)? {
        match result {
            Ok(m) => catalogue.insert(m),
            Err(e) => eprintln!("Match data error: {}", e),
        }
    }

    // Replay operations strictly in file order; balances are stateful, so
    // the order is part of the semantics
    let mut engine = BettingEngine::new(catalogue);
    for result in OperationReader::new(operation_path)? {
        match result {
            Ok(record) => {
                if let Err(e) = engine.process(record) {
                    eprintln!("Operation rejected: {}", e);
                }
            }
            Err(e) => eprintln!("Operation data error: {}", e),
        }
    }

    let house_balance = engine
        .settle()
        .map_err(|e| format!("Settlement failed: {}", e))?;

    write_report(&engine.accounts(), house_balance, output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    fn run_pipeline(matches: &str, operations: &str) -> String {
        let match_file = create_temp_file(matches);
        let operation_file = create_temp_file(operations);
        let mut output = Vec::new();

        run(match_file.path(), operation_file.path(), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_winning_run() {
        let report = run_pipeline("m1,2.0,1.5,A\n", "p1,DEPOSIT,,100\np1,BET,m1,40,A\n");

        assert_eq!(report, "p1 180 1,00\n\n\n-80\n");
    }

    #[test]
    fn test_missing_match_file_is_fatal() {
        let operation_file = create_temp_file("p1,DEPOSIT,,100\n");
        let mut output = Vec::new();

        let result = run(
            Path::new("nonexistent.txt"),
            operation_file.path(),
            &mut output,
        );

        assert!(result.unwrap_err().contains("Failed to open file"));
    }

    #[test]
    fn test_malformed_rows_are_skipped() {
        let report = run_pipeline(
            "m1,2.0,1.5,A\nm2,not_a_rate,1.0,B\n",
            "p1,DEPOSIT,,100\np1,TELEPORT,,5\np1,BET,m1,40,A\n",
        );

        // The bad match row and the unknown operation kind are skipped;
        // everything else proceeds normally
        assert_eq!(report, "p1 180 1,00\n\n\n-80\n");
    }

    #[test]
    fn test_rejected_operation_does_not_abort_the_run() {
        let report = run_pipeline(
            "m1,2.0,1.5,A\n",
            "p1,DEPOSIT,,100\np2,WITHDRAW,,50\np1,BET,m1,40,A\n",
        );

        assert_eq!(report, "p1 180 1,00\n\np2 WITHDRAW null 50 null\n\n-80\n");
    }
}
