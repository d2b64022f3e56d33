//! Error types for the betting ledger engine
//!
//! This module defines all errors that can occur while replaying the
//! operation log and settling bets. Errors are descriptive and meant for
//! stderr diagnostics.
//!
//! # Error Categories
//!
//! - **File I/O errors**: file not found, permission denied, etc.
//! - **Record errors**: malformed or incomplete rows, owned by the
//!   loader, skipped with a diagnostic
//! - **Rejected operations**: insufficient funds, duplicate bets; these
//!   flag the account but never abort the run
//! - **Arithmetic errors**: overflow guards on balance updates

use thiserror::Error;

/// Main error type for the betting ledger engine
///
/// Each variant carries enough context to diagnose the failing record
/// without re-reading the input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// I/O error while reading input or writing the report
    ///
    /// Typically fatal (missing file, permissions, disk full).
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// A row could not be parsed
    ///
    /// Recoverable: the malformed row is skipped and replay continues.
    #[error("parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if known)
        line: Option<u64>,
        /// Description of the parsing failure
        message: String,
    },

    /// A field required by the operation kind is missing
    ///
    /// Bets require a match id, an amount, and a side; deposits and
    /// withdrawals require an amount. Recoverable: the row is skipped.
    #[error("{kind} operation for player {player} requires a {field}")]
    MissingField {
        /// The operation kind
        kind: String,
        /// The player the row referred to
        player: String,
        /// The missing field name
        field: String,
    },

    /// Requested more coins than the account holds
    ///
    /// Rejects the withdrawal or bet and flags the account.
    #[error("insufficient funds for player {player}: balance {balance}, requested {requested}")]
    InsufficientFunds {
        /// Player id
        player: String,
        /// Balance at the time of the request
        balance: u64,
        /// Requested amount
        requested: u64,
    },

    /// The account already holds a bet on this match
    ///
    /// Rejects the bet and flags the account, regardless of balance.
    #[error("player {player} already has a bet on match {match_id}")]
    DuplicateBet {
        /// Player id
        player: String,
        /// Match the duplicate bet targeted
        match_id: String,
    },

    /// The account was flagged by an earlier rejected operation
    ///
    /// Every later operation is ignored: no balance change, no bet, and no
    /// update to the recorded first illegal operation.
    #[error("account {player} is flagged; operation ignored")]
    AccountFlagged {
        /// Player id of the flagged account
        player: String,
    },

    /// A bet references a match missing from the catalogue
    ///
    /// Referential validity is the loader's contract; settlement surfaces
    /// a violation instead of panicking.
    #[error("match {match_id} not found in catalogue")]
    UnknownMatch {
        /// The unknown match id
        match_id: String,
    },

    /// A balance update would overflow
    ///
    /// Recoverable: the operation is rejected to keep the account intact.
    /// Deposits rejected this way do not flag the account.
    #[error("arithmetic overflow in {operation} for player {player}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
        /// Player id
        player: String,
    },
}

// Conversion from io::Error to LedgerError
impl From<std::io::Error> for LedgerError {
    fn from(error: std::io::Error) -> Self {
        LedgerError::IoError {
            message: error.to_string(),
        }
    }
}

// Conversion from csv::Error to LedgerError
impl From<csv::Error> for LedgerError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        LedgerError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl LedgerError {
    /// Create an InsufficientFunds error
    pub fn insufficient_funds(player: &str, balance: u64, requested: u64) -> Self {
        LedgerError::InsufficientFunds {
            player: player.to_string(),
            balance,
            requested,
        }
    }

    /// Create a DuplicateBet error
    pub fn duplicate_bet(player: &str, match_id: &str) -> Self {
        LedgerError::DuplicateBet {
            player: player.to_string(),
            match_id: match_id.to_string(),
        }
    }

    /// Create an AccountFlagged error
    pub fn account_flagged(player: &str) -> Self {
        LedgerError::AccountFlagged {
            player: player.to_string(),
        }
    }

    /// Create an UnknownMatch error
    pub fn unknown_match(match_id: &str) -> Self {
        LedgerError::UnknownMatch {
            match_id: match_id.to_string(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(kind: &str, player: &str, field: &str) -> Self {
        LedgerError::MissingField {
            kind: kind.to_string(),
            player: player.to_string(),
            field: field.to_string(),
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, player: &str) -> Self {
        LedgerError::ArithmeticOverflow {
            operation: operation.to_string(),
            player: player.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::io_error(
        LedgerError::IoError { message: "permission denied".to_string() },
        "I/O error: permission denied"
    )]
    #[case::parse_error_with_line(
        LedgerError::ParseError { line: Some(42), message: "bad field".to_string() },
        "parse error at line 42: bad field"
    )]
    #[case::parse_error_without_line(
        LedgerError::ParseError { line: None, message: "bad field".to_string() },
        "parse error: bad field"
    )]
    #[case::insufficient_funds(
        LedgerError::InsufficientFunds { player: "p1".to_string(), balance: 30, requested: 100 },
        "insufficient funds for player p1: balance 30, requested 100"
    )]
    #[case::duplicate_bet(
        LedgerError::DuplicateBet { player: "p1".to_string(), match_id: "m1".to_string() },
        "player p1 already has a bet on match m1"
    )]
    #[case::account_flagged(
        LedgerError::AccountFlagged { player: "p9".to_string() },
        "account p9 is flagged; operation ignored"
    )]
    #[case::unknown_match(
        LedgerError::UnknownMatch { match_id: "m7".to_string() },
        "match m7 not found in catalogue"
    )]
    #[case::missing_field(
        LedgerError::MissingField { kind: "BET".to_string(), player: "p1".to_string(), field: "side".to_string() },
        "BET operation for player p1 requires a side"
    )]
    fn test_error_display(#[case] error: LedgerError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::insufficient_funds(
        LedgerError::insufficient_funds("p1", 30, 100),
        LedgerError::InsufficientFunds { player: "p1".to_string(), balance: 30, requested: 100 }
    )]
    #[case::duplicate_bet(
        LedgerError::duplicate_bet("p1", "m1"),
        LedgerError::DuplicateBet { player: "p1".to_string(), match_id: "m1".to_string() }
    )]
    #[case::account_flagged(
        LedgerError::account_flagged("p1"),
        LedgerError::AccountFlagged { player: "p1".to_string() }
    )]
    fn test_helper_functions(#[case] result: LedgerError, #[case] expected: LedgerError) {
        assert_eq!(result, expected);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "permission denied");
        let error: LedgerError = io_error.into();
        assert!(matches!(error, LedgerError::IoError { .. }));
        assert_eq!(error.to_string(), "I/O error: permission denied");
    }
}
