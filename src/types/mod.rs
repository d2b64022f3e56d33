//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: Player account state
//! - `market`: Matches, outcomes, and bet sides
//! - `operation`: Operation records and the illegal-operation record
//! - `bet`: Accepted bets and the bet log
//! - `error`: Error types for the betting ledger engine

pub mod account;
pub mod bet;
pub mod error;
pub mod market;
pub mod operation;

pub use account::Account;
pub use bet::{Bet, BetLog};
pub use error::LedgerError;
pub use market::{BetSide, Match, MatchId, MatchOutcome};
pub use operation::{IllegalOperation, OperationKind, OperationRecord, PlayerId};
