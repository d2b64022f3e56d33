//! Betting Ledger Engine Library
//! # Overview
//!
//! This library replays a chronological log of player account operations
//! against a catalogue of match outcomes, then settles every accepted bet
//! to produce final player balances and the house balance.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, Match, Bet, etc.)
//! - [`cli`] - CLI argument parsing
//! - [`core`] - Business logic components:
//!   - [`core::ledger`] - Account state management and balance operations
//!   - [`core::catalogue`] - Match storage, loaded before replay
//!   - [`core::engine`] - Operation replay orchestration and the bet log
//!   - [`core::settlement`] - One-shot bet resolution and the house balance
//! - [`io`] - Input parsing and report output
//! - [`pipeline`] - End-to-end run orchestration
//!
//! # Operation Kinds
//!
//! The ledger replays three operation kinds:
//!
//! - **Deposit**: Credit coins to an account; never rejected
//! - **Withdraw**: Debit coins; rejected when it exceeds the balance
//! - **Bet**: Stake coins on one side of a match; rejected on a duplicate
//!   match bet or an insufficient balance
//!
//! # Account States
//!
//! Each account starts legitimate. Its first rejected operation flags it
//! permanently: the rejection is recorded once, every later operation is
//! ignored, and its accepted bets become void at settlement. Accounts that
//! stay legitimate have their bets resolved as wins (stake plus truncated
//! winnings), draws (stake refunded), or losses (stake to the house).

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod pipeline;
pub mod types;

pub use core::{AccountLedger, BettingEngine, MatchCatalogue, SettlementEngine};
pub use io::write_report;
pub use types::{
    Account, Bet, BetLog, BetSide, IllegalOperation, LedgerError, Match, MatchId, MatchOutcome,
    OperationKind, OperationRecord, PlayerId,
};
