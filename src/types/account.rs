//! Account-related types for the betting ledger engine
//!
//! This module defines the Account structure tracking a player's balance,
//! bet history, and legitimacy status.

use super::market::MatchId;
use super::operation::{IllegalOperation, PlayerId};
use std::collections::HashSet;

/// Player account state
///
/// Represents the current state of a player's account as the operation log
/// is replayed. Balances are whole coins and can never go negative: any
/// operation that would overdraw is rejected instead of applied.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    /// The player this account belongs to
    pub id: PlayerId,

    /// Current coin balance
    ///
    /// Starts at zero. Only deposits, accepted withdrawals, accepted bet
    /// placements, and settlement credits move it.
    pub balance: u64,

    /// Number of bets ever accepted from this account
    pub total_bets: u32,

    /// Number of accepted bets that resolved as wins
    pub won_bets: u32,

    /// Whether the account is still trusted
    ///
    /// Starts `true`; flips to `false` permanently on the first rejected
    /// operation. Once `false`, no further operation has any effect on
    /// this account.
    pub legitimate: bool,

    /// The earliest rejected operation, set at most once
    ///
    /// `None` while the account is legitimate. The first write wins; later
    /// rejections never overwrite it.
    pub first_illegal_operation: Option<IllegalOperation>,

    /// Matches this account has already bet on
    ///
    /// Enforces at most one bet per match per account.
    pub bets_on_match: HashSet<MatchId>,
}

impl Account {
    /// Create a new account with a zero balance and legitimate status
    pub fn new(id: PlayerId) -> Self {
        Account {
            id,
            balance: 0,
            total_bets: 0,
            won_bets: 0,
            legitimate: true,
            first_illegal_operation: None,
            bets_on_match: HashSet::new(),
        }
    }

    /// The account's win rate, floored to two decimal places
    ///
    /// Defined as `won_bets / total_bets` with the quotient floored at the
    /// second decimal digit; zero for an account that never bet. Derived for
    /// reporting only, never stored.
    pub fn win_rate(&self) -> f64 {
        if self.total_bets == 0 {
            return 0.0;
        }
        let rate = f64::from(self.won_bets) / f64::from(self.total_bets);
        (rate * 100.0).floor() / 100.0
    }
}
