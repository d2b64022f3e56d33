//! Operation-related types for the betting ledger engine
//!
//! This module defines the decoded operation stream records replayed through
//! the ledger, and the failure record kept for an account's first rejected
//! operation.

use super::market::{BetSide, MatchId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Player identifier
///
/// Opaque token taken verbatim from the input data (UUID-shaped in practice).
pub type PlayerId = String;

/// Operation kinds supported by the account ledger
///
/// Each variant represents one account operation from the chronological log.
/// Deposits and withdrawals move coins in and out of an account; bets move
/// coins into the bet log for later settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OperationKind {
    /// Credit coins to an account; never rejected
    Deposit,

    /// Debit coins from an account; rejected when it exceeds the balance
    Withdraw,

    /// Stake coins on one side of a match; rejected on a duplicate match
    /// bet or when the stake exceeds the balance
    Bet,
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationKind::Deposit => write!(f, "DEPOSIT"),
            OperationKind::Withdraw => write!(f, "WITHDRAW"),
            OperationKind::Bet => write!(f, "BET"),
        }
    }
}

/// Decoded operation record from the input log
///
/// The match and side fields are only meaningful for bets; deposits and
/// withdrawals carry `None` there. The loader guarantees that bets arrive
/// with both present, but the engine re-validates before touching state.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationRecord {
    /// The player this operation applies to
    pub player: PlayerId,

    /// The kind of operation (deposit, withdraw, or bet)
    pub kind: OperationKind,

    /// The match being bet on; `None` for deposits and withdrawals
    pub match_id: Option<MatchId>,

    /// Operation amount in whole coins
    pub amount: u64,

    /// The side being bet on; `None` for deposits and withdrawals
    pub side: Option<BetSide>,
}

/// Description of an account's first rejected operation
///
/// Recorded at most once per account, when the account is flagged. The shape
/// is uniform across kinds: fields not meaningful to the rejected operation
/// are kept as explicit absent placeholders rather than omitted, so every
/// record prints as four fields.
#[derive(Debug, Clone, PartialEq)]
pub struct IllegalOperation {
    /// The kind of the rejected operation
    pub kind: OperationKind,

    /// The match of a rejected bet; `None` for withdrawals
    pub match_id: Option<MatchId>,

    /// The requested amount
    pub amount: u64,

    /// The side of a rejected bet; `None` for withdrawals
    pub side: Option<BetSide>,
}

impl IllegalOperation {
    /// Failure record for a rejected withdrawal
    pub fn withdraw(amount: u64) -> Self {
        IllegalOperation {
            kind: OperationKind::Withdraw,
            match_id: None,
            amount,
            side: None,
        }
    }

    /// Failure record for a rejected bet placement
    pub fn bet(match_id: MatchId, amount: u64, side: BetSide) -> Self {
        IllegalOperation {
            kind: OperationKind::Bet,
            match_id: Some(match_id),
            amount,
            side: Some(side),
        }
    }
}

impl fmt::Display for IllegalOperation {
    /// Renders the uniform four-field record, e.g. `WITHDRAW null 500 null`
    /// or `BET m1 50 A`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let match_field = self.match_id.as_deref().unwrap_or("null");
        match self.side {
            Some(side) => write!(f, "{} {} {} {}", self.kind, match_field, self.amount, side),
            None => write!(f, "{} {} {} null", self.kind, match_field, self.amount),
        }
    }
}
