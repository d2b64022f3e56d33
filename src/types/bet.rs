//! Bet types for the betting ledger engine
//!
//! An accepted bet is a join record between one account and one match; it
//! owns neither. Bets are created only by a successful placement, never
//! mutated afterwards, and consumed exactly once by settlement.

use super::market::{BetSide, MatchId};
use super::operation::PlayerId;

/// An accepted wager
///
/// The stake has already been deducted from the placing account's balance
/// when the record is created.
#[derive(Debug, Clone, PartialEq)]
pub struct Bet {
    /// The player who placed the bet
    pub player: PlayerId,

    /// The match the bet is on
    pub match_id: MatchId,

    /// Stake in whole coins (positive)
    pub amount: u64,

    /// The side bet on; never a draw
    pub side: BetSide,
}

/// The ordered log of accepted bets
///
/// Entries are appended in replay order and immutable once recorded, giving
/// settlement a deterministic iteration order.
#[derive(Debug, Default)]
pub struct BetLog {
    bets: Vec<Bet>,
}

impl BetLog {
    /// Create an empty bet log
    pub fn new() -> Self {
        BetLog { bets: Vec::new() }
    }

    /// Append an accepted bet
    pub fn record(&mut self, bet: Bet) {
        self.bets.push(bet);
    }

    /// Iterate bets in the order they were accepted
    pub fn iter(&self) -> std::slice::Iter<'_, Bet> {
        self.bets.iter()
    }

    /// Number of accepted bets
    pub fn len(&self) -> usize {
        self.bets.len()
    }

    /// Whether no bet was accepted
    pub fn is_empty(&self) -> bool {
        self.bets.is_empty()
    }
}

impl<'a> IntoIterator for &'a BetLog {
    type Item = &'a Bet;
    type IntoIter = std::slice::Iter<'a, Bet>;

    fn into_iter(self) -> Self::IntoIter {
        self.bets.iter()
    }
}
