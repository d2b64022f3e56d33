//! Match-related types for the betting ledger engine
//!
//! This module defines matches, their declared outcomes, and the two sides
//! a bet can be placed on.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Match identifier
///
/// Opaque token taken verbatim from the input data (UUID-shaped in practice).
pub type MatchId = String;

/// The side of a match a bet is placed on
///
/// A bet is always placed on one of the two sides; there is no way to bet
/// on a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BetSide {
    A,
    B,
}

impl BetSide {
    /// Whether a bet on this side wins against the given match outcome
    ///
    /// A side wins only on an exact match; a draw is never a win for
    /// either side.
    pub fn wins_against(self, outcome: MatchOutcome) -> bool {
        matches!(
            (self, outcome),
            (BetSide::A, MatchOutcome::A) | (BetSide::B, MatchOutcome::B)
        )
    }
}

impl fmt::Display for BetSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BetSide::A => write!(f, "A"),
            BetSide::B => write!(f, "B"),
        }
    }
}

/// Declared outcome of a match
///
/// Known before settlement runs; loaded together with the match itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MatchOutcome {
    /// Side A won
    A,
    /// Side B won
    B,
    /// Neither side won; stakes are refunded
    Draw,
}

impl fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchOutcome::A => write!(f, "A"),
            MatchOutcome::B => write!(f, "B"),
            MatchOutcome::Draw => write!(f, "DRAW"),
        }
    }
}

/// A match with two-sided odds and a settled outcome
///
/// Matches are immutable once loaded: the catalogue is populated before any
/// operation is replayed and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    /// Unique match identifier
    pub id: MatchId,

    /// Payout multiplier for a winning bet on side A (positive)
    pub rate_a: f64,

    /// Payout multiplier for a winning bet on side B (positive)
    pub rate_b: f64,

    /// The declared result of the match
    pub result: MatchOutcome,
}

impl Match {
    /// The payout rate that applies to a bet on the given side
    pub fn rate_for(&self, side: BetSide) -> f64 {
        match side {
            BetSide::A => self.rate_a,
            BetSide::B => self.rate_b,
        }
    }
}
