//! Input format handling for match and operation records
//!
//! This module centralizes the comma-delimited input format concerns,
//! providing:
//! - Raw record structures for deserialization
//! - Conversion from raw records to domain types
//!
//! Both input files are headerless. Deposit and withdrawal rows leave the
//! match column empty and usually omit the side column entirely
//! (`p1,DEPOSIT,,550`); bet rows carry all five fields (`p1,BET,m1,40,A`).
//!
//! All functions are pure (no I/O) for easy testing.

use crate::types::{BetSide, Match, MatchOutcome, OperationKind, OperationRecord};
use serde::Deserialize;

/// Raw match row: `match_id,rate_a,rate_b,result`
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct MatchCsvRecord {
    pub id: String,
    pub rate_a: String,
    pub rate_b: String,
    pub result: String,
}

/// Raw operation row: `player_id,kind,match_id,amount,side`
///
/// The trailing fields are optional because deposit and withdrawal rows
/// don't carry them.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct OperationCsvRecord {
    pub player: String,
    pub kind: String,
    #[serde(default)]
    pub match_id: Option<String>,
    #[serde(default)]
    pub amount: Option<String>,
    #[serde(default)]
    pub side: Option<String>,
}

/// Parse a positive payout rate
fn parse_rate(field: &str, value: &str) -> Result<f64, String> {
    let rate: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("invalid {} '{}'", field, value))?;
    if !rate.is_finite() || rate <= 0.0 {
        return Err(format!("invalid {} '{}': must be positive", field, value));
    }
    Ok(rate)
}

/// Parse a whole-coin amount
fn parse_amount(value: &str) -> Result<u64, String> {
    value
        .trim()
        .parse()
        .map_err(|_| format!("invalid amount '{}'", value))
}

/// Convert a raw match row to a Match
///
/// Validates that both rates are positive finite numbers and that the
/// result is one of the three known outcomes.
pub fn convert_match_record(record: MatchCsvRecord) -> Result<Match, String> {
    if record.id.is_empty() {
        return Err("match row is missing an id".to_string());
    }

    let rate_a = parse_rate("rate_a", &record.rate_a)?;
    let rate_b = parse_rate("rate_b", &record.rate_b)?;

    let result = match record.result.as_str() {
        "A" => MatchOutcome::A,
        "B" => MatchOutcome::B,
        "DRAW" => MatchOutcome::Draw,
        other => {
            return Err(format!(
                "invalid result '{}' for match {}",
                other, record.id
            ))
        }
    };

    Ok(Match {
        id: record.id,
        rate_a,
        rate_b,
        result,
    })
}

/// Convert a raw operation row to an OperationRecord
///
/// This function:
/// - Parses the kind string into an OperationKind
/// - Parses the amount (required for every kind)
/// - Requires match id and side for bets, and ignores the (empty) match
///   and side columns on deposits and withdrawals
pub fn convert_operation_record(record: OperationCsvRecord) -> Result<OperationRecord, String> {
    if record.player.is_empty() {
        return Err("operation row is missing a player id".to_string());
    }

    let kind = match record.kind.as_str() {
        "DEPOSIT" => OperationKind::Deposit,
        "WITHDRAW" => OperationKind::Withdraw,
        "BET" => OperationKind::Bet,
        other => {
            return Err(format!(
                "invalid operation kind '{}' for player {}",
                other, record.player
            ))
        }
    };

    let amount = match record.amount.as_deref() {
        Some(value) if !value.trim().is_empty() => parse_amount(value)?,
        _ => {
            return Err(format!(
                "{} operation for player {} requires an amount",
                record.kind, record.player
            ))
        }
    };

    let (match_id, side) = match kind {
        OperationKind::Bet => {
            let match_id = match record.match_id {
                Some(id) if !id.is_empty() => id,
                _ => {
                    return Err(format!(
                        "BET operation for player {} requires a match id",
                        record.player
                    ))
                }
            };
            let side = match record.side.as_deref() {
                Some("A") => BetSide::A,
                Some("B") => BetSide::B,
                Some(other) if !other.is_empty() => {
                    return Err(format!(
                        "invalid side '{}' for player {}",
                        other, record.player
                    ))
                }
                _ => {
                    return Err(format!(
                        "BET operation for player {} requires a side",
                        record.player
                    ))
                }
            };
            (Some(match_id), Some(side))
        }
        OperationKind::Deposit | OperationKind::Withdraw => (None, None),
    };

    Ok(OperationRecord {
        player: record.player,
        kind,
        match_id,
        amount,
        side,
    })
}
