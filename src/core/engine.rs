//! Operation replay engine
//!
//! This module provides the BettingEngine that orchestrates replay of the
//! operation log by coordinating between the AccountLedger, the
//! MatchCatalogue, and the BetLog, and hands the closed log to settlement.
//!
//! The engine enforces the ledger's sequencing rules:
//! - Operations for a flagged account are ignored without touching state
//! - The first rejected operation flags the account and is recorded once
//! - Accepted bets are appended to the bet log in replay order

use crate::core::catalogue::MatchCatalogue;
use crate::core::ledger::AccountLedger;
use crate::core::settlement::SettlementEngine;
use crate::types::{
    Account, Bet, BetLog, IllegalOperation, LedgerError, OperationKind, OperationRecord,
};

/// Replay and settlement orchestrator
///
/// Owns the account ledger, the loaded match catalogue, and the bet log
/// built up as operations are accepted. Operations stream through
/// [`BettingEngine::process`] in log order; [`BettingEngine::settle`] then
/// resolves the accumulated bets exactly once.
pub struct BettingEngine {
    ledger: AccountLedger,
    catalogue: MatchCatalogue,
    bet_log: BetLog,
}

impl BettingEngine {
    /// Create an engine over a loaded match catalogue
    ///
    /// The catalogue must be complete before replay starts; it is never
    /// mutated afterwards.
    pub fn new(catalogue: MatchCatalogue) -> Self {
        BettingEngine {
            ledger: AccountLedger::new(),
            catalogue,
            bet_log: BetLog::new(),
        }
    }

    /// Process a single operation record
    ///
    /// Routes the operation to the appropriate handler. Operations for a
    /// flagged account are rejected up front: state stays frozen and the
    /// recorded first illegal operation is never overwritten.
    ///
    /// # Errors
    ///
    /// Returns an error when the operation was not applied: flagged
    /// account, rejected withdrawal or bet (which also flags the account),
    /// missing bet fields, or an overflowing deposit. Rejections are
    /// terminal for the account, never for the run.
    pub fn process(&mut self, record: OperationRecord) -> Result<(), LedgerError> {
        if self.ledger.is_flagged(&record.player) {
            return Err(LedgerError::account_flagged(&record.player));
        }

        match record.kind {
            OperationKind::Deposit => self.process_deposit(record),
            OperationKind::Withdraw => self.process_withdraw(record),
            OperationKind::Bet => self.process_bet(record),
        }
    }

    /// Process a deposit
    ///
    /// Deposits cannot flag an account; an overflow rejection is surfaced
    /// to the caller but leaves the account legitimate.
    fn process_deposit(&mut self, record: OperationRecord) -> Result<(), LedgerError> {
        self.ledger.deposit(&record.player, record.amount)
    }

    /// Process a withdrawal
    ///
    /// An overdraw rejects the withdrawal, flags the account, and records
    /// the failure with the uniform placeholder shape.
    fn process_withdraw(&mut self, record: OperationRecord) -> Result<(), LedgerError> {
        match self.ledger.withdraw(&record.player, record.amount) {
            Ok(()) => Ok(()),
            Err(err @ LedgerError::InsufficientFunds { .. }) => {
                self.ledger
                    .flag(&record.player, IllegalOperation::withdraw(record.amount));
                Err(err)
            }
            Err(err) => Err(err),
        }
    }

    /// Process a bet placement
    ///
    /// A rejected placement (duplicate match or insufficient balance) flags
    /// the account with a `BET`-shaped failure record; an accepted one
    /// appends the immutable bet to the log.
    fn process_bet(&mut self, record: OperationRecord) -> Result<(), LedgerError> {
        let match_id = record
            .match_id
            .ok_or_else(|| LedgerError::missing_field("BET", &record.player, "match id"))?;
        let side = record
            .side
            .ok_or_else(|| LedgerError::missing_field("BET", &record.player, "side"))?;

        match self.ledger.place_bet(&record.player, &match_id, record.amount) {
            Ok(()) => {
                self.bet_log.record(Bet {
                    player: record.player,
                    match_id,
                    amount: record.amount,
                    side,
                });
                Ok(())
            }
            Err(err) => {
                self.ledger.flag(
                    &record.player,
                    IllegalOperation::bet(match_id, record.amount, side),
                );
                Err(err)
            }
        }
    }

    /// Settle all accepted bets and return the house balance
    ///
    /// Must be called once, after the operation stream is exhausted. Bets
    /// are resolved in log order; bets from flagged accounts are void.
    ///
    /// # Errors
    ///
    /// Returns an error if a bet references an unknown match or a credit
    /// would overflow.
    pub fn settle(&mut self) -> Result<i64, LedgerError> {
        let mut settlement = SettlementEngine::new();
        settlement.settle(&self.bet_log, &self.catalogue, &mut self.ledger)?;
        Ok(settlement.house_balance())
    }

    /// Final account states, sorted by player id
    pub fn accounts(&self) -> Vec<&Account> {
        self.ledger.get_all_accounts()
    }

    /// Number of accepted bets in the log
    pub fn accepted_bets(&self) -> usize {
        self.bet_log.len()
    }
}
