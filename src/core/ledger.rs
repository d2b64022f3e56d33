//! Account ledger module
//!
//! This module provides the `AccountLedger` struct which owns the state of
//! all player accounts and provides the balance-moving primitives used
//! during replay and settlement.
//!
//! The AccountLedger is responsible for:
//! - Creating new accounts on first reference
//! - Tracking balances, bet counters, and the per-match bet marker set
//! - Flagging accounts on their first rejected operation (first write wins)
//! - Providing sorted account listings for report output

use crate::types::{Account, IllegalOperation, LedgerError};
use std::collections::HashMap;

/// Owns all player accounts and their states
///
/// The ledger is the single authoritative store for accounts; everything
/// else refers to accounts by player id only. Accounts are created lazily
/// with zero state and never deleted within a run.
pub struct AccountLedger {
    /// Map of player ids to account states
    accounts: HashMap<String, Account>,
}

impl AccountLedger {
    /// Create a new AccountLedger with no accounts
    pub fn new() -> Self {
        AccountLedger {
            accounts: HashMap::new(),
        }
    }

    /// Get or create an account for the specified player
    ///
    /// If no account exists for the player, creates one with a zero balance
    /// and legitimate status.
    pub fn get_or_create_account(&mut self, player: &str) -> &mut Account {
        self.accounts
            .entry(player.to_string())
            .or_insert_with(|| Account::new(player.to_string()))
    }

    /// Look up an account without creating it
    pub fn get(&self, player: &str) -> Option<&Account> {
        self.accounts.get(player)
    }

    /// Check if an account has been flagged
    ///
    /// Returns false for accounts that don't exist yet: an account that was
    /// never referenced cannot have rejected an operation.
    pub fn is_flagged(&self, player: &str) -> bool {
        self.accounts
            .get(player)
            .is_some_and(|account| !account.legitimate)
    }

    /// Get all accounts sorted by player id
    ///
    /// Sorting gives the report a deterministic order regardless of map
    /// iteration order.
    pub fn get_all_accounts(&self) -> Vec<&Account> {
        let mut accounts: Vec<&Account> = self.accounts.values().collect();
        accounts.sort_by(|a, b| a.id.cmp(&b.id));
        accounts
    }

    /// Deposit coins into a player account
    ///
    /// Deposits have no upper bound and cannot flag an account; the only
    /// failure mode is the overflow guard, which leaves the account
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if adding the amount to the balance would overflow.
    pub fn deposit(&mut self, player: &str, amount: u64) -> Result<(), LedgerError> {
        let account = self.get_or_create_account(player);

        account.balance = account
            .balance
            .checked_add(amount)
            .ok_or_else(|| LedgerError::arithmetic_overflow("deposit", player))?;

        Ok(())
    }

    /// Withdraw coins from a player account
    ///
    /// Validates that the balance covers the amount before applying the
    /// debit; a rejected withdrawal leaves the account unchanged.
    ///
    /// # Errors
    ///
    /// Returns `InsufficientFunds` when the amount exceeds the balance.
    pub fn withdraw(&mut self, player: &str, amount: u64) -> Result<(), LedgerError> {
        let account = self.get_or_create_account(player);

        if amount > account.balance {
            return Err(LedgerError::insufficient_funds(
                player,
                account.balance,
                amount,
            ));
        }

        account.balance -= amount;

        Ok(())
    }

    /// Place a bet: deduct the stake and mark the match as bet on
    ///
    /// The duplicate-match check runs before the balance check. On success
    /// the stake is deducted, the bet counter incremented, and the match
    /// recorded in the account's bet-set; the caller is responsible for
    /// appending the corresponding entry to the bet log.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateBet` when the account already bet on the match,
    /// or `InsufficientFunds` when the stake exceeds the balance. Either
    /// way the account is unchanged.
    pub fn place_bet(
        &mut self,
        player: &str,
        match_id: &str,
        amount: u64,
    ) -> Result<(), LedgerError> {
        let account = self.get_or_create_account(player);

        if account.bets_on_match.contains(match_id) {
            return Err(LedgerError::duplicate_bet(player, match_id));
        }

        if amount > account.balance {
            return Err(LedgerError::insufficient_funds(
                player,
                account.balance,
                amount,
            ));
        }

        account.balance -= amount;
        account.total_bets += 1;
        account.bets_on_match.insert(match_id.to_string());

        Ok(())
    }

    /// Flag an account and record its first illegal operation
    ///
    /// The legitimacy flag never reverts, and only the earliest record is
    /// kept: a second call leaves the stored operation untouched.
    pub fn flag(&mut self, player: &str, operation: IllegalOperation) {
        let account = self.get_or_create_account(player);

        account.legitimate = false;
        if account.first_illegal_operation.is_none() {
            account.first_illegal_operation = Some(operation);
        }
    }

    /// Credit a settled winning bet: stake plus winnings
    ///
    /// Increments the won-bet counter along with the balance.
    ///
    /// # Errors
    ///
    /// Returns an error if the credit would overflow the balance.
    pub fn credit_winnings(&mut self, player: &str, credit: u64) -> Result<(), LedgerError> {
        let account = self.get_or_create_account(player);

        account.balance = account
            .balance
            .checked_add(credit)
            .ok_or_else(|| LedgerError::arithmetic_overflow("credit_winnings", player))?;
        account.won_bets += 1;

        Ok(())
    }

    /// Refund a stake after a draw
    ///
    /// The bet is neither a win nor a loss; counters stay untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the refund would overflow the balance.
    pub fn refund(&mut self, player: &str, amount: u64) -> Result<(), LedgerError> {
        let account = self.get_or_create_account(player);

        account.balance = account
            .balance
            .checked_add(amount)
            .ok_or_else(|| LedgerError::arithmetic_overflow("refund", player))?;

        Ok(())
    }
}

impl Default for AccountLedger {
    fn default() -> Self {
        Self::new()
    }
}
