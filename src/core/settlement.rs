//! Bet settlement engine
//!
//! This module provides the SettlementEngine that resolves every accepted
//! bet exactly once against the match catalogue, crediting accounts and
//! accumulating the house balance.
//!
//! Settlement runs once, after the operation log is exhausted and the bet
//! log is closed. Bets are resolved in log order; each bet touches
//! independent money, so the order only matters for reproducibility.

use crate::core::catalogue::MatchCatalogue;
use crate::core::ledger::AccountLedger;
use crate::types::{Bet, BetLog, LedgerError, MatchOutcome};

/// Resolves accepted bets and owns the house balance
///
/// The house balance starts at zero and is mutated only here: it decreases
/// by the winnings paid out and increases by the stakes of lost bets.
/// Stakes returned on wins and draws net to zero for the house.
pub struct SettlementEngine {
    house_balance: i64,
}

impl SettlementEngine {
    /// Create a new settlement engine with a zero house balance
    pub fn new() -> Self {
        SettlementEngine { house_balance: 0 }
    }

    /// Resolve all bets in the log against the catalogue
    ///
    /// Bets placed by accounts that were later flagged are void: they are
    /// skipped entirely, moving no money in either direction.
    ///
    /// # Errors
    ///
    /// Returns an error if a bet references a match missing from the
    /// catalogue, or if a settlement credit would overflow a balance. The
    /// ledger is left as settled up to the failing bet.
    pub fn settle(
        &mut self,
        bets: &BetLog,
        catalogue: &MatchCatalogue,
        ledger: &mut AccountLedger,
    ) -> Result<(), LedgerError> {
        for bet in bets {
            self.settle_bet(bet, catalogue, ledger)?;
        }
        Ok(())
    }

    /// The accumulated house balance
    pub fn house_balance(&self) -> i64 {
        self.house_balance
    }

    /// Resolve a single bet
    fn settle_bet(
        &mut self,
        bet: &Bet,
        catalogue: &MatchCatalogue,
        ledger: &mut AccountLedger,
    ) -> Result<(), LedgerError> {
        // Bets from flagged accounts are void: no win, no loss, no refund
        if ledger.is_flagged(&bet.player) {
            return Ok(());
        }

        let m = catalogue
            .get(&bet.match_id)
            .ok_or_else(|| LedgerError::unknown_match(&bet.match_id))?;
        let rate = m.rate_for(bet.side);

        if bet.side.wins_against(m.result) {
            // Truncation toward zero after the floating multiplication is
            // load-bearing: settled amounts depend on it
            let winnings = (bet.amount as f64 * rate) as u64;
            ledger.credit_winnings(&bet.player, winnings + bet.amount)?;
            self.house_balance -= winnings as i64;
        } else if m.result == MatchOutcome::Draw {
            ledger.refund(&bet.player, bet.amount)?;
        } else {
            self.house_balance += bet.amount as i64;
        }

        Ok(())
    }
}

impl Default for SettlementEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BetSide, IllegalOperation, Match, MatchOutcome};
    use rstest::rstest;

    fn catalogue_with(rate_a: f64, rate_b: f64, result: MatchOutcome) -> MatchCatalogue {
        let mut catalogue = MatchCatalogue::new();
        catalogue.insert(Match {
            id: "m1".to_string(),
            rate_a,
            rate_b,
            result,
        });
        catalogue
    }

    fn log_with(player: &str, amount: u64, side: BetSide) -> BetLog {
        let mut log = BetLog::new();
        log.record(Bet {
            player: player.to_string(),
            match_id: "m1".to_string(),
            amount,
            side,
        });
        log
    }

    fn funded_ledger(player: &str, deposit: u64, stake: u64) -> AccountLedger {
        let mut ledger = AccountLedger::new();
        ledger.deposit(player, deposit).unwrap();
        ledger.place_bet(player, "m1", stake).unwrap();
        ledger
    }

    #[test]
    fn test_winning_bet_credits_stake_plus_winnings() {
        let catalogue = catalogue_with(2.0, 1.5, MatchOutcome::A);
        let mut ledger = funded_ledger("p1", 100, 40);
        let bets = log_with("p1", 40, BetSide::A);

        let mut engine = SettlementEngine::new();
        engine.settle(&bets, &catalogue, &mut ledger).unwrap();

        let account = ledger.get("p1").unwrap();
        assert_eq!(account.balance, 180);
        assert_eq!(account.won_bets, 1);
        assert_eq!(engine.house_balance(), -80);
    }

    #[test]
    fn test_losing_bet_moves_stake_to_house() {
        let catalogue = catalogue_with(2.0, 1.5, MatchOutcome::A);
        let mut ledger = funded_ledger("p2", 50, 50);
        let bets = log_with("p2", 50, BetSide::B);

        let mut engine = SettlementEngine::new();
        engine.settle(&bets, &catalogue, &mut ledger).unwrap();

        let account = ledger.get("p2").unwrap();
        assert_eq!(account.balance, 0);
        assert_eq!(account.won_bets, 0);
        assert_eq!(engine.house_balance(), 50);
    }

    #[test]
    fn test_draw_refunds_stake() {
        let catalogue = catalogue_with(2.0, 1.5, MatchOutcome::Draw);
        let mut ledger = funded_ledger("p3", 30, 30);
        let bets = log_with("p3", 30, BetSide::A);

        let mut engine = SettlementEngine::new();
        engine.settle(&bets, &catalogue, &mut ledger).unwrap();

        let account = ledger.get("p3").unwrap();
        assert_eq!(account.balance, 30);
        assert_eq!(account.won_bets, 0);
        assert_eq!(engine.house_balance(), 0);
    }

    #[test]
    fn test_flagged_account_bet_is_void() {
        let catalogue = catalogue_with(2.0, 1.5, MatchOutcome::A);
        let mut ledger = funded_ledger("p1", 100, 40);
        ledger.flag("p1", IllegalOperation::withdraw(500));
        let bets = log_with("p1", 40, BetSide::A);

        let mut engine = SettlementEngine::new();
        engine.settle(&bets, &catalogue, &mut ledger).unwrap();

        // No money moves in either direction for a void bet
        let account = ledger.get("p1").unwrap();
        assert_eq!(account.balance, 60);
        assert_eq!(account.won_bets, 0);
        assert_eq!(engine.house_balance(), 0);
    }

    #[rstest]
    #[case::exact(40, 2.0, 80)]
    #[case::truncates_half(33, 1.5, 49)]
    #[case::truncates_small(10, 1.99, 19)]
    #[case::rate_below_one(100, 0.5, 50)]
    fn test_winnings_truncate_toward_zero(
        #[case] stake: u64,
        #[case] rate: f64,
        #[case] expected_winnings: u64,
    ) {
        let catalogue = catalogue_with(rate, 1.0, MatchOutcome::A);
        let mut ledger = funded_ledger("p1", stake, stake);
        let bets = log_with("p1", stake, BetSide::A);

        let mut engine = SettlementEngine::new();
        engine.settle(&bets, &catalogue, &mut ledger).unwrap();

        assert_eq!(
            ledger.get("p1").unwrap().balance,
            expected_winnings + stake
        );
        assert_eq!(engine.house_balance(), -(expected_winnings as i64));
    }

    #[test]
    fn test_side_b_uses_rate_b() {
        let catalogue = catalogue_with(2.0, 1.5, MatchOutcome::B);
        let mut ledger = funded_ledger("p1", 40, 40);
        let bets = log_with("p1", 40, BetSide::B);

        let mut engine = SettlementEngine::new();
        engine.settle(&bets, &catalogue, &mut ledger).unwrap();

        // floor(40 * 1.5) = 60 winnings plus the returned stake
        assert_eq!(ledger.get("p1").unwrap().balance, 100);
        assert_eq!(engine.house_balance(), -60);
    }

    #[test]
    fn test_unknown_match_is_an_error() {
        let catalogue = MatchCatalogue::new();
        let mut ledger = AccountLedger::new();
        ledger.deposit("p1", 40).unwrap();
        ledger.place_bet("p1", "m1", 40).unwrap();
        let bets = log_with("p1", 40, BetSide::A);

        let mut engine = SettlementEngine::new();
        let result = engine.settle(&bets, &catalogue, &mut ledger);

        assert_eq!(result.unwrap_err(), LedgerError::unknown_match("m1"));
    }

    #[test]
    fn test_multiple_bets_settle_independently() {
        let mut catalogue = catalogue_with(2.0, 1.5, MatchOutcome::A);
        catalogue.insert(Match {
            id: "m2".to_string(),
            rate_a: 3.0,
            rate_b: 1.2,
            result: MatchOutcome::Draw,
        });

        let mut ledger = AccountLedger::new();
        ledger.deposit("p1", 100).unwrap();
        ledger.place_bet("p1", "m1", 40).unwrap();
        ledger.place_bet("p1", "m2", 20).unwrap();

        let mut bets = BetLog::new();
        bets.record(Bet {
            player: "p1".to_string(),
            match_id: "m1".to_string(),
            amount: 40,
            side: BetSide::A,
        });
        bets.record(Bet {
            player: "p1".to_string(),
            match_id: "m2".to_string(),
            amount: 20,
            side: BetSide::A,
        });

        let mut engine = SettlementEngine::new();
        engine.settle(&bets, &catalogue, &mut ledger).unwrap();

        // m1 wins 80 + stake 40 back, m2 draw refunds 20
        let account = ledger.get("p1").unwrap();
        assert_eq!(account.balance, 40 + 120 + 20);
        assert_eq!(account.won_bets, 1);
        assert_eq!(engine.house_balance(), -80);
    }
}
