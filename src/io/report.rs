//! Final report output
//!
//! Writes the three-section run report:
//!
//! 1. One line per legitimate account: `id balance win_rate`, the win rate
//!    printed with two decimals and a comma as the decimal separator
//! 2. A blank separator line, then one line per flagged account:
//!    `id` followed by its first illegal operation in the uniform
//!    four-field shape (`WITHDRAW null 500 null`, `BET m1 50 A`)
//! 3. A blank separator line, then the house balance
//!
//! The caller passes accounts already sorted by player id, so the report
//! is deterministic across runs.

use crate::types::Account;
use std::io::Write;

/// Format a win rate with two decimals and a comma separator
///
/// `0.33` renders as `0,33`.
fn format_win_rate(rate: f64) -> String {
    format!("{:.2}", rate).replace('.', ",")
}

/// Write the final run report
///
/// # Arguments
///
/// * `accounts` - Final account states, sorted by player id
/// * `house_balance` - The settled house balance
/// * `output` - Writer receiving the report
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn write_report(
    accounts: &[&Account],
    house_balance: i64,
    output: &mut dyn Write,
) -> Result<(), String> {
    let mut write = |line: String| -> Result<(), String> {
        writeln!(output, "{}", line).map_err(|e| format!("Failed to write report: {}", e))
    };

    for account in accounts.iter().filter(|a| a.legitimate) {
        write(format!(
            "{} {} {}",
            account.id,
            account.balance,
            format_win_rate(account.win_rate())
        ))?;
    }

    write(String::new())?;

    for account in accounts.iter().filter(|a| !a.legitimate) {
        // Flagged accounts always carry a record; guard anyway so a report
        // can never panic
        let operation = account
            .first_illegal_operation
            .as_ref()
            .map(|op| op.to_string())
            .unwrap_or_else(|| "null".to_string());
        write(format!("{} {}", account.id, operation))?;
    }

    write(String::new())?;
    write(house_balance.to_string())?;

    output
        .flush()
        .map_err(|e| format!("Failed to flush output: {}", e))
}
