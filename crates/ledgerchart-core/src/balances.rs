//! Dense daily cumulative balances

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::error::{CoreError, CoreResult};
use crate::models::{DailyAccountBalanceChangeMap, DailyBalanceMap};

/// Build one entry per calendar day in `[start, end]`, each holding the
/// running balance of every tracked account.
///
/// Balances start at zero on `start` and carry forward across days without
/// a change. Untracked accounts and change dates outside the range are
/// ignored.
pub fn make_daily_balance_map<S: AsRef<str>>(
    tracked_accounts: &[S],
    changes: &DailyAccountBalanceChangeMap,
    start: NaiveDate,
    end: NaiveDate,
) -> CoreResult<DailyBalanceMap> {
    if start > end {
        return Err(CoreError::InvalidRange {
            start: start.to_string(),
            end: end.to_string(),
        });
    }

    let mut running: BTreeMap<String, Decimal> = tracked_accounts
        .iter()
        .map(|account| (account.as_ref().to_string(), Decimal::ZERO))
        .collect();

    let mut balances = DailyBalanceMap::new();
    for day in start.iter_days().take_while(|day| *day <= end) {
        if let Some(day_changes) = changes.get(&day) {
            for (account, amount) in day_changes {
                if let Some(total) = running.get_mut(account) {
                    *total += *amount;
                }
            }
        }
        balances.insert(day, running.clone());
    }

    log::debug!(
        "Built daily balances for {} accounts over {} days ({} to {})",
        running.len(),
        balances.len(),
        start,
        end
    );

    Ok(balances)
}
