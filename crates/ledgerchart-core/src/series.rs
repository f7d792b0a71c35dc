//! Chart series derived from daily balances
//!
//! Every series rolls an account up with its descendants: the value for
//! `Expenses:Food` includes `Expenses:Food:Grocery`. Descendants are looked
//! up in the explicit `all_accounts` list rather than in the balance map.
//!
//! A date missing from the balance map, or an account missing from a day,
//! contributes zero.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::accounts::find_child_accounts;
use crate::models::{ChartPoint, DailyBalanceMap};

/// Accounts whose balances make up the rollup of `account`
fn rollup_accounts<'a, S: AsRef<str>>(account: &'a str, all_accounts: &'a [S]) -> Vec<&'a str> {
    let mut accounts = vec![account];
    for child in find_child_accounts(account, all_accounts) {
        if !accounts.contains(&child) {
            accounts.push(child);
        }
    }
    accounts
}

fn rolled_up_balance(
    balance_map: &DailyBalanceMap,
    date: &NaiveDate,
    accounts: &[&str],
) -> Decimal {
    match balance_map.get(date) {
        Some(balances) => accounts
            .iter()
            .filter_map(|account| balances.get(*account))
            .sum(),
        None => Decimal::ZERO,
    }
}

/// Balance of `account` and its descendants at each bucket
pub fn make_balance_data<S: AsRef<str>>(
    balance_map: &DailyBalanceMap,
    buckets: &[NaiveDate],
    account: &str,
    all_accounts: &[S],
) -> Vec<ChartPoint> {
    let accounts = rollup_accounts(account, all_accounts);

    buckets
        .iter()
        .map(|bucket| ChartPoint {
            x: *bucket,
            y: rolled_up_balance(balance_map, bucket, &accounts),
        })
        .collect()
}

/// Change of the rolled-up balance of `account` over each bucket.
///
/// The first bucket is measured against `baseline`, each later bucket
/// against the bucket before it.
pub fn make_delta_data<S: AsRef<str>>(
    balance_map: &DailyBalanceMap,
    baseline: NaiveDate,
    buckets: &[NaiveDate],
    account: &str,
    all_accounts: &[S],
) -> Vec<ChartPoint> {
    let accounts = rollup_accounts(account, all_accounts);
    let mut previous = baseline_balance(balance_map, baseline, &accounts);

    buckets
        .iter()
        .map(|bucket| {
            let current = rolled_up_balance(balance_map, bucket, &accounts);
            let point = ChartPoint {
                x: *bucket,
                y: current - previous,
            };
            previous = current;
            point
        })
        .collect()
}

/// Rolled-up balance of `account` at each bucket minus its value at `baseline`
pub fn make_change_since_data<S: AsRef<str>>(
    balance_map: &DailyBalanceMap,
    baseline: NaiveDate,
    buckets: &[NaiveDate],
    account: &str,
    all_accounts: &[S],
) -> Vec<ChartPoint> {
    let accounts = rollup_accounts(account, all_accounts);
    let base = baseline_balance(balance_map, baseline, &accounts);

    buckets
        .iter()
        .map(|bucket| ChartPoint {
            x: *bucket,
            y: rolled_up_balance(balance_map, bucket, &accounts) - base,
        })
        .collect()
}

fn baseline_balance(
    balance_map: &DailyBalanceMap,
    baseline: NaiveDate,
    accounts: &[&str],
) -> Decimal {
    if !balance_map.contains_key(&baseline) {
        log::debug!("Baseline {} is outside the balance map, using zero", baseline);
    }
    rolled_up_balance(balance_map, &baseline, accounts)
}
