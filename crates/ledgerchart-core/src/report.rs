//! Report assembly: transactions in, chart series out

use chrono::NaiveDate;
use ledgerchart_config::Interval;
use serde::{Deserialize, Serialize};

use crate::accounts::{collect_accounts, remove_duplicate_accounts};
use crate::balances::make_daily_balance_map;
use crate::buckets::make_bucket_dates;
use crate::changes::make_daily_account_balance_change_map;
use crate::error::{CoreError, CoreResult};
use crate::models::{ChartPoint, Transaction};
use crate::series::{make_balance_data, make_delta_data};

/// Parameters of a report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRequest {
    /// First bucket date
    pub start: NaiveDate,
    /// Last date a bucket may fall on
    pub end: NaiveDate,
    /// Bucket spacing
    #[serde(default)]
    pub interval: Interval,
    /// Accounts to chart; empty means every account in the transactions
    #[serde(default)]
    pub accounts: Vec<String>,
    /// Reference date for the first delta; defaults to the day before `start`
    #[serde(default)]
    pub baseline: Option<NaiveDate>,
}

impl ReportRequest {
    /// Create a request over `[start, end]` with daily buckets
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start,
            end,
            interval: Interval::Day,
            accounts: vec![],
            baseline: None,
        }
    }

    /// Effective baseline date
    pub fn baseline_date(&self) -> NaiveDate {
        self.baseline
            .unwrap_or_else(|| self.start.pred_opt().unwrap_or(self.start))
    }
}

/// Series for one account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountSeries {
    /// Charted account; its value includes every descendant account
    pub account: String,
    /// Rolled-up balance at each bucket date
    pub balance: Vec<ChartPoint>,
    /// Change since the previous bucket, or since the baseline for the first
    pub delta: Vec<ChartPoint>,
}

/// Chart-ready report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// First bucket date
    pub start: NaiveDate,
    /// Last date a bucket may fall on
    pub end: NaiveDate,
    /// Spacing between bucket dates
    pub interval: Interval,
    /// Date the first delta is measured from
    pub baseline: NaiveDate,
    /// One entry per charted account, redundant parents already removed
    pub series: Vec<AccountSeries>,
}

/// Earliest and latest transaction dates, `None` without transactions
pub fn transaction_date_bounds(
    transactions: &[Transaction],
) -> CoreResult<Option<(NaiveDate, NaiveDate)>> {
    let mut bounds: Option<(NaiveDate, NaiveDate)> = None;
    for tx in transactions {
        let date = tx.date_naive()?;
        bounds = Some(match bounds {
            Some((first, last)) => (first.min(date), last.max(date)),
            None => (date, date),
        });
    }
    Ok(bounds)
}

/// Run the whole pipeline for `request`.
///
/// Balances accumulate from the earliest transaction, so the first bucket
/// already reflects history before `start`.
pub fn build_report(transactions: &[Transaction], request: &ReportRequest) -> CoreResult<Report> {
    if request.start > request.end {
        return Err(CoreError::InvalidRange {
            start: request.start.to_string(),
            end: request.end.to_string(),
        });
    }

    let changes = make_daily_account_balance_change_map(transactions)?;
    let all_accounts = collect_accounts(transactions);
    let baseline = request.baseline_date();

    let range_start = [Some(request.start), Some(baseline), changes.keys().next().copied()]
        .into_iter()
        .flatten()
        .min()
        .unwrap_or(request.start);
    let range_end = request.end.max(baseline);

    let balance_map = make_daily_balance_map(&all_accounts, &changes, range_start, range_end)?;
    let buckets = make_bucket_dates(request.interval, request.start, request.end)?;

    let accounts = if request.accounts.is_empty() {
        remove_duplicate_accounts(&all_accounts)
    } else {
        remove_duplicate_accounts(&request.accounts)
    };

    let series = accounts
        .into_iter()
        .map(|account| AccountSeries {
            balance: make_balance_data(&balance_map, &buckets, &account, &all_accounts),
            delta: make_delta_data(&balance_map, baseline, &buckets, &account, &all_accounts),
            account,
        })
        .collect::<Vec<_>>();

    log::info!(
        "Built report with {} series over {} buckets ({} to {}, {})",
        series.len(),
        buckets.len(),
        request.start,
        request.end,
        request.interval
    );

    Ok(Report {
        start: request.start,
        end: request.end,
        interval: request.interval,
        baseline,
        series,
    })
}
