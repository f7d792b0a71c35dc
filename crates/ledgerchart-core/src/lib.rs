//! Balance aggregation engine for ledgerchart
//!
//! Data flows one way: transactions are bucketed into sparse daily changes,
//! the changes are forward-filled into dense daily balances, and the
//! balances are sampled into rolled-up chart series.
//!
//! Every function is pure: inputs are borrowed immutably and each call
//! returns a fresh snapshot.

pub mod accounts;
pub mod balances;
pub mod buckets;
pub mod categories;
pub mod changes;
pub mod error;
pub mod models;
pub mod report;
pub mod series;

pub use accounts::{
    collect_accounts, find_child_accounts, is_ancestor, is_same_or_ancestor,
    remove_duplicate_accounts,
};
pub use balances::make_daily_balance_map;
pub use buckets::make_bucket_dates;
pub use categories::{accounts_in_category, categorize, AccountCategory};
pub use changes::make_daily_account_balance_change_map;
pub use error::{CoreError, CoreResult, ErrorCode};
pub use models::{
    parse_date, ChartPoint, DailyAccountBalanceChangeMap, DailyBalanceMap, Posting, Transaction,
};
pub use report::{build_report, transaction_date_bounds, AccountSeries, Report, ReportRequest};
pub use series::{make_balance_data, make_change_since_data, make_delta_data};

pub use ledgerchart_config::Interval;
