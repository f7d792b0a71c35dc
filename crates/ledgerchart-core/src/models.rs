//! Core data models for balance aggregation

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{CoreError, CoreResult};

/// ISO date format used by transactions and chart points
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Sparse map of date -> account -> net change on that date.
///
/// Only (date, account) pairs with at least one posting are present.
/// Dates iterate in ascending order.
pub type DailyAccountBalanceChangeMap = BTreeMap<NaiveDate, BTreeMap<String, Decimal>>;

/// Dense map of date -> account -> cumulative end-of-day balance.
///
/// Holds one entry per calendar day of a closed range, and every entry
/// holds every tracked account.
pub type DailyBalanceMap = BTreeMap<NaiveDate, BTreeMap<String, Decimal>>;

/// Parse an ISO `YYYY-MM-DD` date
pub fn parse_date(value: &str) -> CoreResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| CoreError::InvalidDate {
        value: value.to_string(),
    })
}

/// Transaction as produced by the ledger parser
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction date (YYYY-MM-DD format)
    pub date: String,
    /// Payee name
    #[serde(default)]
    pub payee: String,
    /// List of postings
    #[serde(alias = "expenselines")]
    pub postings: Vec<Posting>,
    /// Source file location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Line number in source file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
}

impl Transaction {
    /// Get the transaction date as NaiveDate
    pub fn date_naive(&self) -> CoreResult<NaiveDate> {
        parse_date(&self.date)
    }

    /// Sum of all posting amounts, zero for a balanced transaction
    pub fn total(&self) -> Decimal {
        self.postings.iter().map(|p| p.amount).sum()
    }
}

/// Posting in a transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Posting {
    /// Account name as written in the ledger, possibly an alias
    pub account: String,
    /// Canonical account name with aliases expanded
    #[serde(alias = "dealiasedAccount")]
    pub dealiased_account: String,
    /// Signed amount
    pub amount: Decimal,
    /// Currency symbol, carried through untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Reconciliation marker
    #[serde(default)]
    pub reconcile: String,
}

/// Chart data point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// Bucket date, serialized as YYYY-MM-DD
    pub x: NaiveDate,
    /// Value at that date, written as a JSON number
    #[serde(with = "rust_decimal::serde::float")]
    pub y: Decimal,
}
