//! Account categories derived from configured prefixes

use ledgerchart_config::AccountsConfig;
use serde::{Deserialize, Serialize};

use crate::accounts::is_same_or_ancestor;

/// Account category enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountCategory {
    /// Asset accounts (cash, bank, investments)
    Asset,
    /// Expense accounts (food, transport)
    Expense,
    /// Income accounts (salary, dividends)
    Income,
    /// Liability accounts (credit cards, loans)
    Liability,
}

impl AccountCategory {
    /// All categories in display order
    pub const ALL: [AccountCategory; 4] = [
        AccountCategory::Asset,
        AccountCategory::Expense,
        AccountCategory::Income,
        AccountCategory::Liability,
    ];

    /// Configured prefix for this category
    pub fn prefix<'a>(&self, config: &'a AccountsConfig) -> &'a str {
        match self {
            AccountCategory::Asset => &config.asset_prefix,
            AccountCategory::Expense => &config.expense_prefix,
            AccountCategory::Income => &config.income_prefix,
            AccountCategory::Liability => &config.liability_prefix,
        }
    }
}

impl std::str::FromStr for AccountCategory {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asset" | "assets" => Ok(AccountCategory::Asset),
            "expense" | "expenses" => Ok(AccountCategory::Expense),
            "income" => Ok(AccountCategory::Income),
            "liability" | "liabilities" => Ok(AccountCategory::Liability),
            _ => Err(format!("Invalid account category: {}", s)),
        }
    }
}

impl std::fmt::Display for AccountCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccountCategory::Asset => write!(f, "asset"),
            AccountCategory::Expense => write!(f, "expense"),
            AccountCategory::Income => write!(f, "income"),
            AccountCategory::Liability => write!(f, "liability"),
        }
    }
}

/// Category of `account`, picking the most specific matching prefix
pub fn categorize(account: &str, config: &AccountsConfig) -> Option<AccountCategory> {
    AccountCategory::ALL
        .into_iter()
        .filter(|category| is_same_or_ancestor(category.prefix(config), account))
        .max_by_key(|category| category.prefix(config).len())
}

/// Accounts belonging to `category`, in their original order
pub fn accounts_in_category<'a, S: AsRef<str>>(
    category: AccountCategory,
    accounts: &'a [S],
    config: &AccountsConfig,
) -> Vec<&'a str> {
    accounts
        .iter()
        .map(AsRef::as_ref)
        .filter(|account| categorize(account, config) == Some(category))
        .collect()
}
