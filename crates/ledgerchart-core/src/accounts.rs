//! Account hierarchy utilities
//!
//! Accounts are colon-delimited paths such as `Expenses:Food:Grocery`.
//! All segment-boundary comparison goes through [`is_ancestor`], so no
//! caller matches on a bare string prefix.

use std::collections::BTreeSet;

use crate::models::Transaction;

/// Separator between account path segments
pub const ACCOUNT_SEPARATOR: char = ':';

/// Check whether `candidate` is a strict ancestor of `path`.
///
/// `Expenses:Food` is an ancestor of `Expenses:Food:Grocery`, while
/// `Expenses:Fo` is not an ancestor of `Expenses:Food`.
pub fn is_ancestor(candidate: &str, path: &str) -> bool {
    !candidate.is_empty()
        && path.len() > candidate.len() + 1
        && path.starts_with(candidate)
        && path[candidate.len()..].starts_with(ACCOUNT_SEPARATOR)
}

/// Check whether `candidate` is `path` itself or one of its ancestors
pub fn is_same_or_ancestor(candidate: &str, path: &str) -> bool {
    candidate == path || is_ancestor(candidate, path)
}

/// Find the strict descendants of `parent`, keeping their relative order
pub fn find_child_accounts<'a, S: AsRef<str>>(parent: &str, accounts: &'a [S]) -> Vec<&'a str> {
    accounts
        .iter()
        .map(AsRef::as_ref)
        .filter(|account| is_ancestor(parent, account))
        .collect()
}

/// Reduce an account list to the entries that chart without redundancy.
///
/// An intermediate account is dropped when both one of its ancestors and one
/// of its descendants are present: the ancestor's rollup and the
/// descendant's own series already cover it. Exact duplicates are removed.
/// Surviving accounts keep their input order, except that an ancestor is
/// moved ahead of its first listed descendant.
pub fn remove_duplicate_accounts<S: AsRef<str>>(accounts: &[S]) -> Vec<String> {
    let mut ordered: Vec<&str> = Vec::with_capacity(accounts.len());
    for account in accounts.iter().map(AsRef::as_ref) {
        if ordered.contains(&account) {
            continue;
        }
        match ordered.iter().position(|existing| is_ancestor(account, existing)) {
            Some(pos) => ordered.insert(pos, account),
            None => ordered.push(account),
        }
    }

    ordered
        .iter()
        .filter(|account| {
            let has_ancestor = ordered.iter().any(|other| is_ancestor(other, account));
            let has_descendant = ordered.iter().any(|other| is_ancestor(account, other));
            !(has_ancestor && has_descendant)
        })
        .map(|account| account.to_string())
        .collect()
}

/// Collect the sorted set of canonical accounts used by `transactions`
pub fn collect_accounts(transactions: &[Transaction]) -> Vec<String> {
    transactions
        .iter()
        .flat_map(|tx| tx.postings.iter())
        .map(|posting| posting.dealiased_account.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
