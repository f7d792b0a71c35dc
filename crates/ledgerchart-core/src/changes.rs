//! Daily change aggregation

use rust_decimal::Decimal;

use crate::error::CoreResult;
use crate::models::{DailyAccountBalanceChangeMap, Transaction};

/// Bucket every posting amount by (transaction date, canonical account).
///
/// Amounts on the same account and date are summed, whether they come from
/// one transaction or several. The raw `account` is ignored in favour of
/// `dealiased_account`. A transaction whose date does not parse fails the
/// whole aggregation. Unbalanced transactions are aggregated as given.
pub fn make_daily_account_balance_change_map(
    transactions: &[Transaction],
) -> CoreResult<DailyAccountBalanceChangeMap> {
    let mut changes = DailyAccountBalanceChangeMap::new();
    let mut unbalanced = 0;

    for tx in transactions {
        let date = tx.date_naive()?;
        if tx.postings.is_empty() {
            continue;
        }

        let total = tx.total();
        if !total.is_zero() {
            unbalanced += 1;
            log::debug!("Transaction '{}' on {} is off by {}", tx.payee, tx.date, total);
        }

        let day = changes.entry(date).or_default();
        for posting in &tx.postings {
            *day.entry(posting.dealiased_account.clone())
                .or_insert(Decimal::ZERO) += posting.amount;
        }
    }

    log::debug!(
        "Aggregated {} transactions ({} unbalanced) into {} days of changes",
        transactions.len(),
        unbalanced,
        changes.len()
    );

    Ok(changes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::models::Posting;
    use chrono::NaiveDate;
    use std::collections::BTreeMap;

    fn posting(account: &str, dealiased: &str, amount: i64) -> Posting {
        Posting {
            account: account.to_string(),
            dealiased_account: dealiased.to_string(),
            amount: Decimal::from(amount),
            currency: Some("$".to_string()),
            reconcile: String::new(),
        }
    }

    fn tx(date: &str, payee: &str, postings: Vec<Posting>) -> Transaction {
        Transaction {
            date: date.to_string(),
            payee: payee.to_string(),
            postings,
            source: None,
            line: None,
        }
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn day(entries: &[(&str, i64)]) -> BTreeMap<String, Decimal> {
        entries
            .iter()
            .map(|(account, amount)| (account.to_string(), Decimal::from(*amount)))
            .collect()
    }

    fn fixture() -> Vec<Transaction> {
        vec![
            tx(
                "2021-12-16",
                "Costco",
                vec![
                    posting("e:Spending Money", "Expenses:Spending Money", 100),
                    posting("c:Citi", "Credit:Citi", -100),
                ],
            ),
            tx(
                "2021-12-15",
                "Trader Joe's",
                vec![
                    posting("e:Food:Grocery", "Expenses:Food:Grocery", 120),
                    posting("c:Citi", "Credit:Citi", -120),
                ],
            ),
            tx(
                "2021-12-10",
                "PCC",
                vec![
                    posting("e:Food:Grocery", "Expenses:Food:Grocery", 20),
                    posting("c:Citi", "Credit:Citi", -20),
                ],
            ),
        ]
    }

    #[test]
    fn test_change_map_simple() {
        let result = make_daily_account_balance_change_map(&fixture()).unwrap();

        let mut expected = DailyAccountBalanceChangeMap::new();
        expected.insert(
            date("2021-12-10"),
            day(&[("Expenses:Food:Grocery", 20), ("Credit:Citi", -20)]),
        );
        expected.insert(
            date("2021-12-15"),
            day(&[("Expenses:Food:Grocery", 120), ("Credit:Citi", -120)]),
        );
        expected.insert(
            date("2021-12-16"),
            day(&[("Expenses:Spending Money", 100), ("Credit:Citi", -100)]),
        );

        assert_eq!(result, expected);
    }

    #[test]
    fn test_change_map_dates_ascending() {
        let result = make_daily_account_balance_change_map(&fixture()).unwrap();
        let dates: Vec<NaiveDate> = result.keys().copied().collect();
        assert_eq!(
            dates,
            vec![date("2021-12-10"), date("2021-12-15"), date("2021-12-16")]
        );
    }

    #[test]
    fn test_change_map_sums_same_account_and_date() {
        let transactions = vec![
            tx(
                "2022-01-01",
                "Split",
                vec![
                    posting("e:Food", "Expenses:Food", 5),
                    posting("e:Food", "Expenses:Food", 7),
                    posting("a:Cash", "Assets:Cash", -12),
                ],
            ),
            tx(
                "2022-01-01",
                "Again",
                vec![
                    posting("e:Food", "Expenses:Food", 3),
                    posting("a:Cash", "Assets:Cash", -3),
                ],
            ),
        ];
        let result = make_daily_account_balance_change_map(&transactions).unwrap();

        assert_eq!(
            result[&date("2022-01-01")],
            day(&[("Expenses:Food", 15), ("Assets:Cash", -15)])
        );
    }

    #[test]
    fn test_change_map_uses_dealiased_account() {
        let transactions = vec![tx(
            "2022-01-01",
            "Alias",
            vec![
                posting("e:Food", "Expenses:Food", 5),
                posting("Expenses:Food", "Expenses:Food", 5),
                posting("a", "Assets", -10),
            ],
        )];
        let result = make_daily_account_balance_change_map(&transactions).unwrap();
        let day = &result[&date("2022-01-01")];

        assert_eq!(day["Expenses:Food"], Decimal::from(10));
        assert!(!day.contains_key("e:Food"));
    }

    #[test]
    fn test_change_map_days_balance_to_zero() {
        let result = make_daily_account_balance_change_map(&fixture()).unwrap();
        for (day, accounts) in &result {
            let total: Decimal = accounts.values().sum();
            assert_eq!(total, Decimal::ZERO, "unbalanced on {}", day);
        }
    }

    #[test]
    fn test_change_map_keeps_unbalanced_transaction() {
        let unbalanced = tx(
            "2022-01-02",
            "Typo",
            vec![
                posting("e:Food", "Expenses:Food", 10),
                posting("a:Cash", "Assets:Cash", -9),
            ],
        );
        assert_eq!(unbalanced.total(), Decimal::ONE);

        let result = make_daily_account_balance_change_map(&[unbalanced]).unwrap();
        assert_eq!(
            result[&date("2022-01-02")],
            day(&[("Expenses:Food", 10), ("Assets:Cash", -9)])
        );
    }

    #[test]
    fn test_change_map_empty_input() {
        let result = make_daily_account_balance_change_map(&[]).unwrap();
        assert!(result.is_empty());

        let empty = tx("2022-01-01", "Empty", vec![]);
        let result = make_daily_account_balance_change_map(&[empty]).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_change_map_rejects_malformed_date() {
        let mut transactions = fixture();
        transactions.push(tx("2021-12-32", "Bad", vec![posting("a", "Assets", 1)]));

        let result = make_daily_account_balance_change_map(&transactions);
        assert_eq!(
            result,
            Err(CoreError::InvalidDate {
                value: "2021-12-32".to_string()
            })
        );
    }
}
