//! Headline statistics over the loaded transactions.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use spendlens_core::Transaction;

use crate::aggregate::Aggregates;

/// Number of categories listed in a default summary
pub const TOP_CATEGORIES: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total_expenses: Decimal,
    pub total_transactions: usize,
    /// Total divided by the number of months present (at least 1)
    pub avg_monthly: Decimal,
    /// `"<first> to <last>"`, ISO dates
    pub date_range: String,
    pub first_date: NaiveDate,
    pub last_date: NaiveDate,
    /// Largest categories, descending; ties keep first-seen order
    pub top_categories: Vec<(String, Decimal)>,
    pub months_analyzed: usize,
}

impl Summary {
    /// `None` when there is nothing to summarize.
    pub fn compute(txns: &[Transaction], aggregates: &Aggregates, top_n: usize) -> Option<Self> {
        let first_date = txns.iter().map(|t| t.date).min()?;
        let last_date = txns.iter().map(|t| t.date).max()?;

        let total_expenses: Decimal = txns.iter().map(Transaction::abs_amount).sum();
        let months_analyzed = aggregates.months();
        let avg_monthly = total_expenses / Decimal::from(months_analyzed.max(1));

        let mut top_categories: Vec<(String, Decimal)> = aggregates
            .categories
            .iter()
            .map(|(name, total)| (name.clone(), *total))
            .collect();
        // stable: equal totals stay in first-seen order
        top_categories.sort_by(|a, b| b.1.cmp(&a.1));
        top_categories.truncate(top_n);

        Some(Self {
            total_expenses,
            total_transactions: txns.len(),
            avg_monthly,
            date_range: format!("{} to {}", first_date.format("%Y-%m-%d"), last_date.format("%Y-%m-%d")),
            first_date,
            last_date,
            top_categories,
            months_analyzed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn txn(y: i32, m: u32, d: u32, amount: Decimal, category: &str) -> Transaction {
        Transaction::new(NaiveDate::from_ymd_opt(y, m, d).unwrap(), amount, "x", category)
    }

    fn summarize(txns: &[Transaction]) -> Option<Summary> {
        Summary::compute(txns, &Aggregates::from_transactions(txns), TOP_CATEGORIES)
    }

    #[test]
    fn test_headline_numbers() {
        let txns = vec![
            txn(2024, 1, 5, dec!(-50), "Food"),
            txn(2024, 1, 20, dec!(30), "Food"),
            txn(2024, 2, 1, dec!(10), "Transport"),
        ];
        let s = summarize(&txns).unwrap();

        assert_eq!(s.total_expenses, dec!(90));
        assert_eq!(s.total_transactions, 3);
        assert_eq!(s.months_analyzed, 2);
        assert_eq!(s.avg_monthly, dec!(45));
        assert_eq!(s.date_range, "2024-01-05 to 2024-02-01");
        assert_eq!(
            s.top_categories,
            vec![("Food".to_string(), dec!(80)), ("Transport".to_string(), dec!(10))]
        );
    }

    #[test]
    fn test_date_range_ignores_input_order() {
        let txns = vec![
            txn(2024, 6, 30, dec!(1), "A"),
            txn(2023, 12, 31, dec!(1), "A"),
            txn(2024, 1, 1, dec!(1), "A"),
        ];
        let s = summarize(&txns).unwrap();
        assert_eq!(s.date_range, "2023-12-31 to 2024-06-30");
        assert_eq!(s.first_date, NaiveDate::from_ymd_opt(2023, 12, 31).unwrap());
    }

    #[test]
    fn test_top_five_with_stable_ties() {
        let txns = vec![
            txn(2024, 1, 1, dec!(5), "Tie-A"),
            txn(2024, 1, 1, dec!(100), "Big"),
            txn(2024, 1, 1, dec!(5), "Tie-B"),
            txn(2024, 1, 1, dec!(1), "Small"),
            txn(2024, 1, 1, dec!(5), "Tie-C"),
            txn(2024, 1, 1, dec!(50), "Mid"),
            txn(2024, 1, 1, dec!(5), "Tie-D"),
        ];
        let s = summarize(&txns).unwrap();
        let names: Vec<_> = s.top_categories.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["Big", "Mid", "Tie-A", "Tie-B", "Tie-C"]);
    }

    #[test]
    fn test_single_month_average() {
        let txns = vec![txn(2024, 5, 1, dec!(-20.50), "Food"), txn(2024, 5, 9, dec!(4.50), "Food")];
        let s = summarize(&txns).unwrap();
        assert_eq!(s.avg_monthly, dec!(25.00));
        assert_eq!(s.months_analyzed, 1);
    }

    #[test]
    fn test_empty_is_none() {
        assert!(summarize(&[]).is_none());
    }
}
