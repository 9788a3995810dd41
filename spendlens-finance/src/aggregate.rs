//! Spending totals per category and per month.
//!
//! Always rebuilt from the full transaction list; nothing is updated in place.

use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::Serialize;
use spendlens_core::Transaction;
use std::collections::BTreeMap;

/// Category -> sum of absolute amounts, in first-seen order
pub type CategoryTotals = IndexMap<String, Decimal>;

/// `YYYY-MM` -> category totals for that month, chronological
pub type MonthlyCategoryTotals = BTreeMap<String, CategoryTotals>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Aggregates {
    pub categories: CategoryTotals,
    pub monthly: MonthlyCategoryTotals,
}

impl Aggregates {
    pub fn from_transactions(txns: &[Transaction]) -> Self {
        let mut categories = CategoryTotals::new();
        let mut monthly = MonthlyCategoryTotals::new();

        for txn in txns {
            let amount = txn.abs_amount();

            *categories.entry(txn.category.clone()).or_default() += amount;
            *monthly
                .entry(txn.month_key())
                .or_default()
                .entry(txn.category.clone())
                .or_default() += amount;
        }

        Self { categories, monthly }
    }

    /// Distinct month keys seen
    pub fn months(&self) -> usize {
        self.monthly.len()
    }
}
