//! Normalized expense record

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Description used when the source row has none
pub const DEFAULT_DESCRIPTION: &str = "Unknown";
/// Category used when the source row has none
pub const DEFAULT_CATEGORY: &str = "Other";

/// One parsed row. Only built when both a date and an amount were recognized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Calendar date; any time of day in the source is dropped
    pub date: NaiveDate,
    /// Amount as authored. Sign carries no meaning downstream.
    pub amount: Decimal,
    pub description: String,
    pub category: String,
}

impl Transaction {
    pub fn new(
        date: NaiveDate,
        amount: Decimal,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            date,
            amount,
            description: description.into(),
            category: category.into(),
        }
    }

    /// Get the absolute amount
    pub fn abs_amount(&self) -> Decimal {
        self.amount.abs()
    }

    /// Month bucket, zero-padded `YYYY-MM`
    pub fn month_key(&self) -> String {
        format!("{:04}-{:02}", self.date.year(), self.date.month())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_month_key_is_zero_padded() {
        let txn = Transaction::new(
            NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
            dec!(-12.50),
            "Coffee",
            "Food",
        );
        assert_eq!(txn.month_key(), "2024-03");
        assert_eq!(txn.abs_amount(), dec!(12.50));
        assert_eq!(txn.amount, dec!(-12.50));
    }

    #[test]
    fn test_serializes_iso_date() {
        let txn = Transaction::new(
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            dec!(50),
            DEFAULT_DESCRIPTION,
            DEFAULT_CATEGORY,
        );
        let json = serde_json::to_value(&txn).unwrap();
        assert_eq!(json["date"], "2024-01-05");
        assert_eq!(json["category"], "Other");
    }
}
