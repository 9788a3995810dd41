//! Row -> Transaction, or the reason the row was dropped.

use csv::StringRecord;
use spendlens_core::{
    parse_amount, parse_date, ParseError, Transaction, DEFAULT_CATEGORY, DEFAULT_DESCRIPTION,
};
use std::collections::HashMap;
use thiserror::Error;

use crate::columns::{ColumnMap, Field};

/// Why a single row produced no transaction. Never fatal for a load.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowRejected {
    #[error("no {0} column among headers")]
    MissingColumn(Field),
    #[error("empty {0} value")]
    MissingValue(Field),
    #[error(transparent)]
    Invalid(#[from] ParseError),
    #[error("malformed record: {0}")]
    Malformed(String),
}

/// Parses records of one file using its resolved [`ColumnMap`]
#[derive(Debug, Clone, Copy)]
pub struct TransactionParser {
    columns: ColumnMap,
}

impl TransactionParser {
    pub fn new(columns: ColumnMap) -> Self {
        Self { columns }
    }

    pub fn columns(&self) -> &ColumnMap {
        &self.columns
    }

    pub fn parse_record(&self, record: &StringRecord) -> Result<Transaction, RowRejected> {
        // Column presence is checked before any value is looked at
        for field in [Field::Date, Field::Amount] {
            if self.columns.index(field).is_none() {
                return Err(RowRejected::MissingColumn(field));
            }
        }

        let date = parse_date(self.required(record, Field::Date)?)?;
        let amount = parse_amount(self.required(record, Field::Amount)?)?;
        let description = self.optional(record, Field::Description, DEFAULT_DESCRIPTION);
        let category = self.optional(record, Field::Category, DEFAULT_CATEGORY);

        Ok(Transaction {
            date,
            amount,
            description,
            category,
        })
    }

    fn cell<'r>(&self, record: &'r StringRecord, field: Field) -> Option<&'r str> {
        self.columns
            .index(field)
            .and_then(|i| record.get(i))
            .map(str::trim)
            .filter(|v| !v.is_empty())
    }

    fn required<'r>(&self, record: &'r StringRecord, field: Field) -> Result<&'r str, RowRejected> {
        self.cell(record, field).ok_or(RowRejected::MissingValue(field))
    }

    fn optional(&self, record: &StringRecord, field: Field, default: &str) -> String {
        self.cell(record, field).unwrap_or(default).to_string()
    }
}

/// Parse one keyed row on its own, resolving headers from its keys.
pub fn parse_row(row: &HashMap<String, String>) -> Result<Transaction, RowRejected> {
    let (headers, values): (Vec<&str>, Vec<&str>) = row
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .unzip();

    let parser = TransactionParser::new(ColumnMap::resolve(headers));
    parser.parse_record(&StringRecord::from(values))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn row(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_full_row() {
        let txn = parse_row(&row(&[
            ("Date", "2024-01-05"),
            ("Amount", "-$1,234.56"),
            ("Description", "  Rent  "),
            ("Category", "Housing"),
        ]))
        .unwrap();

        assert_eq!(txn.date, NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
        assert_eq!(txn.amount, dec!(-1234.56));
        assert_eq!(txn.description, "Rent");
        assert_eq!(txn.category, "Housing");
    }

    #[test]
    fn test_currency_amount() {
        let txn = parse_row(&row(&[("date", "03/15/2024"), ("amount", "$1,234.56")])).unwrap();
        assert_eq!(txn.amount, dec!(1234.56));
    }

    #[test]
    fn test_defaults_for_optional_fields() {
        let txn = parse_row(&row(&[("date", "2024-01-05"), ("value", "12")])).unwrap();
        assert_eq!(txn.description, "Unknown");
        assert_eq!(txn.category, "Other");

        let txn = parse_row(&row(&[
            ("date", "2024-01-05"),
            ("value", "12"),
            ("desc", "   "),
            ("type", ""),
        ]))
        .unwrap();
        assert_eq!(txn.description, "Unknown");
        assert_eq!(txn.category, "Other");
    }

    #[test]
    fn test_missing_date_column() {
        let err = parse_row(&row(&[("when", "2024-01-05"), ("amount", "12")])).unwrap_err();
        assert_eq!(err, RowRejected::MissingColumn(Field::Date));
    }

    #[test]
    fn test_missing_amount_column() {
        let err = parse_row(&row(&[("date", "2024-01-05"), ("cost", "12")])).unwrap_err();
        assert_eq!(err, RowRejected::MissingColumn(Field::Amount));
    }

    #[test]
    fn test_missing_column_wins_over_bad_value() {
        let err = parse_row(&row(&[("date", "not a date")])).unwrap_err();
        assert_eq!(err, RowRejected::MissingColumn(Field::Amount));
    }

    #[test]
    fn test_bad_date_and_amount() {
        let err = parse_row(&row(&[("date", "someday"), ("amount", "1")])).unwrap_err();
        assert_eq!(err, RowRejected::Invalid(ParseError::Date("someday".to_string())));

        let err = parse_row(&row(&[("date", "2024-01-05"), ("amount", "ten")])).unwrap_err();
        assert_eq!(err, RowRejected::Invalid(ParseError::Amount("ten".to_string())));
    }

    #[test]
    fn test_blank_mandatory_value() {
        let err = parse_row(&row(&[("date", "2024-01-05"), ("amount", " ")])).unwrap_err();
        assert_eq!(err, RowRejected::MissingValue(Field::Amount));
    }

    #[test]
    fn test_short_record() {
        let parser = TransactionParser::new(ColumnMap::resolve(["date", "description", "amount"]));
        let err = parser
            .parse_record(&StringRecord::from(vec!["2024-01-05", "Lunch"]))
            .unwrap_err();
        assert_eq!(err, RowRejected::MissingValue(Field::Amount));
    }
}
