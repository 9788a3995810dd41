//! Date normalization against a fixed, ordered list of formats.
//!
//! Numeric day/month order is a policy, not detection: `MM/DD/YYYY` is tried
//! before `DD/MM/YYYY`, so `03/04/2024` is always March 4th. The European
//! reading only wins when the first number cannot be a month.

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::ParseError;

/// A candidate input format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateFormat {
    pattern: &'static str,
    /// Time of day present; parsed then discarded
    with_time: bool,
    /// Which run of digits in the input holds the year
    year_run: usize,
}

impl DateFormat {
    const fn date(pattern: &'static str, year_run: usize) -> Self {
        Self {
            pattern,
            with_time: false,
            year_run,
        }
    }

    const fn date_time(pattern: &'static str, year_run: usize) -> Self {
        Self {
            pattern,
            with_time: true,
            year_run,
        }
    }

    fn parse(&self, s: &str) -> Option<NaiveDate> {
        let date = if self.with_time {
            NaiveDateTime::parse_from_str(s, self.pattern)
                .ok()
                .map(|dt| dt.date())
        } else {
            NaiveDate::parse_from_str(s, self.pattern).ok()
        }?;

        // chrono's %Y takes 1-4 digits; "03/04/24" must not become year 24
        let year = s
            .split(|c: char| !c.is_ascii_digit())
            .filter(|run| !run.is_empty())
            .nth(self.year_run)?;
        (year.len() == 4).then_some(date)
    }

    pub fn pattern(&self) -> &'static str {
        self.pattern
    }
}

/// Priority order matters; first match wins.
pub const DATE_FORMATS: [DateFormat; 7] = [
    DateFormat::date("%Y-%m-%d", 0),
    DateFormat::date("%m/%d/%Y", 2),
    DateFormat::date("%d/%m/%Y", 2),
    DateFormat::date_time("%Y-%m-%d %H:%M:%S", 0),
    DateFormat::date_time("%m/%d/%Y %H:%M:%S", 2),
    DateFormat::date("%B %d, %Y", 1),
    DateFormat::date("%b %d, %Y", 1),
];

/// Parse a free-text date with the first matching entry of [`DATE_FORMATS`].
///
/// Years must be written with four digits.
pub fn parse_date(raw: &str) -> Result<NaiveDate, ParseError> {
    let s = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| fmt.parse(s))
        .ok_or_else(|| ParseError::Date(s.to_string()))
}
