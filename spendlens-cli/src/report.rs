//! Report rendering for an analyzed tracker: plain text or JSON.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use spendlens_finance::{Aggregates, CategoryTotals, MonthlyCategoryTotals, Summary};
use spendlens_ingest::Rejection;
use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize)]
pub struct RejectedRow {
    pub line: u64,
    pub reason: String,
}

#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub source: String,
    pub summary: &'a Summary,
    pub categories: &'a CategoryTotals,
    pub monthly: &'a MonthlyCategoryTotals,
    pub rejected_rows: Vec<RejectedRow>,
}

impl<'a> Report<'a> {
    pub fn new(
        source: &Path,
        summary: &'a Summary,
        aggregates: &'a Aggregates,
        rejections: &[Rejection],
    ) -> Self {
        Self {
            source: source.display().to_string(),
            summary,
            categories: &aggregates.categories,
            monthly: &aggregates.monthly,
            rejected_rows: rejections
                .iter()
                .map(|r| RejectedRow {
                    line: r.line,
                    reason: r.reason.to_string(),
                })
                .collect(),
        }
    }

    pub fn render(&self, format: Format) -> serde_json::Result<String> {
        match format {
            Format::Text => Ok(self.to_string()),
            Format::Json => serde_json::to_string_pretty(self),
        }
    }
}

fn money(d: Decimal) -> String {
    format!("${:.2}", d.round_dp(2))
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.summary;
        let width = self.categories.keys().map(|k| k.chars().count()).max().unwrap_or(0);

        writeln!(f, "Spending report: {}", self.source)?;
        writeln!(f, "Period: {} ({} months)", s.date_range, s.months_analyzed)?;
        writeln!(f, "Transactions: {}", s.total_transactions)?;
        writeln!(f, "Total expenses: {}", money(s.total_expenses))?;
        writeln!(f, "Average per month: {}", money(s.avg_monthly))?;

        writeln!(f, "\nTop categories")?;
        for (i, (name, total)) in s.top_categories.iter().enumerate() {
            writeln!(f, "  {}. {:<width$}  {:>12}", i + 1, name, money(*total))?;
        }

        writeln!(f, "\nAll categories")?;
        for (name, total) in self.categories {
            writeln!(f, "  {:<width$}  {:>12}", name, money(*total))?;
        }

        writeln!(f, "\nBy month")?;
        for (month, totals) in self.monthly {
            let month_total: Decimal = totals.values().sum();
            writeln!(f, "  {}  {:>12}", month, money(month_total))?;
            for (name, total) in totals {
                writeln!(f, "    {:<width$}  {:>12}", name, money(*total))?;
            }
        }

        if !self.rejected_rows.is_empty() {
            writeln!(f, "\nSkipped rows: {}", self.rejected_rows.len())?;
            for row in &self.rejected_rows {
                writeln!(f, "  line {}: {}", row.line, row.reason)?;
            }
        }

        Ok(())
    }
}
