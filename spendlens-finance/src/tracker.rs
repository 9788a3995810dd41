//! FinanceTracker: owns the loaded transactions and the aggregates derived from them.
//!
//! Phases run in order: `load` -> `analyze` -> `summary`. A successful load
//! replaces everything; a failed one leaves the previous state untouched.

use spendlens_core::Transaction;
use spendlens_ingest::{load_path, IngestOptions, LoadError, LoadReport, Rejection};
use std::borrow::Cow;
use std::path::Path;
use tracing::{error, info, warn};

use crate::aggregate::Aggregates;
use crate::summary::{Summary, TOP_CATEGORIES};

#[derive(Debug, Default)]
pub struct FinanceTracker {
    options: IngestOptions,
    report: LoadReport,
    aggregates: Option<Aggregates>,
}

impl FinanceTracker {
    pub fn new(options: IngestOptions) -> Self {
        Self {
            options,
            ..Default::default()
        }
    }

    /// Load a CSV file, replacing current contents.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<&LoadReport, LoadError> {
        let path = path.as_ref();
        let report = match load_path(path, &self.options) {
            Ok(report) => report,
            Err(err) => {
                error!(path = %path.display(), error = %err, "failed to load transactions");
                return Err(err);
            }
        };

        self.report = report;
        self.aggregates = None;
        Ok(&self.report)
    }

    /// [`load`](Self::load) reduced to success or failure.
    pub fn load_csv(&mut self, path: impl AsRef<Path>) -> bool {
        self.load(path).is_ok()
    }

    /// Outcome of the last successful load
    pub fn report(&self) -> &LoadReport {
        &self.report
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.report.transactions
    }

    /// Rows dropped by the last successful load
    pub fn rejections(&self) -> &[Rejection] {
        &self.report.rejections
    }

    /// Recompute category and month totals from scratch.
    ///
    /// No-op returning `None` when nothing is loaded.
    pub fn analyze(&mut self) -> Option<&Aggregates> {
        if self.report.transactions.is_empty() {
            warn!("no transactions to analyze");
            return None;
        }

        let aggregates = Aggregates::from_transactions(self.transactions());
        info!(
            categories = aggregates.categories.len(),
            months = aggregates.months(),
            "analysis complete"
        );
        self.aggregates = Some(aggregates);
        self.aggregates.as_ref()
    }

    /// Totals from the last `analyze`, if it ran since the last load
    pub fn aggregates(&self) -> Option<&Aggregates> {
        self.aggregates.as_ref()
    }

    pub fn summary(&self) -> Option<Summary> {
        self.summary_top(TOP_CATEGORIES)
    }

    /// Summary listing `top_n` categories. Never mutates the tracker.
    pub fn summary_top(&self, top_n: usize) -> Option<Summary> {
        let txns = self.transactions();
        if txns.is_empty() {
            return None;
        }

        let aggregates = match &self.aggregates {
            Some(agg) => Cow::Borrowed(agg),
            None => Cow::Owned(Aggregates::from_transactions(txns)),
        };
        Summary::compute(txns, &aggregates, top_n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tracker() {
        let mut tracker = FinanceTracker::default();
        assert!(tracker.analyze().is_none());
        assert!(tracker.aggregates().is_none());
        assert!(tracker.summary().is_none());
    }

    #[test]
    fn test_missing_file_leaves_store_empty() {
        let mut tracker = FinanceTracker::default();
        assert!(!tracker.load_csv("/no/such/dir/transactions.csv"));
        assert!(tracker.transactions().is_empty());
        assert!(tracker.rejections().is_empty());
    }
}
