//! spendlens-finance: category/month aggregation, headline summary, and the tracker that owns loaded transactions

pub mod aggregate;
pub mod summary;
pub mod tracker;

pub use aggregate::{Aggregates, CategoryTotals, MonthlyCategoryTotals};
pub use summary::{Summary, TOP_CATEGORIES};
pub use tracker::FinanceTracker;
