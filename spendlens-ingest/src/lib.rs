//! spendlens-ingest: delimiter sniffing, flexible header resolution and row parsing for CSV exports.

pub mod columns;
pub mod loader;
pub mod parser;
pub mod sniff;

pub use columns::{ColumnMap, Field};
pub use loader::{load_path, load_str, IngestOptions, LoadError, LoadReport, Rejection};
pub use parser::{parse_row, RowRejected, TransactionParser};
pub use sniff::{sniff_delimiter, take_sample, SniffError};
