//! Whole-file loading: sniff, resolve headers once, parse every record.
//!
//! File-level problems abort the load ([`LoadError`]); row-level problems are
//! collected in the [`LoadReport`] and never abort it.

use spendlens_core::Transaction;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

use crate::columns::ColumnMap;
use crate::parser::{RowRejected, TransactionParser};
use crate::sniff::{sniff_delimiter, take_sample, SniffError};

/// Bytes inspected for delimiter detection
pub const DEFAULT_SAMPLE_BYTES: usize = 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestOptions {
    pub sample_bytes: usize,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            sample_bytes: DEFAULT_SAMPLE_BYTES,
        }
    }
}

/// Fatal for the whole load; no rows are processed
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("file {} not found", .0.display())]
    NotFound(PathBuf),
    #[error("could not read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not detect delimiter")]
    Delimiter(#[from] SniffError),
    #[error("could not read header row")]
    Headers(#[source] csv::Error),
}

/// A dropped row and its 1-based source line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub line: u64,
    pub reason: RowRejected,
}

/// Outcome of a successful load
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub delimiter: u8,
    /// Parsed rows, in input order
    pub transactions: Vec<Transaction>,
    pub rejections: Vec<Rejection>,
}

impl LoadReport {
    pub fn loaded(&self) -> usize {
        self.transactions.len()
    }

    pub fn rejected(&self) -> usize {
        self.rejections.len()
    }
}

/// Read and parse a CSV file from disk.
pub fn load_path(path: impl AsRef<Path>, opts: &IngestOptions) -> Result<LoadReport, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound(path.to_path_buf()),
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let report = load_str(&content, opts)?;
    info!(
        path = %path.display(),
        loaded = report.loaded(),
        rejected = report.rejected(),
        "loaded transactions"
    );
    Ok(report)
}

/// Parse CSV content already in memory.
pub fn load_str(content: &str, opts: &IngestOptions) -> Result<LoadReport, LoadError> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let delimiter = sniff_delimiter(take_sample(content, opts.sample_bytes))?;

    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .has_headers(true)
        .from_reader(content.as_bytes());

    let headers = rdr.headers().map_err(LoadError::Headers)?.clone();
    let columns = ColumnMap::resolve(headers.iter());
    for field in columns.missing_required() {
        warn!(%field, headers = ?headers, "no recognized column; every row will be skipped");
    }

    let parser = TransactionParser::new(columns);
    let mut report = LoadReport {
        delimiter,
        ..Default::default()
    };

    for result in rdr.records() {
        let (line, outcome) = match result {
            Ok(record) => (
                record.position().map(|p| p.line()).unwrap_or_default(),
                parser.parse_record(&record),
            ),
            Err(err) => (
                err.position().map(|p| p.line()).unwrap_or_default(),
                Err(RowRejected::Malformed(err.to_string())),
            ),
        };

        match outcome {
            Ok(txn) => report.transactions.push(txn),
            Err(reason) => {
                warn!(line, %reason, "skipping invalid row");
                report.rejections.push(Rejection { line, reason });
            }
        }
    }

    Ok(report)
}
