use thiserror::Error;

/// A single cell value that could not be normalized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unable to parse date: {0:?}")]
    Date(String),
    #[error("unable to parse amount: {0:?}")]
    Amount(String),
}
