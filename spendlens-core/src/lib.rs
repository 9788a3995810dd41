//! spendlens-core: transaction record and the value normalizers shared by every layer

pub mod amount;
pub mod dates;
pub mod error;
pub mod transaction;

pub use amount::{parse_amount, MAX_AMOUNT};
pub use dates::{parse_date, DATE_FORMATS};
pub use error::ParseError;
pub use transaction::{Transaction, DEFAULT_CATEGORY, DEFAULT_DESCRIPTION};
