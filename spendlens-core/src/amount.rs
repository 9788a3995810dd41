//! Amount normalization: `"$1,234.56"` -> `1234.56`

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::error::ParseError;

/// Largest accepted magnitude. Keeps any realistic number of rows summable
/// without overflowing `Decimal`.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0x6310_0000, 0x6BC7_5E2D, 0x0000_0005, false, 0);

/// Strip `$` and thousands separators, then parse as a decimal.
///
/// The sign is kept as written. Scientific notation (`1.5e3`) is accepted.
/// Magnitudes above [`MAX_AMOUNT`] are rejected.
pub fn parse_amount(raw: &str) -> Result<Decimal, ParseError> {
    let cleaned = raw.trim().replace(['$', ','], "");
    let cleaned = cleaned.trim();

    Decimal::from_str(cleaned)
        .or_else(|_| Decimal::from_scientific(cleaned))
        .ok()
        .filter(|amount| amount.abs() <= MAX_AMOUNT)
        .ok_or_else(|| ParseError::Amount(raw.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_currency_and_thousands() {
        assert_eq!(parse_amount("$1,234.56").unwrap(), dec!(1234.56));
        assert_eq!(parse_amount("  -$1,000  ").unwrap(), dec!(-1000));
        assert_eq!(parse_amount("$ 42.10").unwrap(), dec!(42.10));
    }

    #[test]
    fn test_sign_preserved() {
        assert_eq!(parse_amount("-50").unwrap(), dec!(-50));
        assert_eq!(parse_amount("30.00").unwrap(), dec!(30.00));
    }

    #[test]
    fn test_scientific() {
        assert_eq!(parse_amount("1.5e3").unwrap(), dec!(1500));
    }

    #[test]
    fn test_bound() {
        assert_eq!(MAX_AMOUNT, Decimal::from_i128_with_scale(100_000_000_000_000_000_000, 0));
        assert_eq!(parse_amount("100000000000000000000").unwrap(), MAX_AMOUNT);
        assert_eq!(parse_amount("-100000000000000000000").unwrap(), -MAX_AMOUNT);
        assert!(parse_amount("100000000000000000000.01").is_err());
        assert_eq!(
            parse_amount("79228162514264337593543950335"),
            Err(ParseError::Amount("79228162514264337593543950335".to_string()))
        );
        assert!(parse_amount("1e30").is_err());
    }

    #[test]
    fn test_rejects_garbage() {
        assert_eq!(parse_amount("abc"), Err(ParseError::Amount("abc".to_string())));
        assert!(parse_amount("").is_err());
        assert!(parse_amount("$").is_err());
        assert!(parse_amount("(12.00)").is_err());
    }
}
