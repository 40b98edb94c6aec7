use std::str::FromStr;

use rust_decimal::Decimal;

use crate::errors::Result;

/// Parses raw amount text, accepting plain and scientific notation.
///
/// Empty input is zero.
pub fn parse_amount(raw: &str) -> Result<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(Decimal::ZERO);
    }
    match Decimal::from_str(trimmed) {
        Ok(value) => Ok(value),
        Err(_) => Ok(Decimal::from_scientific(trimmed)?),
    }
}

/// Coerces raw amount text from an input control to a number.
///
/// Anything unparseable becomes zero, which the submission check then rejects.
pub fn coerce_amount_input(raw: &str) -> Decimal {
    parse_amount(raw).unwrap_or_else(|e| {
        log::warn!("Treating amount input '{}' as zero: {}", raw, e);
        Decimal::ZERO
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_plain_and_padded() {
        assert_eq!(parse_amount("100").unwrap(), dec!(100));
        assert_eq!(parse_amount(" 12.50 ").unwrap(), dec!(12.50));
        assert_eq!(parse_amount("-3").unwrap(), dec!(-3));
    }

    #[test]
    fn test_parse_scientific() {
        assert_eq!(parse_amount("1e2").unwrap(), dec!(100));
    }

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(parse_amount("").unwrap(), Decimal::ZERO);
        assert_eq!(coerce_amount_input("   "), Decimal::ZERO);
    }

    #[test]
    fn test_garbage_is_error_but_coerces_to_zero() {
        assert!(parse_amount("abc").is_err());
        assert_eq!(coerce_amount_input("abc"), Decimal::ZERO);
    }
}
