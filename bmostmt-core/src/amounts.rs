//! Currency parsing and layout-specific amount finishing.

use anyhow::{Context, Result};

/// Strip the currency symbol and thousands separators, then parse.
///
/// A malformed amount is fatal for the run; a statement that half-parses is
/// worse than one that fails.
pub fn parse_currency(raw: &str) -> Result<f64> {
    let cleaned = raw.replace('$', "").replace(',', "");
    cleaned
        .trim()
        .parse()
        .with_context(|| format!("malformed amount: {raw:?}"))
}

/// Parse an amount that may carry a `CR` (credit) marker.
///
/// Credits are negative in this sign convention; unmarked amounts are
/// debits and stay positive.
pub fn parse_credit_amount(raw: &str) -> Result<f64> {
    let cleaned = raw.replace('$', "").replace(',', "");
    if cleaned.contains("CR") {
        let value: f64 = cleaned
            .replace("CR", "")
            .replace(' ', "")
            .parse()
            .with_context(|| format!("malformed amount: {raw:?}"))?;
        Ok(-value)
    } else {
        cleaned
            .trim()
            .parse()
            .with_context(|| format!("malformed amount: {raw:?}"))
    }
}

/// Collapse runs of whitespace to single spaces.
///
/// Column-preserving text extraction pads descriptions with the gaps
/// between statement columns.
pub fn collapse_spaces(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_currency_strips_symbol_and_separators() {
        assert_eq!(parse_currency("$1,234.56").unwrap(), 1234.56);
        assert_eq!(parse_currency("-20.00").unwrap(), -20.0);
    }

    #[test]
    fn test_parse_currency_rejects_garbage() {
        assert!(parse_currency("1,2x4.56").is_err());
        assert!(parse_currency("").is_err());
    }

    #[test]
    fn test_credit_marker_flips_sign() {
        assert_eq!(parse_credit_amount("1,234.56 CR").unwrap(), -1234.56);
        assert_eq!(parse_credit_amount("250.00CR").unwrap(), -250.0);
    }

    #[test]
    fn test_unmarked_amount_is_a_debit() {
        assert_eq!(parse_credit_amount("1,234.56").unwrap(), 1234.56);
    }

    #[test]
    fn test_collapse_spaces() {
        assert_eq!(
            collapse_spaces("PAYMENT RECEIVED    - THANK YOU"),
            "PAYMENT RECEIVED - THANK YOU"
        );
    }
}
