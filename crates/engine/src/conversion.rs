//! Conversion of wallet balances into the reference currency.

use std::collections::HashMap;

use api_types::CurrencyCode;

use crate::amount;

/// The currency all cross-currency amounts are normalized against.
pub const REFERENCE_CURRENCY: &str = "USD";

/// Converts `amount` from `currency` into the reference currency.
///
/// Rates are quoted as units of `currency` per 1 unit of the reference
/// currency, so conversion divides. The result is formatted to exactly two
/// fraction digits.
///
/// Returns `None` when there is nothing to convert or no way to convert:
/// the amount is already in the reference currency, the amount string is
/// empty or malformed, or no positive rate is known for `currency`.
#[must_use]
pub fn to_reference(
    amount: &str,
    currency: &CurrencyCode,
    rates: &HashMap<CurrencyCode, f64>,
) -> Option<String> {
    if currency.as_str() == REFERENCE_CURRENCY {
        return None;
    }
    let value = amount::parse(amount)?;
    let rate = rates.get(currency).copied().filter(|rate| *rate > 0.0)?;
    Some(amount::format_major(value / rate))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rates(pairs: &[(&str, f64)]) -> HashMap<CurrencyCode, f64> {
        pairs
            .iter()
            .map(|(code, rate)| (CurrencyCode::new(code), *rate))
            .collect()
    }

    #[test]
    fn divides_by_the_quoted_rate() {
        let idr = CurrencyCode::new("IDR");
        let rub = CurrencyCode::new("RUB");
        assert_eq!(
            to_reference("157500", &idr, &rates(&[("IDR", 15750.0)])),
            Some("10.00".to_string())
        );
        assert_eq!(
            to_reference("9250", &rub, &rates(&[("RUB", 92.5)])),
            Some("100.00".to_string())
        );
    }

    #[test]
    fn reference_currency_needs_no_conversion() {
        let usd = CurrencyCode::new("USD");
        assert_eq!(to_reference("100", &usd, &rates(&[("USD", 1.0)])), None);
    }

    #[test]
    fn missing_or_degenerate_rate_yields_none() {
        let krw = CurrencyCode::new("KRW");
        let idr = CurrencyCode::new("IDR");
        assert_eq!(to_reference("1000", &krw, &rates(&[("IDR", 15750.0)])), None);
        assert_eq!(to_reference("1000", &idr, &rates(&[("IDR", 0.0)])), None);
        assert_eq!(to_reference("1000", &idr, &rates(&[("IDR", -2.0)])), None);
        assert_eq!(to_reference("100", &idr, &HashMap::new()), None);
    }

    #[test]
    fn empty_amount_yields_none() {
        let idr = CurrencyCode::new("IDR");
        assert_eq!(to_reference("", &idr, &rates(&[("IDR", 15750.0)])), None);
    }
}
