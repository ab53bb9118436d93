//! Decimal-string amount parsing and formatting.
//!
//! Balances travel over the wire as decimal strings (`"1234.56"`). Derived
//! quantities are computed as `f64` with an explicit 0.01 tolerance wherever
//! equality matters, so parsing here is deliberately forgiving: `.` or `,` as
//! decimal separator, optional sign, surrounding whitespace.

use crate::{EngineError, ResultEngine};

/// Parses a decimal string into a number.
///
/// Returns `None` for empty or malformed input so derivations stay total.
///
/// ```rust
/// assert_eq!(engine::amount::parse("10,5"), Some(10.5));
/// assert_eq!(engine::amount::parse(""), None);
/// assert_eq!(engine::amount::parse("abc"), None);
/// ```
#[must_use]
pub fn parse(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    let normalized = trimmed.replace(',', ".");
    let value: f64 = normalized.parse().ok()?;
    value.is_finite().then_some(value)
}

/// Formats a major-unit amount with exactly two fraction digits.
#[must_use]
pub fn format_major(value: f64) -> String {
    format!("{value:.2}")
}

/// Parses what the user typed into a calibration form field.
///
/// Distinguishes "left blank" (`Ok(None)`, the wallet keeps its reported
/// balance) from a typo (`Err`), which the form surfaces inline.
pub fn parse_entered(text: &str) -> ResultEngine<Option<f64>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match parse(trimmed) {
        Some(value) => Ok(Some(value)),
        None => Err(EngineError::InvalidAmount(format!(
            "not a decimal amount: {trimmed}"
        ))),
    }
}
