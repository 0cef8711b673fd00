//! Common utility functions for tax calculations.
//!
//! Rounding and currency formatting live here so that every amount printed by
//! the report goes through the same presentation path. Nothing in this module
//! is applied while tax is being accumulated.

use rust_decimal::Decimal;
use tracing::warn;

use crate::PayrollError;

/// Currency prefix used on every amount in the report.
pub const CURRENCY: &str = "ZAR";

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 are rounded away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use payroll_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Formats an amount as `ZAR<value>` with exactly two decimal places.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use payroll_core::calculations::common::format_currency;
///
/// assert_eq!(format_currency(dec!(9875)), "ZAR9875.00");
/// assert_eq!(format_currency(dec!(1234.5678)), "ZAR1234.57");
/// ```
pub fn format_currency(value: Decimal) -> String {
    format!("{CURRENCY}{:.2}", round_half_up(value))
}

/// Trims whitespace and drops `,` thousands separators.
///
/// A comma is only accepted between digit groups of the integer part: the
/// first group holds one to three digits and every later group exactly three.
/// Returns `None` for any other comma placement.
fn normalize_amount_input(s: &str) -> Option<String> {
    let trimmed = s.trim();
    if !trimmed.contains(',') {
        return Some(trimmed.to_string());
    }

    let unsigned = trimmed.strip_prefix(['-', '+']).unwrap_or(trimmed);
    let integer = match unsigned.split_once('.') {
        Some((_, fraction)) if fraction.contains(',') => return None,
        Some((integer, _)) => integer,
        None => unsigned,
    };

    let is_digits = |group: &str| group.bytes().all(|b| b.is_ascii_digit());
    let mut groups = integer.split(',');
    let leading_ok = groups
        .next()
        .is_some_and(|first| (1..=3).contains(&first.len()) && is_digits(first));
    if !leading_ok || !groups.all(|group| group.len() == 3 && is_digits(group)) {
        return None;
    }

    Some(trimmed.replace(',', ""))
}

/// Parses user-entered amount text into a [`Decimal`].
///
/// Accepts `,` as a thousands separator (e.g. `"85,525.00"`). Unlike a form
/// field, an empty entry is not treated as zero.
///
/// # Errors
///
/// Returns [`PayrollError::InvalidInput`] for empty or non-numeric text, and
/// for commas that are not thousands separators (`"1234,56"`).
pub fn parse_amount(s: &str) -> Result<Decimal, PayrollError> {
    let invalid = || PayrollError::InvalidInput(format!("'{}' is not a valid amount", s.trim()));

    let Some(normalized) = normalize_amount_input(s) else {
        warn!(input = %s, "invalid amount: misplaced thousands separator");
        return Err(invalid());
    };
    if normalized.is_empty() {
        return Err(PayrollError::InvalidInput(
            "amount must not be empty".to_string(),
        ));
    }
    normalized.parse().map_err(|e| {
        warn!(input = %s, "invalid amount: {}", e);
        invalid()
    })
}
