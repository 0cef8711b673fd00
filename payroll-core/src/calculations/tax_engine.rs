//! Bracket-based income tax computation.
//!
//! Each filing status has a fixed four-bracket table in ZAR. A bracket owns
//! the half-open range `[min_income, max_income)`, so income sitting exactly
//! on a boundary is taxed at the next bracket's base tax.
//!
//! | Status  | Floor   | Base tax  | Rate |
//! |---------|---------|-----------|------|
//! | Single  | 0       | 0.00      | 10%  |
//! | Single  | 9875    | 987.50    | 12%  |
//! | Single  | 40125   | 4617.50   | 22%  |
//! | Single  | 85525   | 14605.00  | 24%  |
//! | Married | 0       | 0.00      | 10%  |
//! | Married | 19750   | 1975.00   | 12%  |
//! | Married | 80250   | 9227.50   | 22%  |
//! | Married | 171050  | 29207.50  | 24%  |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use payroll_core::FilingStatus;
//! use payroll_core::calculations::compute_tax;
//!
//! let tax = compute_tax(dec!(50000), FilingStatus::Single).unwrap();
//! assert_eq!(tax, dec!(6790.00));
//! ```

use std::sync::LazyLock;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::debug;

use crate::{FilingStatus, PayrollError, TaxBracket};

static SINGLE_SCHEDULE: LazyLock<[TaxBracket; 4]> = LazyLock::new(|| {
    [
        TaxBracket {
            min_income: dec!(0),
            max_income: Some(dec!(9875)),
            tax_rate: dec!(0.10),
            base_tax: dec!(0),
        },
        TaxBracket {
            min_income: dec!(9875),
            max_income: Some(dec!(40125)),
            tax_rate: dec!(0.12),
            base_tax: dec!(987.50),
        },
        TaxBracket {
            min_income: dec!(40125),
            max_income: Some(dec!(85525)),
            tax_rate: dec!(0.22),
            base_tax: dec!(4617.50),
        },
        TaxBracket {
            min_income: dec!(85525),
            max_income: None,
            tax_rate: dec!(0.24),
            base_tax: dec!(14605.00),
        },
    ]
});

static MARRIED_SCHEDULE: LazyLock<[TaxBracket; 4]> = LazyLock::new(|| {
    [
        TaxBracket {
            min_income: dec!(0),
            max_income: Some(dec!(19750)),
            tax_rate: dec!(0.10),
            base_tax: dec!(0),
        },
        TaxBracket {
            min_income: dec!(19750),
            max_income: Some(dec!(80250)),
            tax_rate: dec!(0.12),
            base_tax: dec!(1975.00),
        },
        TaxBracket {
            min_income: dec!(80250),
            max_income: Some(dec!(171050)),
            tax_rate: dec!(0.22),
            base_tax: dec!(9227.50),
        },
        TaxBracket {
            min_income: dec!(171050),
            max_income: None,
            tax_rate: dec!(0.24),
            base_tax: dec!(29207.50),
        },
    ]
});

/// Returns the bracket table for `status`, ordered from lowest floor upward.
pub fn schedule(status: FilingStatus) -> &'static [TaxBracket] {
    match status {
        FilingStatus::Single => SINGLE_SCHEDULE.as_slice(),
        FilingStatus::Married => MARRIED_SCHEDULE.as_slice(),
    }
}

fn ensure_non_negative(income: Decimal) -> Result<(), PayrollError> {
    if income < Decimal::ZERO {
        return Err(PayrollError::InvalidInput(format!(
            "income must be non-negative, got {income}"
        )));
    }
    Ok(())
}

/// Finds the bracket whose range contains `income`.
///
/// # Errors
///
/// Returns [`PayrollError::InvalidInput`] if `income` is negative.
pub fn bracket_for(
    income: Decimal,
    status: FilingStatus,
) -> Result<&'static TaxBracket, PayrollError> {
    ensure_non_negative(income)?;

    schedule(status)
        .iter()
        .find(|b| b.covers(income))
        .ok_or_else(|| PayrollError::InvalidInput(format!("no tax bracket covers income {income}")))
}

/// Computes the tax owed on `income` for `status`.
///
/// The result is exact and unrounded; round with
/// [`round_half_up`](crate::calculations::common::round_half_up) only when
/// presenting it.
///
/// # Errors
///
/// Returns [`PayrollError::InvalidInput`] if `income` is negative.
pub fn compute_tax(
    income: Decimal,
    status: FilingStatus,
) -> Result<Decimal, PayrollError> {
    let bracket = bracket_for(income, status)?;
    let tax = bracket.tax_for(income);

    debug!(%income, %status, floor = %bracket.min_income, %tax, "computed tax");
    Ok(tax)
}

/// Parses `status` and then computes the tax, for callers holding raw text.
///
/// # Errors
///
/// Returns [`PayrollError::UnsupportedFilingStatus`] if `status` is not
/// `single` or `married`, or [`PayrollError::InvalidInput`] if `income` is
/// negative.
pub fn compute_tax_for(
    income: Decimal,
    status: &str,
) -> Result<Decimal, PayrollError> {
    compute_tax(income, status.parse()?)
}
