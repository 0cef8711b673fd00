//! Text report over an [`EmployeeStore`].
//!
//! # Format
//!
//! ```text
//! Name: <name>
//! Income: ZAR<income>
//! Tax: ZAR<tax>
//! ------------------------
//! ...
//!
//! Subtotal for Single: ZAR<total income>
//! Subtotal for Married: ZAR<total income>
//! ------------------------
//! ```
//!
//! Amounts are rounded to two decimals only when written out. Subtotals sum
//! income, not tax.

use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::calculations::common::format_currency;
use crate::calculations::tax_engine::compute_tax;
use crate::{EmployeeStore, FilingStatus, PayrollError};

/// Line written after each employee block and after the subtotals.
pub const SEPARATOR: &str = "------------------------";

/// One employee's line items in a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    pub name: String,
    pub status: FilingStatus,
    pub income: Decimal,
    /// Unrounded tax owed.
    pub tax: Decimal,
}

/// Income totals grouped by filing status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Subtotals {
    pub single: Decimal,
    pub married: Decimal,
}

impl Subtotals {
    pub fn for_status(
        &self,
        status: FilingStatus,
    ) -> Decimal {
        match status {
            FilingStatus::Single => self.single,
            FilingStatus::Married => self.married,
        }
    }

    fn accumulate(
        &mut self,
        status: FilingStatus,
        income: Decimal,
    ) -> Result<(), PayrollError> {
        let total = match status {
            FilingStatus::Single => &mut self.single,
            FilingStatus::Married => &mut self.married,
        };
        *total = total.checked_add(income).ok_or_else(|| {
            PayrollError::InvalidInput("income subtotal out of range".to_string())
        })?;
        Ok(())
    }
}

/// A generated report. `Display` writes the text form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub entries: Vec<ReportEntry>,
    pub subtotals: Subtotals,
}

impl Report {
    /// The full newline-delimited report text.
    pub fn text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Report {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "Name: {}", entry.name)?;
            writeln!(f, "Income: {}", format_currency(entry.income))?;
            writeln!(f, "Tax: {}", format_currency(entry.tax))?;
            writeln!(f, "{SEPARATOR}")?;
        }

        writeln!(f)?;
        for status in FilingStatus::ALL {
            writeln!(
                f,
                "Subtotal for {}: {}",
                status.label(),
                format_currency(self.subtotals.for_status(status))
            )?;
        }
        writeln!(f, "{SEPARATOR}")
    }
}

/// Computes every employee's tax in insertion order and totals income per
/// filing status. The store is not modified.
///
/// # Errors
///
/// Propagates [`PayrollError`] from [`compute_tax`], and returns
/// [`PayrollError::InvalidInput`] when a status's income subtotal exceeds the
/// decimal range.
pub fn generate_report(store: &EmployeeStore) -> Result<Report, PayrollError> {
    let mut entries = Vec::with_capacity(store.len());
    let mut subtotals = Subtotals::default();

    for employee in store.all() {
        let tax = compute_tax(employee.income(), employee.status())?;
        subtotals.accumulate(employee.status(), employee.income())?;

        entries.push(ReportEntry {
            name: employee.name().to_string(),
            status: employee.status(),
            income: employee.income(),
            tax,
        });
    }

    tracing::debug!(employees = entries.len(), "generated report");
    Ok(Report { entries, subtotals })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn two_employee_store() -> EmployeeStore {
        let mut store = EmployeeStore::new();
        store.add("Thandi", dec!(9875), FilingStatus::Single).unwrap();
        store.add("Sipho", dec!(19750), FilingStatus::Married).unwrap();
        store
    }

    #[test]
    fn report_text_matches_expected_layout() {
        let report = generate_report(&two_employee_store()).unwrap();

        let expected = "\
Name: Thandi
Income: ZAR9875.00
Tax: ZAR987.50
------------------------
Name: Sipho
Income: ZAR19750.00
Tax: ZAR1975.00
------------------------

Subtotal for Single: ZAR9875.00
Subtotal for Married: ZAR19750.00
------------------------
";
        assert_eq!(report.text(), expected);
    }

    #[test]
    fn separator_is_twenty_four_dashes() {
        assert_eq!(SEPARATOR.len(), 24);
        assert!(SEPARATOR.chars().all(|c| c == '-'));
    }

    #[test]
    fn subtotals_sum_income_per_status() {
        let mut store = two_employee_store();
        store.add("Anele", dec!(125.25), FilingStatus::Single).unwrap();

        let report = generate_report(&store).unwrap();

        assert_eq!(report.subtotals.single, dec!(10000.25));
        assert_eq!(report.subtotals.married, dec!(19750));
    }

    #[test]
    fn empty_store_reports_zero_subtotals() {
        let report = generate_report(&EmployeeStore::new()).unwrap();

        assert_eq!(
            report.text(),
            "\nSubtotal for Single: ZAR0.00\nSubtotal for Married: ZAR0.00\n------------------------\n"
        );
    }

    #[test]
    fn entries_keep_insertion_order_after_overwrite() {
        let mut store = two_employee_store();
        store.add("Anele", dec!(1), FilingStatus::Single).unwrap();
        store.add("Thandi", dec!(40125), FilingStatus::Single).unwrap();

        let report = generate_report(&store).unwrap();
        let names: Vec<&str> = report.entries.iter().map(|e| e.name.as_str()).collect();

        assert_eq!(names, vec!["Thandi", "Sipho", "Anele"]);
        assert_eq!(report.entries[0].tax, dec!(4617.50));
    }

    #[test]
    fn tax_is_rounded_only_in_text() {
        let mut store = EmployeeStore::new();
        store.add("Kabelo", dec!(0.05), FilingStatus::Single).unwrap();

        let report = generate_report(&store).unwrap();

        assert_eq!(report.entries[0].tax, dec!(0.005));
        assert!(report.text().contains("Tax: ZAR0.01\n"));
    }

    #[test]
    fn subtotal_overflow_is_invalid_input() {
        let mut store = EmployeeStore::new();
        store.add_raw("Bongani", "50000000000000000000000000000", "single").unwrap();
        store.add_raw("Zanele", "50000000000000000000000000000", "single").unwrap();

        let result = generate_report(&store);

        assert_eq!(
            result,
            Err(PayrollError::InvalidInput(
                "income subtotal out of range".to_string()
            ))
        );
    }

    #[test]
    fn large_incomes_in_different_statuses_do_not_overflow() {
        let mut store = EmployeeStore::new();
        store.add("Bongani", dec!(50000000000000000000000000000), FilingStatus::Single).unwrap();
        store.add("Zanele", dec!(50000000000000000000000000000), FilingStatus::Married).unwrap();

        let report = generate_report(&store).unwrap();

        assert_eq!(report.subtotals.single, dec!(50000000000000000000000000000));
        assert_eq!(report.subtotals.married, dec!(50000000000000000000000000000));
    }

    #[test]
    fn generate_report_does_not_mutate_store() {
        let store = two_employee_store();
        let before = store.all().to_vec();

        generate_report(&store).unwrap();

        assert_eq!(store.all(), before.as_slice());
    }
}
