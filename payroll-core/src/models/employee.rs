use rust_decimal::Decimal;
use serde::Serialize;

use crate::{FilingStatus, PayrollError};

/// A validated employee record.
///
/// Fields are private so that every `Employee` in circulation has passed
/// [`Employee::new`]: the name is non-empty and the income is non-negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Employee {
    name: String,
    income: Decimal,
    status: FilingStatus,
}

impl Employee {
    /// Validates and builds a record. The name is trimmed before it is checked.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::InvalidInput`] if the trimmed name is empty or
    /// the income is negative.
    pub fn new(
        name: &str,
        income: Decimal,
        status: FilingStatus,
    ) -> Result<Self, PayrollError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(PayrollError::InvalidInput(
                "employee name must not be empty".to_string(),
            ));
        }
        if income < Decimal::ZERO {
            return Err(PayrollError::InvalidInput(format!(
                "income must be non-negative, got {income}"
            )));
        }

        // Folds `-0.00` and other signed zeros into plain zero.
        let income = if income.is_zero() { Decimal::ZERO } else { income };

        Ok(Self {
            name: name.to_string(),
            income,
            status,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn income(&self) -> Decimal {
        self.income
    }

    pub fn status(&self) -> FilingStatus {
        self.status
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn new_trims_name() {
        let employee = Employee::new("  Thandi  ", dec!(1000), FilingStatus::Single).unwrap();

        assert_eq!(employee.name(), "Thandi");
    }

    #[test]
    fn new_accepts_zero_income() {
        let employee = Employee::new("Sipho", dec!(0), FilingStatus::Married).unwrap();

        assert_eq!(employee.income(), dec!(0));
    }

    #[test]
    fn new_normalizes_negative_zero_income() {
        let employee = Employee::new("Sipho", dec!(-0.00), FilingStatus::Married).unwrap();

        assert_eq!(employee.income(), Decimal::ZERO);
        assert!(!employee.income().is_sign_negative());
        assert_eq!(crate::calculations::common::format_currency(employee.income()), "ZAR0.00");
    }

    #[test]
    fn new_rejects_blank_name() {
        let result = Employee::new("   ", dec!(1000), FilingStatus::Single);

        assert!(matches!(result, Err(PayrollError::InvalidInput(_))));
    }

    #[test]
    fn new_rejects_negative_income() {
        let result = Employee::new("Lerato", dec!(-0.01), FilingStatus::Single);

        assert!(matches!(result, Err(PayrollError::InvalidInput(_))));
    }
}
