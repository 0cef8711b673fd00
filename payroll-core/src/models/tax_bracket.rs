use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of a bracket table: tax owed is `base_tax` plus `tax_rate` times
/// the income above `min_income`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Inclusive floor. Income equal to the floor owes exactly `base_tax`.
    pub min_income: Decimal,
    /// Floor of the next bracket; `None` for the open-ended top bracket.
    pub max_income: Option<Decimal>,
    pub tax_rate: Decimal,
    pub base_tax: Decimal,
}

impl TaxBracket {
    /// True when `income` lies in `[min_income, max_income)`.
    pub fn covers(
        &self,
        income: Decimal,
    ) -> bool {
        income >= self.min_income && self.max_income.is_none_or(|max| income < max)
    }

    /// Tax owed on `income` using this bracket's formula, unrounded.
    pub fn tax_for(
        &self,
        income: Decimal,
    ) -> Decimal {
        self.base_tax + (income - self.min_income) * self.tax_rate
    }
}
