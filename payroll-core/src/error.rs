use thiserror::Error;

/// Errors surfaced by the employee store and the tax engine.
///
/// All variants are local validation failures; none of them are transient.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PayrollError {
    /// Empty name, negative income, or an income that is not a number.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A filing status outside of `single` / `married`.
    #[error("unsupported filing status '{0}'")]
    UnsupportedFilingStatus(String),

    /// Lookup of an employee that was never added.
    #[error("employee '{0}' not found")]
    NotFound(String),
}
