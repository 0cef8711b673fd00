mod employee;
mod filing_status;
mod tax_bracket;

pub use employee::Employee;
pub use filing_status::FilingStatus;
pub use tax_bracket::TaxBracket;
