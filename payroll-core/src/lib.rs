pub mod calculations;
pub mod error;
pub mod models;
pub mod store;

pub use calculations::{Report, Subtotals, compute_tax, generate_report};
pub use error::PayrollError;
pub use models::*;
pub use store::{EmployeeStore, SharedEmployeeStore};
