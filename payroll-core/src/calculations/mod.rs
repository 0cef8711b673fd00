//! Tax computation and reporting.
//!
//! `tax_engine` holds the pure bracket lookup; `report` renders a store into
//! the itemised text report.

pub mod common;
pub mod report;
pub mod tax_engine;

pub use report::{Report, ReportEntry, SEPARATOR, Subtotals, generate_report};
pub use tax_engine::{bracket_for, compute_tax, compute_tax_for, schedule};
