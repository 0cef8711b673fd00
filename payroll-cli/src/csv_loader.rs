//! CSV loader for employee records.
//!
//! ## CSV Format
//!
//! Headers are matched by name, so column order does **not** matter. Header
//! names are case-sensitive. Whitespace around values is trimmed.
//!
//! | Column   | Type    | Notes                                            |
//! |----------|---------|--------------------------------------------------|
//! | `name`   | string  | Non-empty; a repeated name overwrites earlier rows |
//! | `income` | decimal | Non-negative, e.g. `85525.00`                    |
//! | `status` | string  | `single` or `married`, any case                  |
//!
//! ### Example
//!
//! ```csv
//! name,income,status
//! Thandi Nkosi,9875.00,single
//! Sipho Dlamini,19750.00,married
//! ```

use std::path::{Path, PathBuf};

use payroll_core::{Employee, EmployeeStore, FilingStatus, PayrollError};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::debug;

// ---------------------------------------------------------------------------
// Serde-compatible row that mirrors the CSV layout exactly
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct CsvRow {
    name: String,
    income: Decimal,
    status: String,
}

// ---------------------------------------------------------------------------
// Public error type
// ---------------------------------------------------------------------------

/// Errors that can occur while loading employee CSV data.
#[derive(Debug, thiserror::Error)]
pub enum CsvLoadError {
    /// The file could not be read.
    #[error("cannot read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The underlying CSV deserialisation failed (bad structure, missing
    /// column, non-numeric income, etc.).
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    /// A row parsed but failed employee validation. `row` is the 1-based
    /// data-row number (the header is not counted).
    #[error("row {row}: {source}")]
    InvalidRow {
        row: usize,
        #[source]
        source: PayrollError,
    },
}

// ---------------------------------------------------------------------------
// Core loader
// ---------------------------------------------------------------------------

fn convert_row(
    row: CsvRow,
    row_number: usize,
) -> Result<Employee, CsvLoadError> {
    let invalid = |source| CsvLoadError::InvalidRow {
        row: row_number,
        source,
    };

    let status: FilingStatus = row.status.parse().map_err(invalid)?;
    Employee::new(&row.name, row.income, status).map_err(invalid)
}

/// Parses CSV text into validated employees, in file order.
///
/// # Errors
///
/// * [`CsvLoadError::Parse`] if the CSV is structurally invalid or a field
///   cannot be deserialised.
/// * [`CsvLoadError::InvalidRow`] if a row has an empty name, a negative
///   income, or an unsupported status.
pub fn load_from_str(input: &str) -> Result<Vec<Employee>, CsvLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(input.as_bytes());

    reader
        .deserialize::<CsvRow>()
        .enumerate()
        .map(|(idx, result)| {
            let row = result?;
            convert_row(row, idx + 1)
        })
        .collect()
}

/// Reads a file from disk and delegates to [`load_from_str`].
pub fn load_from_file(path: &Path) -> Result<Vec<Employee>, CsvLoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| CsvLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_from_str(&contents)
}

/// Adds `employees` to `store` in order and returns how many were new names.
pub fn load_into_store(
    store: &mut EmployeeStore,
    employees: Vec<Employee>,
) -> usize {
    let total = employees.len();
    let added = employees
        .into_iter()
        .map(|employee| store.insert(employee))
        .filter(|replaced| !replaced)
        .count();

    debug!(total, added, "loaded employees into store");
    added
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
