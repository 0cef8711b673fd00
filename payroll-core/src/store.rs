//! In-memory employee store.
//!
//! Records are kept in insertion order for reporting; a side index maps names
//! to positions. Re-adding a name replaces the record in place.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculations::common::parse_amount;
use crate::{Employee, FilingStatus, PayrollError};

#[derive(Debug, Clone, Default)]
pub struct EmployeeStore {
    employees: Vec<Employee>,
    index: HashMap<String, usize>,
}

impl EmployeeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and records an employee.
    ///
    /// Returns `true` when an existing record with the same name was replaced.
    /// A replaced record keeps its original position.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::InvalidInput`] for an empty name or negative
    /// income. The store is left unchanged on error.
    pub fn add(
        &mut self,
        name: &str,
        income: Decimal,
        status: FilingStatus,
    ) -> Result<bool, PayrollError> {
        let employee = Employee::new(name, income, status)?;
        Ok(self.insert(employee))
    }

    /// Records an employee from raw text fields, as entered on a form.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::InvalidInput`] if the income is empty,
    /// malformed, or negative, or if the name is empty, and
    /// [`PayrollError::UnsupportedFilingStatus`] for an unknown status.
    pub fn add_raw(
        &mut self,
        name: &str,
        income: &str,
        status: &str,
    ) -> Result<bool, PayrollError> {
        let income = parse_amount(income)?;
        let status = status.parse()?;
        self.add(name, income, status)
    }

    /// Records an already-validated employee.
    pub fn insert(
        &mut self,
        employee: Employee,
    ) -> bool {
        let existing = self.index.get(employee.name()).copied();
        match existing {
            Some(position) => {
                debug!(name = employee.name(), "replacing employee record");
                self.employees[position] = employee;
                true
            }
            None => {
                debug!(name = employee.name(), "adding employee record");
                self.index
                    .insert(employee.name().to_string(), self.employees.len());
                self.employees.push(employee);
                false
            }
        }
    }

    /// # Errors
    ///
    /// Returns [`PayrollError::NotFound`] if no employee has this name.
    pub fn get(
        &self,
        name: &str,
    ) -> Result<&Employee, PayrollError> {
        self.index
            .get(name.trim())
            .map(|&position| &self.employees[position])
            .ok_or_else(|| PayrollError::NotFound(name.trim().to_string()))
    }

    /// All employees in insertion order.
    pub fn all(&self) -> &[Employee] {
        &self.employees
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}

/// An [`EmployeeStore`] behind a single mutex, for hosts that share the store
/// across threads.
///
/// Records are validated before the lock is taken, and a poisoned lock is
/// recovered.
#[derive(Debug, Default)]
pub struct SharedEmployeeStore {
    inner: Mutex<EmployeeStore>,
}

impl SharedEmployeeStore {
    pub fn new(store: EmployeeStore) -> Self {
        Self {
            inner: Mutex::new(store),
        }
    }

    /// See [`EmployeeStore::add`].
    ///
    /// # Errors
    ///
    /// Same as [`EmployeeStore::add`].
    pub fn add(
        &self,
        name: &str,
        income: Decimal,
        status: FilingStatus,
    ) -> Result<bool, PayrollError> {
        let employee = Employee::new(name, income, status)?;
        Ok(self.with_store(|store| store.insert(employee)))
    }

    /// Returns a copy of the named record.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::NotFound`] if no employee has this name.
    pub fn get(
        &self,
        name: &str,
    ) -> Result<Employee, PayrollError> {
        self.with_store(|store| store.get(name).cloned())
    }

    /// Snapshot of all employees in insertion order.
    pub fn all(&self) -> Vec<Employee> {
        self.with_store(|store| store.all().to_vec())
    }

    /// Runs `f` with the lock held, e.g. to generate a report.
    pub fn with_store<T>(
        &self,
        f: impl FnOnce(&mut EmployeeStore) -> T,
    ) -> T {
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut *guard)
    }

    pub fn into_inner(self) -> EmployeeStore {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}
