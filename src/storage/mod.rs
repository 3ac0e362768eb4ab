//! Storage layer for the roster manager
//!
//! Provides the in-memory employee store plus CSV/JSON persistence with
//! atomic writes.

pub mod csv_io;
pub mod file_io;
pub mod json_io;

pub use csv_io::{load_csv, save_csv};
pub use file_io::delete_file;
pub use json_io::save_json;

use std::collections::BTreeSet;

use crate::error::{RosterError, RosterResult};
use crate::models::Employee;

/// The in-memory employee store
///
/// An ordered sequence of records, insertion order preserved. The store is
/// the sole owner of all records; the menu controller owns the store for the
/// life of the process.
#[derive(Debug, Default)]
pub struct EmployeeStore {
    employees: Vec<Employee>,
}

impl EmployeeStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records in the store
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Check whether the store holds no records
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// All records in store order
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Check whether an id is already present
    pub fn contains_id(&self, id: i64) -> bool {
        self.employees.iter().any(|e| e.id == id)
    }

    /// Get the first record with a matching id
    pub fn get(&self, id: i64) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    /// Append a record without any checks
    ///
    /// This is the file-load path: id uniqueness is not enforced on load, so
    /// a malformed CSV can introduce duplicates silently, and loading into a
    /// non-empty store appends rather than replaces.
    pub fn append(&mut self, employee: Employee) {
        self.employees.push(employee);
    }

    /// Add a record, enforcing id uniqueness and a valid employment date
    ///
    /// On rejection the store is left unchanged.
    pub fn add(&mut self, employee: Employee) -> RosterResult<()> {
        if self.contains_id(employee.id) {
            return Err(RosterError::duplicate_employee(employee.id));
        }

        Employee::parse_employment_date(&employee.employment_date).map_err(|_| {
            RosterError::Validation(format!(
                "Invalid employment date: {}",
                employee.employment_date
            ))
        })?;

        self.employees.push(employee);
        Ok(())
    }

    /// Replace the salary of the first record with a matching id and merge
    /// additional skills into its set
    ///
    /// The new salary is accepted as-is (negative values included).
    pub fn update_compensation(
        &mut self,
        id: i64,
        new_salary: i64,
        additional_skills: BTreeSet<String>,
    ) -> RosterResult<()> {
        let employee = self
            .employees
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| RosterError::employee_not_found(id.to_string()))?;

        employee.salary = new_salary;
        employee.add_skills(additional_skills);
        Ok(())
    }
}
