//! Payroll analytics
//!
//! Aggregates the store into total payroll, average salary, and the single
//! highest- and lowest-paid records.

use crate::error::{RosterError, RosterResult};
use crate::models::Employee;
use crate::storage::EmployeeStore;

/// The employee singled out by a salary extreme
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalaryHighlight {
    pub id: i64,
    pub name: String,
    pub salary: i64,
}

impl From<&Employee> for SalaryHighlight {
    fn from(employee: &Employee) -> Self {
        Self {
            id: employee.id,
            name: employee.name.clone(),
            salary: employee.salary,
        }
    }
}

/// Aggregate payroll figures for the whole store
#[derive(Debug, Clone)]
pub struct PayrollSummary {
    /// Number of records aggregated
    pub headcount: usize,
    /// Sum of all salaries
    pub total_payroll: i64,
    /// Floor division of total by headcount
    pub average_salary: i64,
    /// Highest-paid record, ties broken by first occurrence in store order
    pub highest: SalaryHighlight,
    /// Lowest-paid record, ties broken by first occurrence in store order
    pub lowest: SalaryHighlight,
}

impl PayrollSummary {
    /// Aggregate the store
    ///
    /// An empty store is a no-data error, not a division by zero.
    pub fn generate(store: &EmployeeStore) -> RosterResult<Self> {
        let employees = store.employees();
        if employees.is_empty() {
            return Err(RosterError::NoData("no employee records loaded".into()));
        }

        let total_payroll: i64 = employees.iter().map(|e| e.salary).sum();
        let average_salary = total_payroll.div_euclid(employees.len() as i64);

        let mut highest = &employees[0];
        let mut lowest = &employees[0];
        for employee in &employees[1..] {
            if employee.salary > highest.salary {
                highest = employee;
            }
            if employee.salary < lowest.salary {
                lowest = employee;
            }
        }

        Ok(Self {
            headcount: employees.len(),
            total_payroll,
            average_salary,
            highest: highest.into(),
            lowest: lowest.into(),
        })
    }
}
