//! Aggregate reports over the employee store

pub mod payroll;

pub use payroll::{PayrollSummary, SalaryHighlight};
