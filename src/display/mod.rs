//! Terminal display formatting
//!
//! Formats employees and reports for console output. Formatting returns
//! strings so it stays testable; printing happens at the menu layer.

pub mod employee;
pub mod report;

pub use employee::{format_employee_table, format_search_results};
pub use report::format_payroll_summary;
