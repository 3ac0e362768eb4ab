//! Report display formatting

use crate::reports::PayrollSummary;

/// Format the payroll summary for console output
pub fn format_payroll_summary(summary: &PayrollSummary) -> String {
    format!(
        "Total Payroll: {}\n\
         Average Salary: {}\n\
         Highest Salary: {} - {}\n\
         Lowest Salary: {} - {}\n",
        summary.total_payroll,
        summary.average_salary,
        summary.highest.salary,
        summary.highest.name,
        summary.lowest.salary,
        summary.lowest.name,
    )
}
