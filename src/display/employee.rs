//! Employee display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Employee;

/// Row shape for the employee table
#[derive(Tabled)]
struct EmployeeTableRow {
    id: i64,
    name: String,
    position: String,
    salary: i64,
    skills: String,
    employment_date: String,
}

impl From<&Employee> for EmployeeTableRow {
    fn from(employee: &Employee) -> Self {
        Self {
            id: employee.id,
            name: employee.name.clone(),
            position: employee.position.clone(),
            salary: employee.salary,
            skills: employee.skills_joined(),
            employment_date: employee.employment_date.clone(),
        }
    }
}

/// Format a listing as an aligned table
///
/// An empty listing renders as nothing at all, matching the display
/// operation's behavior of printing each resulting record and no more.
pub fn format_employee_table(employees: &[&Employee]) -> String {
    if employees.is_empty() {
        return String::new();
    }

    let rows: Vec<EmployeeTableRow> = employees.iter().map(|e| (*e).into()).collect();
    let mut table = Table::new(rows);
    table.with(Style::sharp());
    format!("{}\n", table)
}

/// Format search results, one record per line
pub fn format_search_results(matches: &[&Employee]) -> String {
    if matches.is_empty() {
        return "No matches found.\n".to_string();
    }

    let mut output = String::new();
    for employee in matches {
        output.push_str(&format!("{}\n", employee));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Employee {
        Employee::new(
            1,
            "Alice",
            "Engineer",
            5000,
            Employee::parse_skill_list("python,go"),
            "2021-01-15",
        )
    }

    #[test]
    fn test_table_contains_fields() {
        let emp = sample();
        let table = format_employee_table(&[&emp]);
        assert!(table.contains("Alice"));
        assert!(table.contains("Engineer"));
        assert!(table.contains("5000"));
        assert!(table.contains("2021-01-15"));
    }

    #[test]
    fn test_empty_table_prints_nothing() {
        assert_eq!(format_employee_table(&[]), "");
    }

    #[test]
    fn test_search_results() {
        let emp = sample();
        let output = format_search_results(&[&emp]);
        assert!(output.contains("Alice"));
        assert!(output.ends_with('\n'));
    }

    #[test]
    fn test_empty_search_results() {
        assert_eq!(format_search_results(&[]), "No matches found.\n");
    }
}
