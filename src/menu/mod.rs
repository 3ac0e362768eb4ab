//! Interactive menu loop
//!
//! Drives every operation through sequential console prompts. The loop has
//! two states, running and exited; transitions come solely from one-line
//! numeric choices. The store is loaded from the configured CSV path once at
//! startup and nothing is persisted implicitly on exit.

use std::io::{self, Write};
use std::path::Path;
use std::str::FromStr;

use crate::config::DataPaths;
use crate::display::{format_employee_table, format_payroll_summary, format_search_results};
use crate::error::{RosterError, RosterResult};
use crate::models::Employee;
use crate::reports::PayrollSummary;
use crate::services::{filter_and_sort, search, ListingOptions, SortKey};
use crate::storage::{delete_file, load_csv, save_csv, save_json, EmployeeStore};

/// One of the nine menu operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    AddEmployee,
    SearchEmployees,
    UpdateEmployee,
    DisplayEmployees,
    GenerateAnalytics,
    SaveJson,
    ExportCsv,
    DeleteFile,
    Exit,
}

impl MenuChoice {
    /// Parse a one-line choice; anything out of range is `None`
    fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::AddEmployee),
            "2" => Some(Self::SearchEmployees),
            "3" => Some(Self::UpdateEmployee),
            "4" => Some(Self::DisplayEmployees),
            "5" => Some(Self::GenerateAnalytics),
            "6" => Some(Self::SaveJson),
            "7" => Some(Self::ExportCsv),
            "8" => Some(Self::DeleteFile),
            "9" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// The menu-loop controller, owner of the store
pub struct MenuLoop {
    paths: DataPaths,
    store: EmployeeStore,
}

impl MenuLoop {
    /// Create a controller with an empty store
    pub fn new(paths: DataPaths) -> Self {
        Self {
            paths,
            store: EmployeeStore::new(),
        }
    }

    /// Run the menu until the user exits
    ///
    /// Recoverable conditions (validation failures, not-found, save errors)
    /// are printed and the loop continues; only prompt I/O failures
    /// (end-of-input included) propagate.
    pub fn run(&mut self) -> RosterResult<()> {
        match load_csv(&mut self.store, self.paths.csv_file()) {
            Ok(_) => {}
            Err(e) if e.is_not_found() => println!("File not found."),
            Err(e) => println!("Error: {}", e),
        }

        loop {
            print_menu();
            let choice = prompt_line("Enter your choice: ")?;

            match MenuChoice::parse(&choice) {
                Some(MenuChoice::AddEmployee) => self.add_employee()?,
                Some(MenuChoice::SearchEmployees) => self.search_employees()?,
                Some(MenuChoice::UpdateEmployee) => self.update_employee()?,
                Some(MenuChoice::DisplayEmployees) => self.display_employees()?,
                Some(MenuChoice::GenerateAnalytics) => self.generate_analytics()?,
                Some(MenuChoice::SaveJson) => self.save_to_json(),
                Some(MenuChoice::ExportCsv) => self.export_to_csv(),
                Some(MenuChoice::DeleteFile) => self.delete_file_prompt()?,
                Some(MenuChoice::Exit) => {
                    println!("Thank you for using our system");
                    return Ok(());
                }
                None => println!("Invalid choice. Please try again."),
            }
        }
    }

    fn add_employee(&mut self) -> RosterResult<()> {
        let id: i64 = match parse_number(&prompt_line("Enter employee ID: ")?) {
            Some(id) => id,
            None => {
                println!("Invalid input. Please try again.");
                return Ok(());
            }
        };

        if self.store.contains_id(id) {
            println!("ID already exists.");
            return Ok(());
        }

        let name = prompt_line("Enter full name: ")?;
        let position = prompt_line("Enter position: ")?;

        let salary: i64 = match parse_number(&prompt_line("Enter salary: ")?) {
            Some(salary) => salary,
            None => {
                println!("Invalid input. Please try again.");
                return Ok(());
            }
        };

        let skills = Employee::parse_skill_list(&prompt_line("Enter skills (comma-separated): ")?);
        let employment_date = prompt_line("Enter employment date (YYYY-MM-DD): ")?;

        let employee = Employee::new(id, name, position, salary, skills, employment_date);
        match self.store.add(employee) {
            Ok(()) => println!("Employee added successfully."),
            Err(e) if e.is_duplicate() => println!("ID already exists."),
            Err(e) if e.is_validation() => println!("Invalid input. Please try again."),
            Err(e) => return Err(e),
        }
        Ok(())
    }

    fn search_employees(&self) -> RosterResult<()> {
        let criteria = prompt_line("Search by (id/name/skills): ")?;
        let query = prompt_line("Enter search term: ")?;

        let matches = search(&self.store, &criteria, &query);
        print!("{}", format_search_results(&matches));
        Ok(())
    }

    fn update_employee(&mut self) -> RosterResult<()> {
        let id: i64 = match parse_number(&prompt_line("Enter employee ID to update: ")?) {
            Some(id) => id,
            None => {
                println!("Invalid input. Please try again.");
                return Ok(());
            }
        };

        if !self.store.contains_id(id) {
            println!("Employee not found.");
            return Ok(());
        }

        let salary: i64 = match parse_number(&prompt_line("Enter new salary: ")?) {
            Some(salary) => salary,
            None => {
                println!("Invalid input. Please try again.");
                return Ok(());
            }
        };

        let additional =
            Employee::parse_skill_list(&prompt_line("Enter skills to add (comma-separated): ")?);

        match self.store.update_compensation(id, salary, additional) {
            Ok(()) => println!("Employee updated successfully."),
            Err(e) if e.is_not_found() => println!("Employee not found."),
            Err(e) => return Err(e),
        }
        Ok(())
    }

    fn display_employees(&self) -> RosterResult<()> {
        let filter = prompt_line("Filter by position or skills (leave blank for all): ")?;
        let sort_key = SortKey::parse(&prompt_line("Sort by salary or employment_date: ")?);
        let descending = prompt_line("Sort descending? (yes/no): ")?.eq_ignore_ascii_case("yes");

        let options = ListingOptions::new(filter, sort_key, descending);
        let rows = filter_and_sort(&self.store, &options);
        print!("{}", format_employee_table(&rows));
        Ok(())
    }

    fn generate_analytics(&self) -> RosterResult<()> {
        match PayrollSummary::generate(&self.store) {
            Ok(summary) => print!("{}", format_payroll_summary(&summary)),
            Err(e) if e.is_no_data() => println!("No employee data to analyze."),
            Err(e) => return Err(e),
        }
        Ok(())
    }

    fn save_to_json(&self) {
        match save_json(&self.store, self.paths.json_file()) {
            Ok(()) => println!("Data saved to {}.", self.paths.json_file().display()),
            Err(e) => println!("Error: {}", e),
        }
    }

    fn export_to_csv(&self) {
        match save_csv(&self.store, self.paths.csv_file()) {
            Ok(()) => println!("Data exported to {}.", self.paths.csv_file().display()),
            Err(e) => println!("Error: {}", e),
        }
    }

    fn delete_file_prompt(&self) -> RosterResult<()> {
        let path = prompt_line("Enter file path to delete: ")?;

        match delete_file(Path::new(&path)) {
            Ok(()) => println!("File deleted."),
            Err(e) if e.is_not_found() => println!("File not found."),
            Err(e) => println!("Error: {}", e),
        }
        Ok(())
    }
}

fn print_menu() {
    println!("Welcome to the Employee Roster Manager!");
    println!("Menu:");
    println!("1. Add Employee");
    println!("2. Search Employee");
    println!("3. Update Employee");
    println!("4. Display Employees");
    println!("5. Generate Analytics");
    println!("6. Save to JSON");
    println!("7. Export to CSV");
    println!("8. Delete File");
    println!("9. Exit");
}

/// Prompt for a line of input
///
/// End-of-input is an error so a closed stdin cannot spin the loop.
fn prompt_line(prompt: &str) -> RosterResult<String> {
    print!("{}", prompt);
    io::stdout()
        .flush()
        .map_err(|e| RosterError::Io(e.to_string()))?;

    let mut input = String::new();
    let bytes = io::stdin()
        .read_line(&mut input)
        .map_err(|e| RosterError::Io(e.to_string()))?;
    if bytes == 0 {
        return Err(RosterError::Io("unexpected end of input".to_string()));
    }

    Ok(input.trim().to_string())
}

/// Parse a numeric field, `None` on failure
fn parse_number<T: FromStr>(input: &str) -> Option<T> {
    input.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choice_parsing() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::AddEmployee));
        assert_eq!(MenuChoice::parse(" 9 "), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("0"), None);
        assert_eq!(MenuChoice::parse("10"), None);
        assert_eq!(MenuChoice::parse("x"), None);
        assert_eq!(MenuChoice::parse(""), None);
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number::<i64>("42"), Some(42));
        assert_eq!(parse_number::<i64>(" -100 "), Some(-100));
        assert_eq!(parse_number::<i64>("abc"), None);

        // negative ids are valid numeric input
        assert_eq!(parse_number::<i64>("-1"), Some(-1));
    }
}
