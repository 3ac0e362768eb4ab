//! JSON persistence for the employee store
//!
//! Saves the full record sequence as an array of six-field objects with
//! 4-space indentation, `skills` rendered as an array of strings.

use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::{RosterError, RosterResult};

use super::file_io::write_atomic;
use super::EmployeeStore;

/// Save the full store to a JSON file, overwriting the target
pub fn save_json(store: &EmployeeStore, path: &Path) -> RosterResult<()> {
    write_atomic(path, |writer| {
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut *writer, formatter);
        store
            .employees()
            .serialize(&mut serializer)
            .map_err(RosterError::from)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Employee;
    use std::fs;
    use tempfile::TempDir;

    fn populated_store() -> EmployeeStore {
        let mut store = EmployeeStore::new();
        store
            .add(Employee::new(
                1,
                "Alice",
                "Engineer",
                5000,
                Employee::parse_skill_list("python,go"),
                "2021-01-15",
            ))
            .unwrap();
        store
    }

    #[test]
    fn test_save_json_shape() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("employees.json");

        save_json(&populated_store(), &path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        // 4-space indentation, skills as an array of strings
        assert!(contents.starts_with("[\n    {\n        \"id\": 1,"));
        assert!(contents.contains("\"skills\": [\n            \"go\",\n            \"python\"\n        ]"));

        let parsed: Vec<Employee> = serde_json::from_str(&contents).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].name, "Alice");
    }

    #[test]
    fn test_save_json_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("employees.json");
        fs::write(&path, "stale contents").unwrap();

        save_json(&populated_store(), &path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(!contents.contains("stale"));
        assert!(contents.contains("Alice"));
    }

    #[test]
    fn test_save_json_empty_store() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("employees.json");

        save_json(&EmployeeStore::new(), &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }
}
