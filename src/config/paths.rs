//! Path management for the roster manager
//!
//! The data files live at fixed relative paths by default (`employees.csv`
//! and `employees.json` in the working directory); the CLI can override both.

use std::path::{Path, PathBuf};

/// Default CSV data file, relative to the working directory
pub const DEFAULT_CSV_FILE: &str = "employees.csv";

/// Default JSON save file, relative to the working directory
pub const DEFAULT_JSON_FILE: &str = "employees.json";

/// Resolved locations of the employee data files
#[derive(Debug, Clone)]
pub struct DataPaths {
    csv_file: PathBuf,
    json_file: PathBuf,
}

impl DataPaths {
    /// Create paths pointing at the default files in the working directory
    pub fn new() -> Self {
        Self {
            csv_file: PathBuf::from(DEFAULT_CSV_FILE),
            json_file: PathBuf::from(DEFAULT_JSON_FILE),
        }
    }

    /// Create paths pointing at explicit files (CLI overrides, tests)
    pub fn with_files(csv_file: PathBuf, json_file: PathBuf) -> Self {
        Self {
            csv_file,
            json_file,
        }
    }

    /// The CSV file records are loaded from and exported to
    pub fn csv_file(&self) -> &Path {
        &self.csv_file
    }

    /// The JSON file records are saved to
    pub fn json_file(&self) -> &Path {
        &self.json_file
    }
}

impl Default for DataPaths {
    fn default() -> Self {
        Self::new()
    }
}
