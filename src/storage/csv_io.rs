//! CSV persistence for the employee store
//!
//! Header-driven load and export with the layout
//! `id,name,position,salary,skills,employment_date`, where `skills` is a
//! single comma-joined field.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{RosterError, RosterResult};
use crate::models::Employee;

use super::file_io::write_atomic;
use super::EmployeeStore;

/// Flat row shape used for the CSV file
#[derive(Debug, Serialize, Deserialize)]
struct EmployeeRow {
    id: i64,
    name: String,
    position: String,
    salary: i64,
    skills: String,
    employment_date: String,
}

impl From<&Employee> for EmployeeRow {
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

impl From<EmployeeRow> for Employee {
    fn from(row: EmployeeRow) -> Self {
        Employee::new(
            row.id,
            row.name,
            row.position,
            row.salary,
            Employee::parse_skill_list(&row.skills),
            row.employment_date,
        )
    }
}

/// Load records from a CSV file, appending to the store
///
/// Appends rather than replaces: loading into a non-empty store grows it.
/// Returns the number of records appended. A missing file is a not-found
/// error and leaves the store untouched; a non-numeric `id` or `salary` is a
/// reported parse error and leaves the rows read before it in place.
pub fn load_csv(store: &mut EmployeeStore, path: &Path) -> RosterResult<usize> {
    if !path.exists() {
        return Err(RosterError::file_not_found(path.display().to_string()));
    }

    let mut reader = csv::Reader::from_path(path)?;
    let mut loaded = 0;

    for row in reader.deserialize::<EmployeeRow>() {
        store.append(row?.into());
        loaded += 1;
    }

    Ok(loaded)
}

/// Export the full store to a CSV file, overwriting the target
pub fn save_csv(store: &EmployeeStore, path: &Path) -> RosterResult<()> {
    write_atomic(path, |writer| {
        let mut csv_writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);

        // Header goes out even for an empty store
        csv_writer
            .write_record([
                "id",
                "name",
                "position",
                "salary",
                "skills",
                "employment_date",
            ])
            .map_err(RosterError::from)?;

        for employee in store.employees() {
            csv_writer
                .serialize(EmployeeRow::from(employee))
                .map_err(RosterError::from)?;
        }

        csv_writer
            .flush()
            .map_err(|e| RosterError::Io(e.to_string()))
    })
}
