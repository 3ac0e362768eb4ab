//! Employee model
//!
//! Represents a single employee record with a user-assigned numeric id,
//! free-text name and position, an integer salary, a set of skill tokens,
//! and a text employment date.

use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date format accepted for employment dates
pub const EMPLOYMENT_DATE_FORMAT: &str = "%Y-%m-%d";

/// An employee record
///
/// `skills` preserves the case tokens were entered with; comparisons
/// elsewhere lower-case both sides. `employment_date` stays text so record
/// ordering by date is lexicographic; it is calendar-validated only when a
/// record is created interactively, never when loaded from a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier (uniqueness enforced at add-time only)
    pub id: i64,

    /// Full name
    pub name: String,

    /// Job position
    pub position: String,

    /// Salary (negative values are accepted on update)
    pub salary: i64,

    /// Skill tokens, case as entered
    pub skills: BTreeSet<String>,

    /// Employment date in `YYYY-MM-DD` form
    pub employment_date: String,
}

impl Employee {
    /// Create a new employee record
    pub fn new(
        id: i64,
        name: impl Into<String>,
        position: impl Into<String>,
        salary: i64,
        skills: BTreeSet<String>,
        employment_date: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            position: position.into(),
            salary,
            skills,
            employment_date: employment_date.into(),
        }
    }

    /// Split a comma-separated skill list into a set of tokens
    ///
    /// Tokens are trimmed and empty tokens dropped, so `"python, go,"`
    /// yields `{"python", "go"}`.
    pub fn parse_skill_list(input: &str) -> BTreeSet<String> {
        input
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(String::from)
            .collect()
    }

    /// Check whether this employee has a skill, comparing case-insensitively
    pub fn has_skill(&self, token: &str) -> bool {
        let token = token.to_lowercase();
        self.skills.iter().any(|s| s.to_lowercase() == token)
    }

    /// Render the skill set as a comma-joined string (set order)
    pub fn skills_joined(&self) -> String {
        self.skills
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Merge additional skills into the existing set
    pub fn add_skills(&mut self, additional: BTreeSet<String>) {
        self.skills.extend(additional);
    }

    /// Validate an employment date string against the calendar
    pub fn parse_employment_date(value: &str) -> Result<NaiveDate, chrono::ParseError> {
        NaiveDate::parse_from_str(value, EMPLOYMENT_DATE_FORMAT)
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({}) salary {} [{}] since {}",
            self.id,
            self.name,
            self.position,
            self.salary,
            self.skills_joined(),
            self.employment_date
        )
    }
}
