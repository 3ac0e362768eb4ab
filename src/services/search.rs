//! Employee search
//!
//! Criteria-driven lookups over the store: exact id match, case-insensitive
//! name substring, or exact (case-insensitive) skill-token equality.

use crate::models::Employee;
use crate::storage::EmployeeStore;

/// The field a search runs against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchCriteria {
    /// Exact match of the query against the id rendered as text
    Id,
    /// Case-insensitive substring match against the name
    Name,
    /// Exact token equality against the skill set, query split on commas
    Skills,
}

impl SearchCriteria {
    /// Parse a criteria keyword, case-insensitively
    ///
    /// Anything other than `id`, `name`, or `skills` is `None`; callers
    /// treat that as zero matches.
    pub fn parse(keyword: &str) -> Option<Self> {
        match keyword.trim().to_lowercase().as_str() {
            "id" => Some(Self::Id),
            "name" => Some(Self::Name),
            "skills" => Some(Self::Skills),
            _ => None,
        }
    }
}

/// Search the store, returning matches in store order
///
/// An unrecognized criteria keyword yields no matches.
pub fn search<'a>(store: &'a EmployeeStore, criteria: &str, query: &str) -> Vec<&'a Employee> {
    let criteria = match SearchCriteria::parse(criteria) {
        Some(criteria) => criteria,
        None => return Vec::new(),
    };

    let query = query.trim();
    match criteria {
        SearchCriteria::Id => store
            .employees()
            .iter()
            .filter(|e| e.id.to_string() == query)
            .collect(),
        SearchCriteria::Name => {
            let needle = query.to_lowercase();
            store
                .employees()
                .iter()
                .filter(|e| e.name.to_lowercase().contains(&needle))
                .collect()
        }
        SearchCriteria::Skills => {
            let tokens: Vec<String> = query
                .split(',')
                .map(|t| t.trim().to_lowercase())
                .filter(|t| !t.is_empty())
                .collect();
            store
                .employees()
                .iter()
                .filter(|e| tokens.iter().any(|t| e.has_skill(t)))
                .collect()
        }
    }
}
