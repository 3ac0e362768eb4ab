//! Filtered, sorted employee listings
//!
//! Builds the record sequence shown by the display operation: an optional
//! filter over position/skills followed by a stable sort.

use std::cmp::Ordering;

use crate::models::Employee;
use crate::storage::EmployeeStore;

/// The field a listing is ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Numeric salary order
    Salary,
    /// Lexicographic text order of the date field (not calendar-aware)
    EmploymentDate,
    /// Fallback: id order
    Id,
}

impl SortKey {
    /// Parse a sort-key keyword, case-insensitively
    ///
    /// Anything other than `salary` or `employment_date` falls back to id
    /// order.
    pub fn parse(keyword: &str) -> Self {
        match keyword.trim().to_lowercase().as_str() {
            "salary" => Self::Salary,
            "employment_date" => Self::EmploymentDate,
            _ => Self::Id,
        }
    }
}

/// Options for a listing
#[derive(Debug, Clone)]
pub struct ListingOptions {
    /// Filter text; empty passes every record. Matches a case-insensitive
    /// substring of the position OR an exact (case-insensitive) member of
    /// the skill set.
    pub filter: String,
    /// Field to order by
    pub sort_key: SortKey,
    /// Reverse the order, keeping ties in store order
    pub descending: bool,
}

impl ListingOptions {
    /// Create listing options
    pub fn new(filter: impl Into<String>, sort_key: SortKey, descending: bool) -> Self {
        Self {
            filter: filter.into(),
            sort_key,
            descending,
        }
    }
}

/// Filter and sort the store for display
///
/// The sort is stable in both directions: records that compare equal stay in
/// store order.
pub fn filter_and_sort<'a>(
    store: &'a EmployeeStore,
    options: &ListingOptions,
) -> Vec<&'a Employee> {
    let filter = options.filter.trim().to_lowercase();

    let mut rows: Vec<&Employee> = store
        .employees()
        .iter()
        .filter(|e| {
            filter.is_empty()
                || e.position.to_lowercase().contains(&filter)
                || e.has_skill(&filter)
        })
        .collect();

    let key = options.sort_key;
    let compare = move |a: &&Employee, b: &&Employee| -> Ordering {
        match key {
            SortKey::Salary => a.salary.cmp(&b.salary),
            SortKey::EmploymentDate => a.employment_date.cmp(&b.employment_date),
            SortKey::Id => a.id.cmp(&b.id),
        }
    };

    if options.descending {
        rows.sort_by(|a, b| compare(b, a));
    } else {
        rows.sort_by(compare);
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> EmployeeStore {
        let mut store = EmployeeStore::new();
        for (id, name, position, salary, skills, date) in [
            (1, "Alice", "Engineer", 5000, "python,go", "2021-01-15"),
            (2, "Bob", "Manager", 6000, "sales", "2020-05-01"),
            (3, "Carol", "Engineer", 4000, "python", "2022-07-20"),
        ] {
            store
                .add(Employee::new(
                    id,
                    name,
                    position,
                    salary,
                    Employee::parse_skill_list(skills),
                    date,
                ))
                .unwrap();
        }
        store
    }

    fn names(rows: &[&Employee]) -> Vec<String> {
        rows.iter().map(|e| e.name.clone()).collect()
    }

    #[test]
    fn test_empty_filter_passes_everything() {
        let store = store();
        let rows = filter_and_sort(&store, &ListingOptions::new("", SortKey::Id, false));
        assert_eq!(names(&rows), ["Alice", "Bob", "Carol"]);
    }

    #[test]
    fn test_filter_matches_position_substring() {
        let store = store();
        let rows = filter_and_sort(&store, &ListingOptions::new("eng", SortKey::Id, false));
        assert_eq!(names(&rows), ["Alice", "Carol"]);
    }

    #[test]
    fn test_filter_matches_exact_skill_membership() {
        let store = store();
        let rows = filter_and_sort(&store, &ListingOptions::new("SALES", SortKey::Id, false));
        assert_eq!(names(&rows), ["Bob"]);

        // skills never match on substring, and "pyth" is no position either
        let rows = filter_and_sort(&store, &ListingOptions::new("pyth", SortKey::Id, false));
        assert!(rows.is_empty());
    }

    #[test]
    fn test_sort_by_salary_both_directions() {
        let store = store();

        let rows = filter_and_sort(&store, &ListingOptions::new("", SortKey::Salary, false));
        let salaries: Vec<i64> = rows.iter().map(|e| e.salary).collect();
        assert_eq!(salaries, [4000, 5000, 6000]);

        let rows = filter_and_sort(&store, &ListingOptions::new("", SortKey::Salary, true));
        let salaries: Vec<i64> = rows.iter().map(|e| e.salary).collect();
        assert_eq!(salaries, [6000, 5000, 4000]);
    }

    #[test]
    fn test_sort_by_employment_date_is_lexicographic() {
        let store = store();
        let rows = filter_and_sort(
            &store,
            &ListingOptions::new("", SortKey::EmploymentDate, false),
        );
        assert_eq!(names(&rows), ["Bob", "Alice", "Carol"]);
    }

    #[test]
    fn test_unknown_sort_key_falls_back_to_id() {
        assert_eq!(SortKey::parse("seniority"), SortKey::Id);
        assert_eq!(SortKey::parse("SALARY"), SortKey::Salary);
        assert_eq!(SortKey::parse("employment_date"), SortKey::EmploymentDate);
    }

    #[test]
    fn test_ties_keep_store_order_in_both_directions() {
        let mut store = EmployeeStore::new();
        for (id, name) in [(1, "First"), (2, "Second"), (3, "Third")] {
            store
                .add(Employee::new(
                    id,
                    name,
                    "Engineer",
                    5000,
                    Employee::parse_skill_list("python"),
                    "2021-01-15",
                ))
                .unwrap();
        }

        let ascending = filter_and_sort(&store, &ListingOptions::new("", SortKey::Salary, false));
        assert_eq!(names(&ascending), ["First", "Second", "Third"]);

        let descending = filter_and_sort(&store, &ListingOptions::new("", SortKey::Salary, true));
        assert_eq!(names(&descending), ["First", "Second", "Third"]);
    }
}
