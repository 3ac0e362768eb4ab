//! Custom error types for the roster manager
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for roster operations
#[derive(Error, Debug)]
pub enum RosterError {
    /// Validation errors for user input (non-numeric fields, malformed dates)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// No records available for an aggregate operation
    #[error("No data: {0}")]
    NoData(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// CSV parsing/serialization errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Storage errors (atomic writes, file management)
    #[error("Storage error: {0}")]
    Storage(String),
}

impl RosterError {
    /// Create a "not found" error for employees
    pub fn employee_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Employee",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for files
    pub fn file_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "File",
            identifier: identifier.into(),
        }
    }

    /// Create a "duplicate id" error for employees
    pub fn duplicate_employee(id: i64) -> Self {
        Self::Duplicate {
            entity_type: "Employee",
            identifier: id.to_string(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a duplicate error
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a no-data condition
    pub fn is_no_data(&self) -> bool {
        matches!(self, Self::NoData(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for RosterError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for RosterError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for RosterError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

/// Result type alias for roster operations
pub type RosterResult<T> = Result<T, RosterError>;
