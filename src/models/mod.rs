//! Core data models for the roster manager
//!
//! This module contains the data structures that represent the employee
//! domain.

pub mod employee;

pub use employee::{Employee, EMPLOYMENT_DATE_FORMAT};
