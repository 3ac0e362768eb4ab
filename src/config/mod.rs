//! Configuration for the roster manager
//!
//! Holds the resolved locations of the data files the application reads and
//! writes.

pub mod paths;

pub use paths::DataPaths;
