//! Matching logic.
//!
//! This module contains the business logic between the line source and the sink:
//! - [`matcher`] - Building the subnet tables and matching addresses
//! - [`sort`] - Numeric-aware output ordering

mod matcher;
mod sort;

// Re-export public functions
pub use matcher::{build, match_addresses};
pub use sort::{natural_key, sort_records, Digits, KeyPart};
