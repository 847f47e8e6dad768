//! Output for relationship records.
//!
//! This module handles writing the matched records:
//! - [`csv`] - The `Subnet,IP` CSV line sink
//! - [`json`] - JSON array output
//! - [`terminal`] - Run summary on the terminal

mod csv;
mod json;
mod terminal;

pub use csv::{write_csv, CSV_HEADER};
pub use json::write_json;
pub use terminal::{format_field, print_summary, RunSummary};
