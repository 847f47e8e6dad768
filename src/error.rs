//! Per-line parse errors.
//!
//! File and argument errors travel as `Box<dyn Error>`; these are the recoverable
//! failures the matcher skips over one line at a time.

use crate::models::Family;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty input")]
    Empty,

    #[error("invalid IP address: {0}")]
    InvalidAddress(String),

    #[error("invalid prefix length {len} for {family} (max {max})")]
    InvalidPrefixLength { len: String, family: Family, max: u8 },

    #[error("invalid netmask: {0}")]
    InvalidNetmask(String),

    #[error("{prefix} is {found}, table expects {expected}")]
    FamilyMismatch {
        prefix: String,
        found: Family,
        expected: Family,
    },
}
