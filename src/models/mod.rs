//! Domain models for address-to-subnet matching.
//!
//! This module contains the core data structures used throughout the application:
//! - [`Address`] - A single host tagged with its [`Family`]
//! - [`Prefix`] - A canonical CIDR subnet, IPv4 or IPv6
//! - [`RelationshipRecord`] - An address paired with its matched subnet

mod address;
mod prefix;
mod record;

// Re-export public types
pub use address::{Address, Family, MAX_LENGTH_V4, MAX_LENGTH_V6};
pub use prefix::{cut_addr, get_cidr_mask, mask_to_len, Prefix};
pub use record::RelationshipRecord;
