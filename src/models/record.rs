//! Output unit pairing an address with the subnet it belongs to.

use super::{Address, Prefix};
use serde::Serialize;

/// One address and its most specific subnet, if any.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RelationshipRecord {
    /// Longest matching subnet (None if no subnet contains the address).
    pub subnet: Option<Prefix>,
    /// The queried address.
    #[serde(rename = "ip")]
    pub address: Address,
}

impl RelationshipRecord {
    pub fn new(subnet: Option<Prefix>, address: Address) -> Self {
        RelationshipRecord { subnet, address }
    }

    pub fn is_match(&self) -> bool {
        self.subnet.is_some()
    }
}

/// Renders the CSV line: `<subnet-or-empty>,<address>`.
impl std::fmt::Display for RelationshipRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match &self.subnet {
            Some(subnet) => write!(f, "{},{}", subnet, self.address),
            None => write!(f, ",{}", self.address),
        }
    }
}
