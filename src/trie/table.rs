//! One trie per address family behind a single lookup surface.

use super::prefix_trie::PrefixTrie;
use crate::error::ParseError;
use crate::models::{Address, Family, Prefix};

/// IPv4 and IPv6 prefixes, never mixed. Every call dispatches on the
/// argument's own family tag.
#[derive(Debug)]
pub struct SubnetTable {
    v4: PrefixTrie,
    v6: PrefixTrie,
}

impl Default for SubnetTable {
    fn default() -> Self {
        SubnetTable::new()
    }
}

impl SubnetTable {
    pub fn new() -> Self {
        SubnetTable {
            v4: PrefixTrie::new(Family::V4),
            v6: PrefixTrie::new(Family::V6),
        }
    }

    /// The trie holding prefixes of `family`.
    pub fn trie(&self, family: Family) -> &PrefixTrie {
        match family {
            Family::V4 => &self.v4,
            Family::V6 => &self.v6,
        }
    }

    fn trie_mut(&mut self, family: Family) -> &mut PrefixTrie {
        match family {
            Family::V4 => &mut self.v4,
            Family::V6 => &mut self.v6,
        }
    }

    pub fn insert(&mut self, prefix: Prefix) -> Result<(), ParseError> {
        self.trie_mut(prefix.family()).insert(prefix)
    }

    pub fn lookup(&self, addr: Address) -> Option<Prefix> {
        self.trie(addr.family()).lookup(addr)
    }

    pub fn contains(&self, addr: Address) -> bool {
        self.trie(addr.family()).contains(addr)
    }

    /// Total prefixes across both families.
    pub fn len(&self) -> usize {
        self.v4.len() + self.v6.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_isolation() {
        let mut table = SubnetTable::new();
        table.insert(Prefix::new("::/0").unwrap()).unwrap();
        table.insert(Prefix::new("10.0.0.0/8").unwrap()).unwrap();

        assert_eq!(table.trie(Family::V4).len(), 1);
        assert_eq!(table.trie(Family::V6).len(), 1);
        assert_eq!(table.len(), 2);

        // ::a00:1 has the same low bits as 10.0.0.1 but must only see the v6 trie
        let v6 = Address::new("::a00:1").unwrap();
        assert_eq!(table.lookup(v6).unwrap().to_string(), "::/0");

        assert!(!table.contains(Address::new("11.0.0.1").unwrap()));
        assert!(table.contains(Address::new("10.0.0.1").unwrap()));
    }

    #[test]
    fn test_v4_default_route_never_matches_v6() {
        let mut table = SubnetTable::new();
        table.insert(Prefix::new("0.0.0.0/0").unwrap()).unwrap();
        assert!(!table.contains(Address::new("2001:db8::1").unwrap()));
        assert!(table.contains(Address::new("1.2.3.4").unwrap()));
    }
}
