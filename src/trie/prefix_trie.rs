//! Binary prefix trie for longest-prefix-match lookups within one address family.

use super::node::Node;
use crate::error::ParseError;
use crate::models::{Address, Family, Prefix};

/// Stores prefixes of a single family keyed on their address bits.
#[derive(Debug)]
pub struct PrefixTrie {
    family: Family,
    root: Option<Box<Node>>,
    prefix_count: usize,
    node_count: usize,
}

impl PrefixTrie {
    pub fn new(family: Family) -> Self {
        PrefixTrie {
            family,
            root: None,
            prefix_count: 0,
            node_count: 0,
        }
    }

    /// Number of distinct prefixes stored.
    pub fn len(&self) -> usize {
        self.prefix_count
    }

    pub fn is_empty(&self) -> bool {
        self.prefix_count == 0
    }

    /// Number of nodes allocated, root included.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Insert a prefix, walking one node per prefix bit from the root.
    ///
    /// Re-inserting an identical prefix overwrites the stored value and leaves the
    /// trie unchanged otherwise.
    pub fn insert(&mut self, prefix: Prefix) -> Result<(), ParseError> {
        if prefix.family() != self.family {
            return Err(ParseError::FamilyMismatch {
                prefix: prefix.to_string(),
                found: prefix.family(),
                expected: self.family,
            });
        }
        if self.root.is_none() {
            self.node_count += 1;
        }
        let mut node = self.root.get_or_insert_with(Box::default);
        let network = prefix.network();
        for depth in 0..prefix.prefix_len() {
            let (child, created) = node.child_or_insert(network.bit(depth));
            if created {
                self.node_count += 1;
            }
            node = child;
        }
        if node.prefix.replace(prefix).is_none() {
            self.prefix_count += 1;
        }
        log::trace!("inserted {prefix}");
        Ok(())
    }

    /// Longest stored prefix containing `addr`, or None.
    ///
    /// Every prefix met on the way down is a candidate; the deepest one wins.
    pub fn lookup(&self, addr: Address) -> Option<Prefix> {
        if addr.family() != self.family {
            return None;
        }
        let mut node = self.root.as_deref()?;
        let mut best = node.prefix;
        let width = self.family.max_length();
        for depth in 0..width {
            match node.child(addr.bit(depth)) {
                Some(child) => node = child,
                None => break,
            }
            if node.prefix.is_some() {
                best = node.prefix;
            }
        }
        best
    }

    pub fn contains(&self, addr: Address) -> bool {
        self.lookup(addr).is_some()
    }
}
