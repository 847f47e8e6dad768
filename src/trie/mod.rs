//! Longest-prefix-match lookup structures.
//!
//! - [`PrefixTrie`] - binary trie over the address bits of one family
//! - [`SubnetTable`] - an IPv4 and an IPv6 trie, dispatched by family

mod node;
mod prefix_trie;
mod table;

pub use prefix_trie::PrefixTrie;
pub use table::SubnetTable;
