//! Trie node: one branch point per address bit.

use crate::models::Prefix;

/// A node exclusively owns its two children; bit 0 goes left, bit 1 goes right.
#[derive(Debug, Default)]
pub(crate) struct Node {
    /// Set only when an inserted prefix terminates exactly at this node.
    pub(crate) prefix: Option<Prefix>,
    children: [Option<Box<Node>>; 2],
}

impl Node {
    pub(crate) fn child(&self, bit: bool) -> Option<&Node> {
        self.children[bit as usize].as_deref()
    }

    /// Child along `bit`, created on demand. Returns whether a new node was made.
    pub(crate) fn child_or_insert(&mut self, bit: bool) -> (&mut Box<Node>, bool) {
        let slot = &mut self.children[bit as usize];
        let created = slot.is_none();
        (slot.get_or_insert_with(Box::default), created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_or_insert() {
        let mut node = Node::default();
        assert!(node.child(false).is_none());
        let (_, created) = node.child_or_insert(false);
        assert!(created);
        let (_, created) = node.child_or_insert(false);
        assert!(!created);
        assert!(node.child(false).is_some());
        assert!(node.child(true).is_none());
    }
}
