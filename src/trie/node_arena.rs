//! Index-based storage for trie nodes.
//!
//! Nodes are only ever appended, so a [`NodeId`] stays valid for the lifetime
//! of the arena. Dropping the arena frees every node in one pass regardless of
//! how deep the trie is.

use std::ops::{Index, IndexMut};

use super::char_trait::TrieChar;
use super::children::TrieNode;

/// Handle to a node stored in a [`NodeArena`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

/// The root is always the first node allocated.
pub(crate) const ROOT: NodeId = NodeId(0);

/// Append-only arena of trie nodes.
#[derive(Clone, Debug)]
pub(crate) struct NodeArena<C: TrieChar> {
    nodes: Vec<TrieNode<C>>,
}

impl<C: TrieChar> NodeArena<C> {
    /// Creates an arena holding only an empty root node.
    pub fn new() -> Self {
        NodeArena {
            nodes: vec![TrieNode::new()],
        }
    }

    /// Allocates an empty node and returns its handle.
    pub fn alloc(&mut self) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(TrieNode::new());
        id
    }

    /// Returns the number of nodes allocated in this arena, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }
}

impl<C: TrieChar> Index<NodeId> for NodeArena<C> {
    type Output = TrieNode<C>;

    #[inline]
    fn index(&self, id: NodeId) -> &TrieNode<C> {
        &self.nodes[id.0]
    }
}

impl<C: TrieChar> IndexMut<NodeId> for NodeArena<C> {
    #[inline]
    fn index_mut(&mut self, id: NodeId) -> &mut TrieNode<C> {
        &mut self.nodes[id.0]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn new_arena_has_root() {
        let arena = NodeArena::<char>::new();
        assert_eq!(arena.len(), 1);
        assert_eq!(arena[ROOT].child_count(), 0);
    }

    #[test]
    fn alloc_returns_fresh_handles() {
        let mut arena = NodeArena::<u8>::new();
        let a = arena.alloc();
        let b = arena.alloc();
        assert_ne!(a, ROOT);
        assert_ne!(a, b);
        assert_eq!(arena.len(), 3);

        arena[ROOT].insert(b'x', a);
        arena[a].insert(b'y', b);
        assert_eq!(arena[ROOT].get(b'x'), Some(a));
        assert_eq!(arena[a].get(b'y'), Some(b));
        assert_eq!(arena[b].get(b'y'), None);
    }
}
