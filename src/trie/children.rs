use std::fmt;

use super::char_trait::TrieChar;
use super::node_arena::{NodeArena, NodeId};

/// A compact representation of the children of a trie node that doesn't
/// allocate until there are at least two children.
///
/// Children are always sorted by label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Children<C: TrieChar> {
    /// No children.
    None,
    /// Exactly one child (letter, node).
    One((C, NodeId)),
    /// Two or more children stored in a vector, sorted by letter.
    Many(Vec<(C, NodeId)>),
}

impl<C: TrieChar> Children<C> {
    /// Gets the child at the specified index in label order.
    ///
    /// Returns `None` if the index is out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<(C, NodeId)> {
        match self {
            Children::None => None,
            Children::One(child) => (index == 0).then_some(*child),
            Children::Many(children) => children.get(index).copied(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        match self {
            Children::None => 0,
            Children::One(_) => 1,
            Children::Many(children) => children.len(),
        }
    }
}

/// A node in the trie.
///
/// The node does not know its own label; that lives on the parent's edge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct TrieNode<C: TrieChar> {
    children: Children<C>,
    accepting: bool,
}

impl<C: TrieChar> TrieNode<C> {
    pub fn new() -> Self {
        TrieNode {
            children: Children::None,
            accepting: false,
        }
    }

    /// Returns the node that letter's edge leads to, or None if no such edge exists.
    #[inline]
    pub fn get(&self, letter: C) -> Option<NodeId> {
        match &self.children {
            Children::None => None,
            Children::One((ch, node)) => (*ch == letter).then_some(*node),
            Children::Many(children) => children
                .binary_search_by_key(&letter, |&(ch, _)| ch)
                .ok()
                .map(|i| children[i].1),
        }
    }

    /// Inserts a child edge, keeping the children sorted.
    pub fn insert(&mut self, letter: C, child: NodeId) {
        debug_assert!(self.get(letter).is_none(), "insert: letter already exists");
        let c = (letter, child);
        match &mut self.children {
            Children::None => self.children = Children::One(c),
            Children::One(c1) => {
                let v = if letter < c1.0 { vec![c, *c1] } else { vec![*c1, c] };
                self.children = Children::Many(v);
            }
            Children::Many(children) => {
                let pos = children.partition_point(|&(ch, _)| ch < letter);
                children.insert(pos, c);
            }
        }
    }

    #[inline]
    pub fn children(&self) -> &Children<C> {
        &self.children
    }

    #[inline]
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// True if an inserted word ends at this node.
    #[inline]
    pub fn is_accepting(&self) -> bool {
        self.accepting
    }

    /// Marks this node as the end of a word. Returns false if it already was.
    pub fn set_accepting(&mut self) -> bool {
        !std::mem::replace(&mut self.accepting, true)
    }
}

/// A read-only view of a node inside a [`TrieAccumulator`](super::TrieAccumulator).
pub struct NodeRef<'t, C: TrieChar> {
    arena: &'t NodeArena<C>,
    id: NodeId,
}

impl<'t, C: TrieChar> NodeRef<'t, C> {
    pub(crate) fn new(arena: &'t NodeArena<C>, id: NodeId) -> Self {
        NodeRef { arena, id }
    }

    #[inline]
    fn node(&self) -> &'t TrieNode<C> {
        &self.arena[self.id]
    }

    /// Returns the node that letter's edge leads to, or None if no such edge exists.
    #[inline]
    pub fn get(&self, letter: C) -> Option<NodeRef<'t, C>> {
        self.node()
            .get(letter)
            .map(|id| NodeRef::new(self.arena, id))
    }

    /// True if some inserted word ends at this node.
    ///
    /// A node can be accepting and still have children, when one inserted
    /// word is a proper prefix of another.
    #[inline]
    pub fn is_accepting(&self) -> bool {
        self.node().is_accepting()
    }

    /// Returns an iterator over all children of this node, sorted by label.
    #[inline]
    pub fn children(&self) -> ChildIter<'t, C> {
        ChildIter {
            node: *self,
            index: Some(0),
        }
    }

    /// Returns the number of children.
    #[inline]
    pub fn child_count(&self) -> usize {
        self.node().child_count()
    }
}

impl<C: TrieChar> Clone for NodeRef<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: TrieChar> Copy for NodeRef<'_, C> {}

// Two views are equal when they point at the same node of the same trie.
impl<C: TrieChar> PartialEq for NodeRef<'_, C> {
    fn eq(&self, rhs: &Self) -> bool {
        std::ptr::eq(self.arena, rhs.arena) && self.id == rhs.id
    }
}

impl<C: TrieChar> Eq for NodeRef<'_, C> {}

impl<C: TrieChar> fmt::Debug for NodeRef<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letters: Vec<C> = self.children().map(|(ch, _)| ch).collect();
        f.debug_struct("NodeRef")
            .field("accepting", &self.is_accepting())
            .field("children", &letters)
            .finish()
    }
}

/// An iterator over the children of a trie node.
#[derive(Clone)]
pub struct ChildIter<'t, C: TrieChar> {
    node: NodeRef<'t, C>,
    index: Option<usize>,
}

impl<'t, C: TrieChar> Iterator for ChildIter<'t, C> {
    type Item = (C, NodeRef<'t, C>);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let index = self.index?;
        let next_child = self.node.node().children().get(index);
        self.index = if next_child.is_some() {
            index.checked_add(1)
        } else {
            None
        };
        next_child.map(|(ch, id)| (ch, NodeRef::new(self.node.arena, id)))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match self.index {
            Some(i) => self.node.child_count().saturating_sub(i),
            None => 0,
        };
        (remaining, Some(remaining))
    }
}

impl<C: TrieChar> ExactSizeIterator for ChildIter<'_, C> {}

#[cfg(test)]
mod test {
    use super::*;
    use crate::trie::node_arena::ROOT;

    fn ids(n: usize) -> (NodeArena<char>, Vec<NodeId>) {
        let mut arena = NodeArena::new();
        let ids = (0..n).map(|_| arena.alloc()).collect();
        (arena, ids)
    }

    #[test]
    fn no_children() {
        let n = TrieNode::<char>::new();
        assert_eq!(n.children().get(0), None);
        assert_eq!(n.child_count(), 0);
        assert_eq!(n.get('a'), None);
    }

    #[test]
    fn one_child() {
        let (_, ids) = ids(1);
        let mut n = TrieNode::new();
        n.insert('a', ids[0]);
        assert_eq!(n.children().get(0), Some(('a', ids[0])));
        assert_eq!(n.children().get(1), None);
        assert_eq!(n.get('a'), Some(ids[0]));
        assert_eq!(n.get('b'), None);
        assert_eq!(n.child_count(), 1);
    }

    #[test]
    fn children_are_sorted_whatever_the_insert_order() {
        let (_, ids) = ids(3);
        let mut n = TrieNode::new();
        n.insert('c', ids[0]);
        n.insert('a', ids[1]);
        n.insert('b', ids[2]);
        assert_eq!(n.children().get(0), Some(('a', ids[1])));
        assert_eq!(n.children().get(1), Some(('b', ids[2])));
        assert_eq!(n.children().get(2), Some(('c', ids[0])));
        assert_eq!(n.children().get(3), None);
        assert_eq!(n.get('b'), Some(ids[2]));
        assert_eq!(n.child_count(), 3);
    }

    #[test]
    fn a_thousand_children() {
        let mut arena = NodeArena::<char>::new();
        let letters: Vec<char> = (0..).filter_map(std::char::from_u32).take(1000).collect();
        // Insert in reverse to exercise sorted insertion.
        let mut n = TrieNode::new();
        for &ch in letters.iter().rev() {
            n.insert(ch, arena.alloc());
        }
        assert_eq!(n.child_count(), 1000);
        for (i, &ch) in letters.iter().enumerate() {
            assert_eq!(n.children().get(i).map(|(c, _)| c), Some(ch));
            assert!(n.get(ch).is_some());
        }
    }

    #[test]
    fn set_accepting_reports_first_time() {
        let mut n = TrieNode::<u8>::new();
        assert!(!n.is_accepting());
        assert!(n.set_accepting());
        assert!(!n.set_accepting());
        assert!(n.is_accepting());
    }

    #[test]
    fn child_iter_walks_in_label_order() {
        let mut arena = NodeArena::<char>::new();
        let z = arena.alloc();
        let a = arena.alloc();
        arena[ROOT].insert('z', z);
        arena[ROOT].insert('a', a);
        let root = NodeRef::new(&arena, ROOT);

        let mut children = root.children();
        assert_eq!(children.len(), 2);
        assert_eq!(children.next(), Some(('a', NodeRef::new(&arena, a))));
        assert_eq!(children.len(), 1);
        assert_eq!(children.next(), Some(('z', NodeRef::new(&arena, z))));
        assert_eq!(children.next(), None);
        assert_eq!(children.next(), None);
        assert_eq!(root.get('a'), Some(NodeRef::new(&arena, a)));
        assert_eq!(root.get('q'), None);
    }
}
