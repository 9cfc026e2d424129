use std::fmt;

use super::children::Children;
use super::letter::Letter;

/// Position of a node in the lexicon's node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// The root is always the first node allocated.
    pub(crate) const ROOT: NodeId = NodeId(0);

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// A node in the trie.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct TrieNode {
    pub(crate) children: Children,
    pub(crate) word: bool,
}

impl TrieNode {
    pub(crate) fn new(word: bool) -> Self {
        TrieNode {
            children: Children::None,
            word,
        }
    }

    /// A node that neither ends a word nor leads anywhere.
    pub(crate) fn is_dead(&self) -> bool {
        !self.word && self.children.is_empty()
    }
}

/// A borrowed handle to a node of a [`Lexicon`](super::Lexicon).
///
/// `NodeRef` is `Copy` and cheap to carry through a recursive walk: advancing it with
/// [`get`](NodeRef::get) is the prefix test, and [`is_word`](NodeRef::is_word) is the
/// membership test for the letters consumed so far.
#[derive(Clone, Copy)]
pub struct NodeRef<'l> {
    nodes: &'l [TrieNode],
    id: NodeId,
}

impl<'l> NodeRef<'l> {
    pub(crate) fn new(nodes: &'l [TrieNode], id: NodeId) -> Self {
        NodeRef { nodes, id }
    }

    #[inline]
    fn node(&self) -> &'l TrieNode {
        &self.nodes[self.id.index()]
    }

    /// Returns the node that letter's edge leads to, or None if no such edge exists.
    #[inline]
    pub fn get(self, letter: Letter) -> Option<NodeRef<'l>> {
        self.node()
            .children
            .find(letter)
            .map(|id| NodeRef::new(self.nodes, id))
    }

    /// True if this node corresponds to the end of a word.
    #[inline]
    pub fn is_word(self) -> bool {
        self.node().word
    }

    /// Follows `letters` from this node, returning where the walk ends.
    #[inline]
    pub fn walk<I: IntoIterator<Item = Letter>>(self, letters: I) -> Option<NodeRef<'l>> {
        letters.into_iter().try_fold(self, |node, letter| node.get(letter))
    }

    /// Returns an iterator over all children of this node, in alphabetical order.
    #[inline]
    pub fn children(self) -> ChildIter<'l> {
        ChildIter {
            node: self,
            index: 0,
        }
    }

    /// Returns the number of children.
    #[inline]
    pub fn child_count(self) -> usize {
        self.node().children.len()
    }

    /// The arena position of this node.
    #[inline]
    pub fn id(self) -> NodeId {
        self.id
    }
}

impl PartialEq for NodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.nodes, other.nodes) && self.id == other.id
    }
}

impl Eq for NodeRef<'_> {}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("word", &self.is_word())
            .field("children", &self.child_count())
            .finish()
    }
}

/// An iterator over the children of a node.
#[derive(Clone)]
pub struct ChildIter<'l> {
    node: NodeRef<'l>,
    index: usize,
}

impl<'l> Iterator for ChildIter<'l> {
    type Item = (Letter, NodeRef<'l>);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let (letter, id) = self.node.node().children.get(self.index)?;
        self.index += 1;
        Some((letter, NodeRef::new(self.node.nodes, id)))
    }

    /// Since we know the exact size, we can do better than the default implementation.
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.node.child_count().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ChildIter<'_> {}
