use super::letter::Letter;
use super::node::NodeId;

/// A compact representation of the children of a trie node that doesn't allocate until
/// there are at least three children.
///
/// Edges are kept sorted by letter, so iteration is alphabetical.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Children {
    /// No children.
    #[default]
    None,
    /// Exactly one child (letter, node).
    One((Letter, NodeId)),
    /// Exactly two children (letter1, node1, letter2, node2), `letter1 < letter2`.
    Two((Letter, NodeId, Letter, NodeId)),
    /// Three or more children stored in a vector.
    Many(Vec<(Letter, NodeId)>),
}

impl Children {
    /// Gets the child at the specified position.
    ///
    /// Returns `None` if the position is out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<(Letter, NodeId)> {
        match self {
            Children::None => None,
            Children::One(child) => match index {
                0 => Some(*child),
                _ => None,
            },
            Children::Two((c1, n1, c2, n2)) => match index {
                0 => Some((*c1, *n1)),
                1 => Some((*c2, *n2)),
                _ => None,
            },
            Children::Many(children) => children.get(index).copied(),
        }
    }

    /// Returns the node that `letter`'s edge leads to, or None if no such edge exists.
    #[inline]
    pub fn find(&self, letter: Letter) -> Option<NodeId> {
        match self {
            Children::None => None,
            Children::One((ch, node)) => (*ch == letter).then_some(*node),
            Children::Two((c1, n1, c2, n2)) => {
                if letter == *c1 {
                    Some(*n1)
                } else if letter == *c2 {
                    Some(*n2)
                } else {
                    None
                }
            }
            Children::Many(children) => {
                // Nodes near the root fan out to most of the alphabet; below that a
                // short linear scan wins, so unroll by 2 for load-level parallelism.
                let chunks = children.chunks_exact(2);
                let remainder = chunks.remainder();
                for chunk in chunks {
                    if chunk[0].0 == letter {
                        return Some(chunk[0].1);
                    }
                    if chunk[1].0 == letter {
                        return Some(chunk[1].1);
                    }
                }
                for &(ch, node) in remainder {
                    if ch == letter {
                        return Some(node);
                    }
                }
                None
            }
        }
    }

    /// Adds an edge in sorted position.
    ///
    /// The letter must not already be present.
    pub(crate) fn insert(&mut self, letter: Letter, child: NodeId) {
        debug_assert!(self.find(letter).is_none(), "insert: letter already exists");
        *self = match std::mem::take(self) {
            Children::None => Children::One((letter, child)),
            Children::One((c1, n1)) => {
                if letter < c1 {
                    Children::Two((letter, child, c1, n1))
                } else {
                    Children::Two((c1, n1, letter, child))
                }
            }
            Children::Two((c1, n1, c2, n2)) => {
                let mut v = vec![(c1, n1), (c2, n2), (letter, child)];
                v.sort_by_key(|&(c, _)| c);
                Children::Many(v)
            }
            Children::Many(mut children) => {
                let pos = children.partition_point(|&(c, _)| c < letter);
                children.insert(pos, (letter, child));
                Children::Many(children)
            }
        };
    }

    /// Returns the number of edges.
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            Children::None => 0,
            Children::One(_) => 1,
            Children::Two(_) => 2,
            Children::Many(children) => children.len(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Children::None)
    }
}
