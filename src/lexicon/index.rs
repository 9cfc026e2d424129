use super::builder::{build_lexicon, IntoWord, LexiconBuilder};
use super::letter::Letter;
use super::node::{NodeId, NodeRef, TrieNode};

/// An immutable prefix tree over lowercase words.
///
/// The lexicon owns every node in a single arena; nodes refer to their children by
/// position. It is built once, by [`LexiconBuilder`] or [`build_lexicon`], and then
/// only read, so one lexicon can be shared by reference across any number of
/// concurrent searches.
///
/// # Examples
///
/// ```
/// use boggle_trie::lexicon::{build_lexicon, Letter};
///
/// let lexicon = build_lexicon(["bake", "baker", "cake"]);
/// let root = lexicon.root();
///
/// let b = Letter::from_char('b').unwrap();
/// let a = Letter::from_char('a').unwrap();
/// let ba = root.get(b).and_then(|n| n.get(a)).unwrap();
/// assert!(!ba.is_word());
/// assert_eq!(ba.child_count(), 1);
///
/// assert!(lexicon.contains("baker"));
/// assert!(lexicon.has_prefix("cak"));
/// assert!(!lexicon.has_prefix("cb"));
/// ```
#[derive(Clone, Debug)]
pub struct Lexicon {
    nodes: Vec<TrieNode>,
    word_count: usize,
    rejected: usize,
}

impl Lexicon {
    pub(crate) fn from_parts(nodes: Vec<TrieNode>, word_count: usize, rejected: usize) -> Self {
        debug_assert!(!nodes.is_empty(), "a lexicon always has a root");
        Lexicon {
            nodes,
            word_count,
            rejected,
        }
    }

    /// Returns a handle to the root node.
    ///
    /// Use [`get()`](NodeRef::get), [`is_word()`](NodeRef::is_word) and
    /// [`children()`](NodeRef::children) to traverse the trie.
    #[inline]
    pub fn root(&self) -> NodeRef<'_> {
        NodeRef::new(&self.nodes, NodeId::ROOT)
    }

    /// Follows `path` from the root. Returns `None` as soon as a character has no edge,
    /// including any character outside `a`-`z`.
    pub fn find(&self, path: &str) -> Option<NodeRef<'_>> {
        path.chars()
            .try_fold(self.root(), |node, ch| node.get(Letter::from_char(ch)?))
    }

    /// Returns true if some word in the lexicon starts with `prefix`.
    ///
    /// The empty prefix is a prefix of everything, even of an empty lexicon.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.find(prefix).is_some()
    }

    /// Returns true if `word` is in the lexicon.
    pub fn contains(&self, word: &str) -> bool {
        self.find(word).is_some_and(|n| n.is_word())
    }

    /// Number of distinct words.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Number of trie nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of vocabulary entries skipped during a bulk build for containing
    /// characters outside `a`-`z`.
    pub fn rejected(&self) -> usize {
        self.rejected
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Returns all words in alphabetical order.
    pub fn words(&self) -> Vec<String> {
        let mut words = Vec::with_capacity(self.word_count);
        let mut prefix = String::new();
        Self::collect_words(self.root(), &mut prefix, &mut words);
        words
    }

    fn collect_words(node: NodeRef<'_>, prefix: &mut String, words: &mut Vec<String>) {
        if node.is_word() {
            words.push(prefix.clone());
        }
        for (letter, child) in node.children() {
            prefix.push(letter.to_char());
            Self::collect_words(child, prefix, words);
            prefix.pop();
        }
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        LexiconBuilder::new().build()
    }
}

impl<W: IntoWord> FromIterator<W> for Lexicon {
    fn from_iter<T: IntoIterator<Item = W>>(iter: T) -> Self {
        build_lexicon(iter)
    }
}
