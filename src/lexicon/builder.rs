use mark_last::MarkLastIterator;
use smallvec::SmallVec;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::index::Lexicon;
use super::letter::Letter;
use super::node::{NodeId, TrieNode};
use crate::errors::LexiconError;

/// Letters of a single vocabulary entry.
pub type Word = SmallVec<[Letter; 32]>;

/// Trait for types that can be inserted into a lexicon as a word.
///
/// Implemented for common string and letter-sequence types so that
/// [`LexiconBuilder::insert`] and [`build_lexicon`] accept them directly.
/// String conversion fails on the first symbol outside `a`-`z`.
pub trait IntoWord {
    /// Collects this word into a letter buffer.
    fn collect_word(self) -> Result<Word, LexiconError>;
}

fn letters_of(word: &str) -> Result<Word, LexiconError> {
    word.chars()
        .map(|ch| {
            Letter::from_char(ch).ok_or_else(|| LexiconError::InvalidSymbol {
                word: word.to_string(),
                symbol: ch,
            })
        })
        .collect()
}

// String types → Letter

impl IntoWord for &str {
    fn collect_word(self) -> Result<Word, LexiconError> {
        letters_of(self)
    }
}

impl IntoWord for &&str {
    fn collect_word(self) -> Result<Word, LexiconError> {
        letters_of(self)
    }
}

impl IntoWord for String {
    fn collect_word(self) -> Result<Word, LexiconError> {
        letters_of(&self)
    }
}

impl IntoWord for &String {
    fn collect_word(self) -> Result<Word, LexiconError> {
        letters_of(self)
    }
}

// Letter sequences are valid by construction

impl IntoWord for &[Letter] {
    fn collect_word(self) -> Result<Word, LexiconError> {
        Ok(self.iter().copied().collect())
    }
}

impl IntoWord for Vec<Letter> {
    fn collect_word(self) -> Result<Word, LexiconError> {
        Ok(self.into_iter().collect())
    }
}

impl<const N: usize> IntoWord for [Letter; N] {
    fn collect_word(self) -> Result<Word, LexiconError> {
        Ok(self.into_iter().collect())
    }
}

/// A builder for constructing a [`Lexicon`] one word at a time.
///
/// Words may be inserted in any order and may repeat. Once [`build`](LexiconBuilder::build)
/// is called the resulting lexicon is immutable.
#[derive(Debug)]
pub struct LexiconBuilder {
    nodes: Vec<TrieNode>,
    word_count: usize,
    rejected: usize,
}

impl Default for LexiconBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconBuilder {
    /// Creates a builder holding only the root node.
    pub fn new() -> Self {
        LexiconBuilder {
            nodes: vec![TrieNode::new(false)],
            word_count: 0,
            rejected: 0,
        }
    }

    /// Adds a word to the lexicon being constructed.
    ///
    /// Returns `Ok(true)` if the word was new, `Ok(false)` if it was already present or
    /// empty. An empty word is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `LexiconError::InvalidSymbol` if the word contains anything other than
    /// lowercase `a`-`z`. The lexicon is left untouched in that case.
    pub fn insert(&mut self, word: impl IntoWord) -> Result<bool, LexiconError> {
        let word = word.collect_word()?;
        Ok(self.insert_letters(&word))
    }

    /// Adds a word, counting and skipping it instead of failing if it is invalid.
    pub(crate) fn insert_or_skip(&mut self, word: impl IntoWord) -> bool {
        match self.insert(word) {
            Ok(added) => added,
            Err(e) => {
                log::debug!("Skipping vocabulary entry: {e}");
                self.rejected += 1;
                false
            }
        }
    }

    fn insert_letters(&mut self, word: &[Letter]) -> bool {
        if word.is_empty() {
            return false;
        }
        let (prefix_len, mut current) = self.common_prefix(word);
        if prefix_len == word.len() {
            let node = &mut self.nodes[current.index()];
            if node.word {
                return false;
            }
            node.word = true;
        } else {
            // Only the last node of a fresh branch ends a word, so no node created here
            // is ever left dead.
            for (last, letter) in word[prefix_len..].iter().copied().mark_last() {
                let child = self.alloc(TrieNode::new(last));
                self.nodes[current.index()].children.insert(letter, child);
                current = child;
            }
        }
        self.word_count += 1;
        true
    }

    /// Length of the longest prefix of `word` already in the trie, and the node it ends on.
    fn common_prefix(&self, word: &[Letter]) -> (usize, NodeId) {
        let mut current = NodeId::ROOT;
        for (i, &letter) in word.iter().enumerate() {
            match self.nodes[current.index()].children.find(letter) {
                Some(child) => current = child,
                None => return (i, current),
            }
        }
        (word.len(), current)
    }

    fn alloc(&mut self, node: TrieNode) -> NodeId {
        let id = u32::try_from(self.nodes.len()).expect("lexicon node count overflow");
        self.nodes.push(node);
        NodeId(id)
    }

    /// Number of distinct words inserted so far.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Finalizes construction and returns the immutable lexicon.
    pub fn build(self) -> Lexicon {
        debug_assert!(
            self.nodes[1..].iter().all(|n| !n.is_dead()),
            "only the root may be a dead node"
        );
        log::debug!(
            "Built lexicon: {} words, {} nodes, {} rejected",
            self.word_count,
            self.nodes.len(),
            self.rejected
        );
        Lexicon::from_parts(self.nodes, self.word_count, self.rejected)
    }
}

/// Builds a lexicon from an iterator of words.
///
/// Words may come in any order. Empty entries are ignored, and entries containing
/// anything other than lowercase `a`-`z` are skipped and counted in
/// [`Lexicon::rejected`].
///
/// # Examples
///
/// ```
/// use boggle_trie::lexicon::build_lexicon;
///
/// let lexicon = build_lexicon(["cat", "cats", "don't", "", "at"]);
/// assert!(lexicon.contains("cats"));
/// assert!(lexicon.has_prefix("ca"));
/// assert!(!lexicon.contains("ca"));
/// assert_eq!(lexicon.word_count(), 3);
/// assert_eq!(lexicon.rejected(), 1);
/// ```
pub fn build_lexicon<W: IntoWord>(words: impl IntoIterator<Item = W>) -> Lexicon {
    let mut builder = LexiconBuilder::new();
    for word in words {
        builder.insert_or_skip(word);
    }
    if builder.rejected > 0 {
        log::info!(
            "Skipped {} vocabulary entries with characters outside a-z",
            builder.rejected
        );
    }
    builder.build()
}

/// Builds a lexicon from a word list read line by line.
///
/// One word per line. Surrounding whitespace is trimmed and ASCII letters are
/// lowercased. Blank lines and lines starting with '#' are skipped; entries with other
/// symbols are skipped and counted as rejected.
pub fn build_lexicon_from_reader<R: BufRead>(mut reader: R) -> Result<Lexicon, LexiconError> {
    let mut builder = LexiconBuilder::new();

    // Reuse one line buffer instead of allocating a string per line.
    let mut buf = String::with_capacity(80);
    loop {
        if reader.read_line(&mut buf)? == 0 {
            break;
        }
        let word = buf.trim();
        if !word.is_empty() && !is_comment(word) {
            builder.insert_or_skip(word.to_ascii_lowercase());
        }
        buf.clear();
    }
    if builder.rejected > 0 {
        log::info!(
            "Skipped {} word-list entries with characters outside a-z",
            builder.rejected
        );
    }
    Ok(builder.build())
}

/// Builds a lexicon from a word-list file. See [`build_lexicon_from_reader`].
///
/// # Examples
///
/// ```no_run
/// use boggle_trie::lexicon::build_lexicon_from_file;
///
/// let lexicon = build_lexicon_from_file("words.txt").unwrap();
/// ```
pub fn build_lexicon_from_file<P: AsRef<Path>>(path: P) -> Result<Lexicon, LexiconError> {
    let path = path.as_ref();
    log::debug!("Loading word list from {}", path.display());
    let file = File::open(path)?;
    build_lexicon_from_reader(BufReader::new(file))
}

/// Returns true if this line is a comment.
pub(crate) fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with('#')
}
