/// Lexicon builder: incremental insertion and word-list loading.
pub mod builder;
/// Compact child-edge storage for trie nodes.
pub mod children;
/// Owned, immutable lexicon index.
pub mod index;
/// The `a`-`z` alphabet.
pub mod letter;
/// Trie nodes and borrowed node handles.
pub mod node;

pub use builder::{
    build_lexicon, build_lexicon_from_file, build_lexicon_from_reader, IntoWord, LexiconBuilder,
};
pub use index::Lexicon;
pub use letter::{Letter, ALPHABET_SIZE};
pub use node::{ChildIter, NodeId, NodeRef};
