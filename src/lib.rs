//! # boggle-trie
//!
//! Finds every dictionary word on a square [Boggle](https://en.wikipedia.org/wiki/Boggle)
//! board: words traced through 8-directionally adjacent cells, never using a cell twice
//! in the same word.
//!
//! The dictionary is encoded once as a trie ([`Lexicon`](lexicon::Lexicon)). The search
//! walks the board depth-first from every cell and walks the trie in step with it, so a
//! path is abandoned as soon as the letters spelled so far stop being a prefix of any
//! word. This keeps the search from exploring the combinatorial blow-up of all paths on
//! the board.
//!
//! ## Features
//!
//! - **Any square size**: 4×4 by default, any N×N on request
//! - **Multi-letter tiles**: cells such as `Qu` contribute all their letters
//! - **Reusable index**: build the [`Lexicon`](lexicon::Lexicon) once, share it by
//!   reference across boards and threads
//! - **Parallel batches**: [`par_search_all`](search::par_search_all) with the default
//!   `parallel` feature
//!
//! ## Quick Start
//!
//! ```
//! use boggle_trie::board::Board;
//! use boggle_trie::lexicon::build_lexicon;
//! use boggle_trie::search::search;
//!
//! let lexicon = build_lexicon(["cat", "cats", "at", "ta", "bob"]);
//! let board: Board = "catsxxxxxxxxxxxx".parse().unwrap();
//!
//! let found = search(&board, &lexicon, 16);
//! assert_eq!(found, ["cats", "cat", "at", "ta"]);
//! ```
//!
//! Results are deduplicated and ranked: longer words first, equal lengths in
//! alphabetical order.
//!
//! ## Input Policy
//!
//! The alphabet is lowercase `a`-`z`. Vocabulary entries with any other character are
//! rejected when the lexicon is built. Board cells are case-folded; a cell that still
//! holds something outside the alphabet is kept but can never be part of a word.

/// Square letter grids, parsing and adjacency.
pub mod board;
/// Error types and their codes.
pub mod errors;
/// Trie-based dictionary index.
pub mod lexicon;
/// Logger setup for the command line.
pub mod log;
/// Prefix-pruned board search.
pub mod search;

pub use board::Board;
pub use errors::{BoardError, Error, LexiconError};
pub use lexicon::{build_lexicon, Lexicon};
pub use search::{search, Search};
