//! Prefix-pruned board search.
//!
//! Every cell starts a depth-first walk over the board. The walk carries a
//! [`NodeRef`] into the lexicon alongside the board path, so each step is a single
//! child lookup: if the letters spelled so far are not a prefix of any word the branch
//! is abandoned immediately. Cells are marked visited only while they are on the
//! active path and are released on backtrack.
//!
//! ```
//! use boggle_trie::board::Board;
//! use boggle_trie::lexicon::build_lexicon;
//! use boggle_trie::search::search;
//!
//! let lexicon = build_lexicon(["cat", "cats", "at", "ta"]);
//! let board: Board = "catsxxxxxxxxxxxx".parse().unwrap();
//! assert_eq!(search(&board, &lexicon, 16), ["cats", "cat", "at", "ta"]);
//! ```

/// Running many boards against one lexicon.
pub mod batch;
/// Ordering of search results.
pub mod rank;

use hashbrown::HashSet;
use smallvec::SmallVec;

use crate::board::Board;
use crate::errors::BoardError;
use crate::lexicon::{Letter, Lexicon, NodeRef};

pub use batch::search_all;
#[cfg(feature = "parallel")]
pub use batch::par_search_all;
pub use rank::{compare_ranked, is_ranked, rank};

/// A reusable search against one lexicon.
///
/// `Search` holds no per-board state, so a single value can run any number of boards,
/// one after another or from several threads at once.
#[derive(Clone, Copy, Debug)]
pub struct Search<'l> {
    lexicon: &'l Lexicon,
    max_word_length: Option<usize>,
}

impl<'l> Search<'l> {
    /// A search with the default length cap: the number of cells on the board.
    pub fn new(lexicon: &'l Lexicon) -> Self {
        Search {
            lexicon,
            max_word_length: None,
        }
    }

    /// Caps the number of letters in a found word.
    pub fn max_word_length(mut self, max_word_length: usize) -> Self {
        self.max_word_length = Some(max_word_length);
        self
    }

    pub fn lexicon(&self) -> &'l Lexicon {
        self.lexicon
    }

    /// Length cap that applies to `board`.
    pub fn word_length_cap(&self, board: &Board) -> usize {
        self.max_word_length.unwrap_or(board.len())
    }

    /// Finds every lexicon word traceable on `board`, deduplicated and ranked.
    pub fn run(&self, board: &Board) -> Vec<String> {
        let mut walker = Walker::new(board, self.word_length_cap(board));
        let root = self.lexicon.root();
        for cell in 0..board.len() {
            debug_assert!(walker.visited.iter().all(|v| !v), "visited must be clear per start");
            walker.visit(cell, root);
        }
        log::trace!(
            "Board searched: {} distinct words, {} cells visited",
            walker.found.len(),
            walker.steps
        );
        rank(walker.found)
    }
}

/// Searches `board` for every word in `lexicon` of at most `max_word_length` letters.
///
/// The result holds each word once, longest first and then alphabetical.
pub fn search(board: &Board, lexicon: &Lexicon, max_word_length: usize) -> Vec<String> {
    Search::new(lexicon).max_word_length(max_word_length).run(board)
}

/// Validates raw row-major cells as a `dimension × dimension` board and searches it.
///
/// # Errors
///
/// Returns a [`BoardError`] before any search work if the cell count is not
/// `dimension²`.
pub fn solve_cells<S: AsRef<str>>(
    cells: &[S],
    dimension: usize,
    lexicon: &Lexicon,
    max_word_length: usize,
) -> Result<Vec<String>, BoardError> {
    let board = Board::new(cells, dimension)?;
    Ok(search(&board, lexicon, max_word_length))
}

/// Search state for one board: the active path and the words found so far.
struct Walker<'b> {
    board: &'b Board,
    max_len: usize,
    visited: Vec<bool>,
    path: SmallVec<[Letter; 32]>,
    found: HashSet<String>,
    steps: usize,
}

impl<'b> Walker<'b> {
    fn new(board: &'b Board, max_len: usize) -> Self {
        Walker {
            board,
            max_len,
            visited: vec![false; board.len()],
            path: SmallVec::new(),
            found: HashSet::new(),
            steps: 0,
        }
    }

    /// Extends the active path with `cell`, whose predecessor left the trie at `node`.
    fn visit(&mut self, cell: usize, node: NodeRef<'_>) {
        let board = self.board;
        let tile = board.tile_at(cell);
        if tile.is_unmatchable() || self.path.len() + tile.letters().len() > self.max_len {
            return;
        }
        let Some(node) = node.walk(tile.letters().iter().copied()) else {
            return;
        };
        self.steps += 1;

        let prev_len = self.path.len();
        self.visited[cell] = true;
        self.path.extend_from_slice(tile.letters());

        if node.is_word() {
            self.found.insert(self.path.iter().map(|l| l.to_char()).collect());
        }
        if self.path.len() < self.max_len {
            for next in board.neighbors(cell) {
                if !self.visited[next] {
                    self.visit(next, node);
                }
            }
        }

        self.path.truncate(prev_len);
        self.visited[cell] = false;
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::lexicon::build_lexicon;
    use pretty_assertions::assert_eq;

    fn board(text: &str) -> Board {
        text.parse().unwrap()
    }

    #[test]
    fn cats_example() {
        let lexicon = build_lexicon(["cat", "cats", "at", "ta"]);
        let found = search(&board("catsxxxxxxxxxxxx"), &lexicon, 16);
        assert_eq!(found, vec!["cats", "cat", "at", "ta"]);
    }

    #[test]
    fn missing_letter_finds_nothing() {
        let lexicon = build_lexicon(["bob"]);
        let found = search(&board("catsxxxxxxxxxxxx"), &lexicon, 16);
        assert!(found.is_empty());
    }

    #[test]
    fn cell_is_not_reused_within_a_path() {
        // One 'b' and one 'o': "bob" needs the 'b' twice.
        let lexicon = build_lexicon(["bob", "bo", "ob"]);
        let found = search(&board("boxxxxxxxxxxxxxx"), &lexicon, 16);
        assert_eq!(found, vec!["bo", "ob"]);
    }

    #[test]
    fn cells_are_released_on_backtrack() {
        // "abc" along the top row and "dbe" through the same 'b' via another route.
        let lexicon = build_lexicon(["abc", "dbe", "ab", "cb"]);
        let found = search(&Board::parse("a b c d e x x x x", 3).unwrap(), &lexicon, 9);
        assert_eq!(found, vec!["abc", "dbe", "ab", "cb"]);
    }

    #[test]
    fn diagonal_adjacency() {
        // a . .
        // . b .
        // . . c
        let lexicon = build_lexicon(["abc", "cba", "ac"]);
        let found = search(&Board::parse("a x x x b x x x c", 3).unwrap(), &lexicon, 9);
        assert_eq!(found, vec!["abc", "cba"]);
    }

    #[test]
    fn duplicate_paths_reported_once() {
        let lexicon = build_lexicon(["aa", "aaa"]);
        let found = search(&board("aaaaaaaaaaaaaaaa"), &lexicon, 16);
        assert_eq!(found, vec!["aaa", "aa"]);
    }

    #[test]
    fn length_cap_limits_words() {
        let lexicon = build_lexicon(["cat", "cats", "at"]);
        let b = board("catsxxxxxxxxxxxx");
        assert_eq!(search(&b, &lexicon, 3), vec!["cat", "at"]);
        assert_eq!(search(&b, &lexicon, 2), vec!["at"]);
        assert!(search(&b, &lexicon, 1).is_empty());
        assert!(search(&b, &lexicon, 0).is_empty());
    }

    #[test]
    fn default_cap_is_cell_count() {
        let lexicon = build_lexicon(["abcd", "abc"]);
        let b = Board::parse("a b d c", 2).unwrap();
        let search = Search::new(&lexicon);
        assert_eq!(search.word_length_cap(&b), 4);
        // a b
        // d c
        assert_eq!(search.run(&b), vec!["abcd", "abc"]);
        assert_eq!(search.max_word_length(3).run(&b), vec!["abc"]);
    }

    #[test]
    fn multi_letter_tiles() {
        let lexicon = build_lexicon(["queen", "quit", "qi", "que"]);
        // Qu i t
        // e  e x
        // x  n x
        let b = Board::parse("qu i t e e x x n x", 3).unwrap();
        assert_eq!(search(&b, &lexicon, 9), vec!["queen", "quit", "que"]);
        // "queen" is five letters even though it uses four cells.
        assert_eq!(search(&b, &lexicon, 4), vec!["quit", "que"]);
    }

    #[test]
    fn unmatchable_cells_block_paths() {
        let lexicon = build_lexicon(["cat", "at"]);
        // c ? t
        // x a x
        let b = Board::parse("c 1 t x a x x x x", 3).unwrap();
        assert_eq!(search(&b, &lexicon, 9), vec!["cat", "at"]);

        let b = Board::parse("c 1 t x x x a x x", 3).unwrap();
        assert!(search(&b, &lexicon, 9).is_empty());
    }

    #[test]
    fn uppercase_board_letters_fold() {
        let lexicon = build_lexicon(["cat"]);
        assert_eq!(search(&board("CATSXXXXXXXXXXXX"), &lexicon, 16), vec!["cat"]);
    }

    #[test]
    fn solve_cells_validates_first() {
        let lexicon = build_lexicon(["cat"]);
        let cells = ["c", "a", "t"];
        assert_eq!(
            solve_cells(&cells, 4, &lexicon, 16).unwrap_err(),
            BoardError::CellCount {
                dimension: 4,
                expected: 16,
                actual: 3
            }
        );
        let mut cells = vec!["x"; 16];
        cells[0] = "c";
        cells[1] = "a";
        cells[2] = "t";
        assert_eq!(solve_cells(&cells, 4, &lexicon, 16).unwrap(), vec!["cat"]);
    }

    #[test]
    fn repeated_search_is_identical() {
        let lexicon = build_lexicon(["ab", "ba", "abc", "cab", "bca"]);
        let b = board("abcabcabcabcabca");
        let first = search(&b, &lexicon, 16);
        let second = search(&b, &lexicon, 16);
        assert_eq!(first, second);
        assert!(is_ranked(&first));
    }

    #[test]
    fn empty_lexicon_finds_nothing() {
        let lexicon = Lexicon::default();
        assert!(search(&board("abcdefghijklmnop"), &lexicon, 16).is_empty());
    }
}
