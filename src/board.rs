//! Square letter grids.
//!
//! A [`Board`] is a `dimension × dimension` grid of [`Tile`]s stored row-major. Cells
//! are given as strings so that a single cell can carry more than one letter (the
//! classic `Qu` die). Cell text is ASCII case-folded; a cell with no text, or with
//! any character outside `a`-`z`, becomes an unmatchable tile that never extends a
//! path. Only the cell count is validated.

use std::fmt;
use std::str::FromStr;

use smallvec::SmallVec;

use crate::errors::BoardError;
use crate::lexicon::Letter;

/// Dimension of a standard Boggle board.
pub const STANDARD_DIMENSION: usize = 4;

/// Row/column offsets of the eight neighbors, in exploration order.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (1, 1),
    (-1, 1),
    (1, -1),
];

/// The letters shown on one board cell.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tile {
    letters: SmallVec<[Letter; 2]>,
}

impl Tile {
    /// Parses cell text. Anything outside the alphabet makes the whole tile unmatchable.
    pub fn parse(cell: &str) -> Tile {
        let letters: Option<SmallVec<[Letter; 2]>> = cell
            .trim()
            .chars()
            .map(|ch| Letter::from_char(ch.to_ascii_lowercase()))
            .collect();
        match letters {
            Some(letters) => Tile { letters },
            None => {
                log::trace!("Cell {cell:?} is outside the alphabet; treating it as unmatchable");
                Tile::default()
            }
        }
    }

    #[inline]
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    /// True if no word can pass through this tile.
    #[inline]
    pub fn is_unmatchable(&self) -> bool {
        self.letters.is_empty()
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unmatchable() {
            return f.pad("?");
        }
        // Multi-letter tiles print like the die face: "Qu".
        let multi = self.letters.len() > 1;
        let face: String = self
            .letters
            .iter()
            .enumerate()
            .map(|(i, letter)| match i {
                0 if multi => letter.to_char().to_ascii_uppercase(),
                _ => letter.to_char(),
            })
            .collect();
        f.pad(&face)
    }
}

/// A square grid of tiles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    dimension: usize,
    tiles: Vec<Tile>,
}

impl Board {
    /// Builds a board from `dimension²` cells given in row-major order.
    ///
    /// # Errors
    ///
    /// `BoardError::CellCount` if the number of cells is not `dimension²`,
    /// `BoardError::ZeroDimension` if `dimension` is zero, and
    /// `BoardError::DimensionTooLarge` if `dimension²` does not fit in a `usize`.
    /// Cell content never fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use boggle_trie::board::Board;
    ///
    /// let board = Board::new(["c", "a", "t", "s", "x", "x", "x", "x", "x", "x", "x", "x", "x", "x", "x", "qu"], 4).unwrap();
    /// assert_eq!(board.len(), 16);
    /// assert_eq!(board.tile(3, 3).to_string(), "Qu");
    /// ```
    pub fn new<S: AsRef<str>>(
        cells: impl IntoIterator<Item = S>,
        dimension: usize,
    ) -> Result<Board, BoardError> {
        if dimension == 0 {
            return Err(BoardError::ZeroDimension);
        }
        let expected = dimension
            .checked_mul(dimension)
            .ok_or(BoardError::DimensionTooLarge { dimension })?;
        let tiles: Vec<Tile> = cells
            .into_iter()
            .map(|cell| Tile::parse(cell.as_ref()))
            .collect();
        if tiles.len() != expected {
            return Err(BoardError::CellCount {
                dimension,
                expected,
                actual: tiles.len(),
            });
        }
        Ok(Board { dimension, tiles })
    }

    /// Builds a standard 4×4 board.
    pub fn standard<S: AsRef<str>>(cells: impl IntoIterator<Item = S>) -> Result<Board, BoardError> {
        Board::new(cells, STANDARD_DIMENSION)
    }

    /// Parses the compact text form of a board.
    ///
    /// If the text contains commas or whitespace it is split on them and each piece is a
    /// cell (`"c,a,qu,..."`); otherwise every character is one cell (`"catsxxxx..."`).
    pub fn parse(text: &str, dimension: usize) -> Result<Board, BoardError> {
        let text = text.trim();
        let is_separator = |ch: char| ch == ',' || ch.is_whitespace();
        if text.contains(is_separator) {
            Board::new(text.split(is_separator).filter(|cell| !cell.is_empty()), dimension)
        } else {
            Board::new(text.chars().map(String::from), dimension)
        }
    }

    /// Number of rows (and columns).
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Always false: a board has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Returns the tile at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the position is outside the board.
    #[inline]
    pub fn tile(&self, row: usize, col: usize) -> &Tile {
        assert!(row < self.dimension && col < self.dimension, "cell ({row}, {col}) is off the board");
        &self.tiles[row * self.dimension + col]
    }

    /// Returns the tile at a row-major cell index.
    #[inline]
    pub fn tile_at(&self, cell: usize) -> &Tile {
        &self.tiles[cell]
    }

    /// Row-major tiles.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Row-major indices of the cells adjacent to `cell`, in
    /// [`NEIGHBOR_OFFSETS`] order.
    #[inline]
    pub fn neighbors(&self, cell: usize) -> impl Iterator<Item = usize> + '_ {
        let dimension = self.dimension;
        let (row, col) = (cell / dimension, cell % dimension);
        NEIGHBOR_OFFSETS.iter().filter_map(move |&(dr, dc)| {
            let r = row.checked_add_signed(dr).filter(|&r| r < dimension)?;
            let c = col.checked_add_signed(dc).filter(|&c| c < dimension)?;
            Some(r * dimension + c)
        })
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parses a standard 4×4 board. See [`Board::parse`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::parse(s, STANDARD_DIMENSION)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, tiles) in self.tiles.chunks(self.dimension).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for (col, tile) in tiles.iter().enumerate() {
                if col > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{tile:<2}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    fn letters(tile: &Tile) -> String {
        tile.letters().iter().map(|l| l.to_char()).collect()
    }

    #[test]
    fn wrong_cell_count_is_rejected() {
        for count in [0, 1, 15, 17, 25] {
            let err = Board::new(vec!["a"; count], 4).unwrap_err();
            assert_eq!(
                err,
                BoardError::CellCount {
                    dimension: 4,
                    expected: 16,
                    actual: count
                }
            );
        }
    }

    #[test]
    fn any_content_with_right_count_is_accepted() {
        let cells = [
            "a", "B", "", "7", "qu", "é", "  ", "Zz", "x", "-", "q", "u", "i", "e", "t", "!",
        ];
        let board = Board::standard(cells).unwrap();
        assert_eq!(board.len(), 16);
        assert_eq!(letters(board.tile(0, 1)), "b");
        assert!(board.tile(0, 2).is_unmatchable());
        assert!(board.tile(0, 3).is_unmatchable());
        assert_eq!(letters(board.tile(1, 0)), "qu");
        assert!(board.tile(1, 1).is_unmatchable());
        assert_eq!(letters(board.tile(1, 3)), "zz");
        assert!(board.tile(3, 3).is_unmatchable());
    }

    #[test]
    fn zero_dimension_is_rejected() {
        assert_eq!(
            Board::new(Vec::<&str>::new(), 0).unwrap_err(),
            BoardError::ZeroDimension
        );
    }

    #[test]
    fn oversized_dimension_is_rejected() {
        let err = Board::new(["a"; 3], usize::MAX).unwrap_err();
        assert_eq!(err, BoardError::DimensionTooLarge { dimension: usize::MAX });
        assert_eq!(err.code(), "E103");

        let wide = 1usize << (usize::BITS / 2);
        assert_eq!(
            Board::parse("abc", wide).unwrap_err(),
            BoardError::DimensionTooLarge { dimension: wide }
        );
        // The largest dimension whose square fits is still checked against the cell count.
        let err = Board::new(["a"; 3], wide - 1).unwrap_err();
        assert!(matches!(err, BoardError::CellCount { actual: 3, .. }), "{err:?}");
    }

    #[test]
    fn other_dimensions() {
        let board = Board::new(["a"; 9], 3).unwrap();
        assert_eq!(board.dimension(), 3);
        assert!(Board::new(["a"; 16], 3).is_err());
        let board = Board::new(["a"], 1).unwrap();
        assert_eq!(board.neighbors(0).count(), 0);
    }

    #[test]
    fn neighbors_of_corner_edge_and_center() {
        let board = Board::new(["a"; 16], 4).unwrap();
        // (0,0): down, right, down-right
        assert_eq!(board.neighbors(0).collect::<Vec<_>>(), vec![4, 1, 5]);
        // (0,1): down, left, right, down-right, down-left
        assert_eq!(board.neighbors(1).collect::<Vec<_>>(), vec![5, 0, 2, 6, 4]);
        // (1,1): all eight
        assert_eq!(
            board.neighbors(5).collect::<Vec<_>>(),
            vec![1, 9, 4, 6, 0, 10, 2, 8]
        );
        // (3,3)
        assert_eq!(board.neighbors(15).collect::<Vec<_>>(), vec![11, 14, 10]);
    }

    #[test]
    fn neighbor_relation_is_symmetric() {
        let board = Board::new(["a"; 25], 5).unwrap();
        for cell in 0..board.len() {
            for n in board.neighbors(cell) {
                assert!(board.neighbors(n).any(|back| back == cell));
            }
        }
    }

    #[test]
    fn parse_compact_and_separated() {
        let compact: Board = "catsxxxxxxxxxxxx".parse().unwrap();
        assert_eq!(letters(compact.tile(0, 3)), "s");

        let separated = Board::parse("c,a,t,s x x x x\nx x x x x x x qu", 4).unwrap();
        assert_eq!(letters(separated.tile(0, 0)), "c");
        assert_eq!(letters(separated.tile(3, 3)), "qu");

        assert!("cats".parse::<Board>().is_err());
        assert!(Board::parse("abcdefghi", 3).is_ok());
    }

    #[test]
    fn display_grid() {
        let board = Board::parse("a b c qu e f g h 1", 3).unwrap();
        assert_eq!(board.to_string(), "a  b  c \nQu e  f \ng  h  ? ");
    }
}
