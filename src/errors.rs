//! Error types for building a lexicon and validating boards.
//!
//! # Error Codes
//!
//! Each variant carries a stable code for documentation lookup:
//!
//! - E001: `LexiconError::InvalidSymbol` (Vocabulary entry outside a-z)
//! - E002: `LexiconError::Io` (Word list could not be read)
//! - E101: `BoardError::CellCount` (Board does not have dimension² cells)
//! - E102: `BoardError::ZeroDimension` (Board dimension of zero)
//! - E103: `BoardError::DimensionTooLarge` (Board dimension whose square overflows)
//!
//! # Examples
//!
//! ```
//! use boggle_trie::board::Board;
//! use boggle_trie::errors::BoardError;
//!
//! let err = Board::new(["a"; 15], 4).unwrap_err();
//! assert_eq!(err, BoardError::CellCount { dimension: 4, expected: 16, actual: 15 });
//! assert_eq!(err.code(), "E101");
//! ```

use std::io;

/// Errors raised while building a [`Lexicon`](crate::lexicon::Lexicon).
#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("Invalid character '{symbol}' in \"{word}\" (only lowercase a-z allowed)")]
    InvalidSymbol { word: String, symbol: char },

    #[error("Failed to read word list: {0}")]
    Io(#[from] io::Error),
}

impl LexiconError {
    /// Returns the error code for this error type.
    pub fn code(&self) -> &'static str {
        match self {
            LexiconError::InvalidSymbol { .. } => "E001",
            LexiconError::Io(_) => "E002",
        }
    }
}

impl PartialEq for LexiconError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                LexiconError::InvalidSymbol { word: w1, symbol: s1 },
                LexiconError::InvalidSymbol { word: w2, symbol: s2 },
            ) => w1 == w2 && s1 == s2,
            (LexiconError::Io(e1), LexiconError::Io(e2)) => e1.kind() == e2.kind(),
            _ => false,
        }
    }
}

/// Errors raised while validating a [`Board`](crate::board::Board).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("Board of dimension {dimension} needs {expected} cells, got {actual}")]
    CellCount {
        dimension: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Board dimension must be at least 1")]
    ZeroDimension,

    #[error("Board dimension {dimension} is too large (dimension² overflows)")]
    DimensionTooLarge { dimension: usize },
}

impl BoardError {
    /// Returns the error code for this error type.
    pub fn code(&self) -> &'static str {
        match self {
            BoardError::CellCount { .. } => "E101",
            BoardError::ZeroDimension => "E102",
            BoardError::DimensionTooLarge { .. } => "E103",
        }
    }

    /// Returns a hint for fixing the input, if there is one.
    pub fn help(&self) -> Option<&'static str> {
        match self {
            BoardError::CellCount { .. } => Some(
                "Give one letter per cell (e.g. \"catsxxxxxxxxxxxx\"), or separate \
                 multi-letter cells with commas or spaces (e.g. \"c,a,qu,...\")",
            ),
            BoardError::ZeroDimension | BoardError::DimensionTooLarge { .. } => None,
        }
    }
}

/// Any error this crate can produce.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Lexicon(#[from] LexiconError),

    #[error(transparent)]
    Board(#[from] BoardError),

    #[error("Board {index}: {source}")]
    BoardAt {
        index: usize,
        #[source]
        source: BoardError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Returns the error code of the underlying error, if it has one.
    pub fn code(&self) -> Option<&'static str> {
        match self {
            Error::Lexicon(e) => Some(e.code()),
            Error::Board(e) | Error::BoardAt { source: e, .. } => Some(e.code()),
            Error::Io(_) => None,
        }
    }

    /// Formats the error with its code and any help text, for the command line.
    pub fn display_detailed(&self) -> String {
        let help = match self {
            Error::Board(e) | Error::BoardAt { source: e, .. } => e.help(),
            _ => None,
        };
        match (self.code(), help) {
            (Some(code), Some(help)) => format!("{self} [{code}]\n  help: {help}"),
            (Some(code), None) => format!("{self} [{code}]"),
            _ => self.to_string(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn invalid_symbol_message() {
        let e = LexiconError::InvalidSymbol {
            word: "don't".to_string(),
            symbol: '\'',
        };
        assert_eq!(
            e.to_string(),
            "Invalid character ''' in \"don't\" (only lowercase a-z allowed)"
        );
        assert_eq!(e.code(), "E001");
    }

    #[test]
    fn cell_count_message() {
        let e = BoardError::CellCount {
            dimension: 4,
            expected: 16,
            actual: 17,
        };
        assert_eq!(e.to_string(), "Board of dimension 4 needs 16 cells, got 17");
        assert_eq!(e.code(), "E101");
        assert!(e.help().is_some());
    }

    #[test]
    fn io_error_converts() {
        let io = io::Error::new(io::ErrorKind::NotFound, "missing");
        let e: LexiconError = io.into();
        assert_eq!(e.code(), "E002");
        let top: Error = e.into();
        assert_eq!(top.code(), Some("E002"));
    }

    #[test]
    fn detailed_display_includes_code_and_help() {
        let e = Error::BoardAt {
            index: 2,
            source: BoardError::CellCount {
                dimension: 4,
                expected: 16,
                actual: 3,
            },
        };
        let shown = e.display_detailed();
        assert!(shown.starts_with("Board 2: Board of dimension 4 needs 16 cells, got 3 [E101]"));
        assert!(shown.contains("help:"));

        let e = Error::Board(BoardError::ZeroDimension);
        assert_eq!(e.display_detailed(), "Board dimension must be at least 1 [E102]");

        let e = Error::BoardAt {
            index: 0,
            source: BoardError::DimensionTooLarge { dimension: 70_000 },
        };
        assert_eq!(
            e.display_detailed(),
            "Board 0: Board dimension 70000 is too large (dimension² overflows) [E103]"
        );
    }
}
