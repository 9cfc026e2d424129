use std::fmt;

/// Number of symbols in the lexicon alphabet (`a` through `z`).
pub const ALPHABET_SIZE: usize = 26;

/// A single symbol of the lexicon alphabet, one of the lowercase ASCII letters.
///
/// Letters are the edge labels of the trie and the contents of board tiles. Anything
/// that cannot be converted to a `Letter` is outside the alphabet: such vocabulary
/// entries are rejected and such board cells can never extend a path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

impl Letter {
    /// Returns the letter for `ch`, or `None` if `ch` is not a lowercase ASCII letter.
    #[inline]
    pub fn from_char(ch: char) -> Option<Letter> {
        ch.is_ascii_lowercase().then(|| Letter(ch as u8 - b'a'))
    }

    /// Returns the letter with the given alphabet index (`0` is `a`).
    #[inline]
    pub fn from_index(index: usize) -> Option<Letter> {
        (index < ALPHABET_SIZE).then(|| Letter(index as u8))
    }

    /// Position of this letter in the alphabet.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn to_char(self) -> char {
        (b'a' + self.0) as char
    }

    /// Iterates over the whole alphabet in order.
    pub fn all() -> impl DoubleEndedIterator<Item = Letter> + ExactSizeIterator {
        (0..ALPHABET_SIZE as u8).map(Letter)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl TryFrom<char> for Letter {
    type Error = char;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        Letter::from_char(ch).ok_or(ch)
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> char {
        letter.to_char()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn lowercase_letters_round_trip() {
        for ch in 'a'..='z' {
            let letter = Letter::from_char(ch).unwrap();
            assert_eq!(letter.to_char(), ch);
        }
    }

    #[test]
    fn symbols_outside_alphabet() {
        for ch in ['A', 'Z', '1', '\'', ' ', 'é', 'ß', '-'] {
            assert_eq!(Letter::from_char(ch), None, "{ch:?}");
            assert_eq!(Letter::try_from(ch), Err(ch));
        }
    }

    #[test]
    fn alphabet_is_ordered() {
        let all: Vec<char> = Letter::all().map(char::from).collect();
        assert_eq!(all.len(), ALPHABET_SIZE);
        assert_eq!(all.first(), Some(&'a'));
        assert_eq!(all.last(), Some(&'z'));
        assert!(Letter::all().is_sorted());
    }

    #[test]
    fn alphabet_runs_backwards() {
        assert_eq!(Letter::all().len(), ALPHABET_SIZE);
        let backwards: String = Letter::all().rev().map(char::from).collect();
        assert_eq!(backwards, "zyxwvutsrqponmlkjihgfedcba");
        assert_eq!(Letter::all().rev().nth(1), Letter::from_char('y'));
    }

    #[test]
    fn index_bounds() {
        assert_eq!(Letter::from_index(0), Letter::from_char('a'));
        assert_eq!(Letter::from_index(25), Letter::from_char('z'));
        assert_eq!(Letter::from_index(26), None);
    }
}
