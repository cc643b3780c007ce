//! Word bank entries
//!
//! A `WordEntry` is a validated, uppercase word together with its clue and
//! difficulty level.

use super::Level;
use std::fmt;

/// Shortest word the engine accepts
pub const MIN_WORD_LENGTH: usize = 2;

/// A candidate crossword word with its clue
///
/// Immutable once built; the length is always the length of the word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    word: String,
    clue: String,
    level: Level,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    TooShort(usize),
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort(len) => {
                write!(
                    f,
                    "Word must have at least {MIN_WORD_LENGTH} letters, got {len}"
                )
            }
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl WordEntry {
    /// Create a new entry, normalizing the word to uppercase
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The word is shorter than 2 letters
    /// - Contains non-ASCII characters
    /// - Contains anything other than letters
    ///
    /// # Examples
    /// ```
    /// use crossword_engine::core::{Level, WordEntry};
    ///
    /// let entry = WordEntry::new("chat", "Animal qui miaule", Level::MIN).unwrap();
    /// assert_eq!(entry.word(), "CHAT");
    /// assert_eq!(entry.len(), 4);
    ///
    /// assert!(WordEntry::new("a", "", Level::MIN).is_err());
    /// assert!(WordEntry::new("c'est", "", Level::MIN).is_err());
    /// ```
    pub fn new(
        word: impl Into<String>,
        clue: impl Into<String>,
        level: Level,
    ) -> Result<Self, WordError> {
        let word: String = word.into().trim().to_ascii_uppercase();

        if !word.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !word.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(WordError::InvalidCharacters);
        }

        if word.len() < MIN_WORD_LENGTH {
            return Err(WordError::TooShort(word.len()));
        }

        Ok(Self {
            word,
            clue: clue.into().trim().to_string(),
            level,
        })
    }

    /// The word in uppercase
    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    #[inline]
    #[must_use]
    pub fn clue(&self) -> &str {
        &self.clue
    }

    #[inline]
    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }

    /// Number of letters (words are ASCII, so bytes == letters)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.word.len()
    }

    /// Always false: entries hold at least two letters
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> char {
        char::from(self.word.as_bytes()[position])
    }
}

impl fmt::Display for WordEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(n: u8) -> Level {
        Level::new(n).unwrap()
    }

    #[test]
    fn valid_entry_creation() {
        let entry = WordEntry::new("jardin", "On y cultive des légumes", level(2)).unwrap();
        assert_eq!(entry.word(), "JARDIN");
        assert_eq!(entry.clue(), "On y cultive des légumes");
        assert_eq!(entry.level(), level(2));
        assert_eq!(entry.len(), 6);
    }

    #[test]
    fn length_matches_word() {
        for text in ["OR", "THE", "CHAT", "ECHARPE"] {
            let entry = WordEntry::new(text, "", level(1)).unwrap();
            assert_eq!(entry.len(), text.len());
        }
    }

    #[test]
    fn trims_whitespace() {
        let entry = WordEntry::new("  rose ", "  Fleur qui pique ", level(1)).unwrap();
        assert_eq!(entry.word(), "ROSE");
        assert_eq!(entry.clue(), "Fleur qui pique");
    }

    #[test]
    fn invalid_length() {
        assert_eq!(
            WordEntry::new("a", "", level(1)),
            Err(WordError::TooShort(1))
        );
        assert_eq!(WordEntry::new("", "", level(1)), Err(WordError::TooShort(0)));
    }

    #[test]
    fn non_ascii() {
        assert_eq!(
            WordEntry::new("été", "", level(1)),
            Err(WordError::NonAscii)
        );
    }

    #[test]
    fn invalid_characters() {
        assert_eq!(
            WordEntry::new("abc1", "", level(1)),
            Err(WordError::InvalidCharacters)
        );
        assert_eq!(
            WordEntry::new("porte-clef", "", level(1)),
            Err(WordError::InvalidCharacters)
        );
    }

    #[test]
    fn letter_at_positions() {
        let entry = WordEntry::new("table", "", level(1)).unwrap();
        assert_eq!(entry.letter_at(0), 'T');
        assert_eq!(entry.letter_at(4), 'E');
    }

    #[test]
    fn display_shows_word() {
        let entry = WordEntry::new("lune", "Elle brille la nuit", level(1)).unwrap();
        assert_eq!(entry.to_string(), "LUNE");
    }
}
