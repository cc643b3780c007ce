//! Difficulty levels
//!
//! A level selects both the grid size and the number of words the generator
//! tries to place.

use std::fmt;

/// Grid side length for levels 1 through 5
const GRID_SIZES: [usize; 5] = [5, 7, 9, 11, 13];

/// Target word count for levels 1 through 5
const TARGET_WORD_COUNTS: [usize; 5] = [8, 12, 18, 22, 25];

/// A difficulty level in `1..=5`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Level(u8);

/// Error type for out-of-range levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelError(pub u8);

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Level must be between {} and {}, got {}",
            Level::MIN.0,
            Level::MAX.0,
            self.0
        )
    }
}

impl std::error::Error for LevelError {}

impl Level {
    /// Easiest level (5x5 grid)
    pub const MIN: Self = Self(1);
    /// Hardest level (13x13 grid)
    pub const MAX: Self = Self(5);

    /// Create a level from its number
    ///
    /// # Errors
    /// Returns `LevelError` if `value` is not in `1..=5`.
    ///
    /// # Examples
    /// ```
    /// use crossword_engine::core::Level;
    ///
    /// let level = Level::new(2).unwrap();
    /// assert_eq!(level.grid_size(), 7);
    /// assert_eq!(level.target_word_count(), 12);
    ///
    /// assert!(Level::new(0).is_err());
    /// assert!(Level::new(6).is_err());
    /// ```
    pub const fn new(value: u8) -> Result<Self, LevelError> {
        if value >= Self::MIN.0 && value <= Self::MAX.0 {
            Ok(Self(value))
        } else {
            Err(LevelError(value))
        }
    }

    /// All levels from easiest to hardest
    pub fn all() -> impl Iterator<Item = Self> {
        (Self::MIN.0..=Self::MAX.0).map(Self)
    }

    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Side length of the square grid
    #[inline]
    #[must_use]
    pub const fn grid_size(self) -> usize {
        GRID_SIZES[(self.0 - 1) as usize]
    }

    /// Number of words the generator stops at
    #[inline]
    #[must_use]
    pub const fn target_word_count(self) -> usize {
        TARGET_WORD_COUNTS[(self.0 - 1) as usize]
    }
}

impl Default for Level {
    fn default() -> Self {
        Self(2)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for Level {
    type Error = LevelError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
