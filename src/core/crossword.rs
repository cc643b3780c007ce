//! A generated crossword: the grid plus its placed words
//!
//! This is the pure puzzle data. It knows nothing about cursors or
//! selection, so the solving rules can be exercised directly.

use super::{Grid, Level, PlacedWord};

/// Grid and word list produced by one generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crossword {
    level: Level,
    grid: Grid,
    words: Vec<PlacedWord>,
}

impl Crossword {
    pub(crate) const fn new(level: Level, grid: Grid, words: Vec<PlacedWord>) -> Self {
        Self { level, grid, words }
    }

    /// An empty grid for `level` with no words placed
    #[must_use]
    pub fn empty(level: Level) -> Self {
        Self::new(level, Grid::new(level.grid_size()), Vec::new())
    }

    #[inline]
    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }

    #[inline]
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Placed words in placement (id) order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[PlacedWord] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Look up a placed word by its 1-based id
    #[must_use]
    pub fn word(&self, id: u32) -> Option<&PlacedWord> {
        let index = usize::try_from(id).ok()?.checked_sub(1)?;
        self.words.get(index).filter(|word| word.id() == id)
    }

    /// Set the displayed letter of a fillable cell
    ///
    /// Returns `false` (and changes nothing) for blocked or out-of-range cells.
    pub fn set_displayed(&mut self, row: usize, col: usize, letter: Option<char>) -> bool {
        match self.grid.get_mut(row, col) {
            Some(cell) if cell.is_fillable() => {
                cell.set_displayed(letter);
                true
            }
            _ => false,
        }
    }

    /// Copy every solution letter into the displayed letters
    pub fn reveal(&mut self) {
        for cell in self.grid.cells_mut() {
            if let Some(letter) = cell.solution_letter() {
                cell.set_displayed(Some(letter));
            }
        }
    }

    /// Every cell of every placed word shows its solution letter
    ///
    /// Cells outside all words are not consulted.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.words.iter().all(|word| self.is_word_solved(word))
    }

    /// Every letter of `word` is displayed correctly
    #[must_use]
    pub fn is_word_solved(&self, word: &PlacedWord) -> bool {
        word.letters().all(|((row, col), letter)| {
            self.grid
                .get(row, col)
                .is_some_and(|cell| cell.displayed_letter() == Some(letter))
        })
    }

    /// Correctly filled cells and total fillable cells
    #[must_use]
    pub fn progress(&self) -> (usize, usize) {
        self.grid
            .cells()
            .filter(|(_, cell)| cell.is_fillable())
            .fold((0, 0), |(correct, total), (_, cell)| {
                (correct + usize::from(cell.is_correct()), total + 1)
            })
    }
}
