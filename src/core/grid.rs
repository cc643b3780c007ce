//! Crossword grid representation
//!
//! A `Grid` is a square array of `Cell`s. Cells that belong to at least one
//! placed word are fillable; all others are blocked.

use std::fmt;
use std::ops::Index;

/// Orientation of a placed word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Left to right along a row
    Horizontal,
    /// Top to bottom along a column
    Vertical,
}

impl Direction {
    #[inline]
    #[must_use]
    pub const fn perpendicular(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }

    /// Row and column step taken per letter
    #[inline]
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Self::Horizontal => (0, 1),
            Self::Vertical => (1, 0),
        }
    }

    /// Arrow shown on a word's origin cell
    #[inline]
    #[must_use]
    pub const fn arrow(self) -> char {
        match self {
            Self::Horizontal => '→',
            Self::Vertical => '↓',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horizontal => write!(f, "Horizontal"),
            Self::Vertical => write!(f, "Vertical"),
        }
    }
}

/// Marks the first cell of a placed word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OriginMarker {
    pub word_id: u32,
    pub direction: Direction,
}

/// A single grid square
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cell {
    displayed: Option<char>,
    solution: Option<char>,
    origin: Option<OriginMarker>,
    members: Vec<u32>,
}

impl Cell {
    /// Letter currently shown to the player
    #[inline]
    #[must_use]
    pub const fn displayed_letter(&self) -> Option<char> {
        self.displayed
    }

    /// Letter the cell must hold; `None` for unused cells
    #[inline]
    #[must_use]
    pub const fn solution_letter(&self) -> Option<char> {
        self.solution
    }

    #[inline]
    #[must_use]
    pub fn is_fillable(&self) -> bool {
        !self.members.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn is_blocked(&self) -> bool {
        self.members.is_empty()
    }

    #[inline]
    #[must_use]
    pub const fn origin_marker(&self) -> Option<OriginMarker> {
        self.origin
    }

    /// Ids of the words passing through this cell, in placement order
    #[inline]
    #[must_use]
    pub fn member_word_ids(&self) -> &[u32] {
        &self.members
    }

    /// Shared by two or more words
    #[inline]
    #[must_use]
    pub fn is_intersection(&self) -> bool {
        self.members.len() >= 2
    }

    /// Displayed letter matches the solution (false for blocked cells)
    #[inline]
    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.solution.is_some() && self.displayed == self.solution
    }

    pub(crate) fn set_displayed(&mut self, letter: Option<char>) {
        self.displayed = letter;
    }

    pub(crate) fn set_solution(&mut self, letter: char) {
        self.solution = Some(letter);
    }

    pub(crate) fn add_member(&mut self, word_id: u32) {
        if !self.members.contains(&word_id) {
            self.members.push(word_id);
        }
    }

    /// The first word to start here keeps the marker
    pub(crate) fn mark_origin(&mut self, marker: OriginMarker) {
        if self.origin.is_none() {
            self.origin = Some(marker);
        }
    }
}

/// Square crossword grid stored in row-major order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty `size`×`size` grid with every cell blocked
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::default(); size * size],
        }
    }

    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Check signed coordinates against `[0, size)`
    #[inline]
    #[must_use]
    pub fn in_bounds(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.size && (col as usize) < self.size
    }

    /// Get a cell, returning `None` when out of bounds
    #[inline]
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        if row < self.size && col < self.size {
            self.cells.get(row * self.size + col)
        } else {
            None
        }
    }

    /// Like [`Grid::get`] but accepts coordinates that may be negative
    #[inline]
    #[must_use]
    pub fn get_signed(&self, row: isize, col: isize) -> Option<&Cell> {
        if self.in_bounds(row, col) {
            self.get(row as usize, col as usize)
        } else {
            None
        }
    }

    pub(crate) fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut Cell> {
        if row < self.size && col < self.size {
            self.cells.get_mut(row * self.size + col)
        } else {
            None
        }
    }

    /// Iterate over rows, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size.max(1))
    }

    /// Iterate over every cell with its coordinates
    pub fn cells(&self) -> impl Iterator<Item = ((usize, usize), &Cell)> {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| ((i / size, i % size), cell))
    }

    pub(crate) fn cells_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.cells.iter_mut()
    }

    /// Number of cells that belong to at least one word
    #[must_use]
    pub fn fillable_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_fillable()).count()
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = Cell;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        assert!(
            row < self.size && col < self.size,
            "cell ({row}, {col}) outside {0}x{0} grid",
            self.size
        );
        &self.cells[row * self.size + col]
    }
}

/// A word fixed in the grid by the generator
///
/// The id is 1-based, follows placement order, and doubles as the clue number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedWord {
    id: u32,
    word: String,
    clue: String,
    start_row: usize,
    start_col: usize,
    direction: Direction,
}

impl PlacedWord {
    pub(crate) const fn new(
        id: u32,
        word: String,
        clue: String,
        (start_row, start_col): (usize, usize),
        direction: Direction,
    ) -> Self {
        Self {
            id,
            word,
            clue,
            start_row,
            start_col,
            direction,
        }
    }

    #[inline]
    #[must_use]
    pub const fn id(&self) -> u32 {
        self.id
    }

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
    pub const fn start_row(&self) -> usize {
        self.start_row
    }

    #[inline]
    #[must_use]
    pub const fn start_col(&self) -> usize {
        self.start_col
    }

    #[inline]
    #[must_use]
    pub const fn start(&self) -> (usize, usize) {
        (self.start_row, self.start_col)
    }

    #[inline]
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.word.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    /// Coordinates of the cell holding letter `index`
    #[inline]
    #[must_use]
    pub const fn cell_at(&self, index: usize) -> (usize, usize) {
        match self.direction {
            Direction::Horizontal => (self.start_row, self.start_col + index),
            Direction::Vertical => (self.start_row + index, self.start_col),
        }
    }

    /// Coordinates of every cell the word spans, first letter first
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.len()).map(|i| self.cell_at(i))
    }

    /// Each letter paired with the cell it occupies
    pub fn letters(&self) -> impl Iterator<Item = ((usize, usize), char)> + '_ {
        self.cells().zip(self.word.chars())
    }

    /// Position of `(row, col)` within the word, if the word covers it
    #[must_use]
    pub fn index_of(&self, row: usize, col: usize) -> Option<usize> {
        match self.direction {
            Direction::Horizontal if row == self.start_row && col >= self.start_col => {
                Some(col - self.start_col).filter(|&i| i < self.len())
            }
            Direction::Vertical if col == self.start_col && row >= self.start_row => {
                Some(row - self.start_row).filter(|&i| i < self.len())
            }
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn covers(&self, row: usize, col: usize) -> bool {
        self.index_of(row, col).is_some()
    }
}
