//! Greedy crossword construction
//!
//! An attempt shuffles the level's word pool, centers the first word
//! horizontally, then walks the remaining words and drops each one at the
//! first valid crossing with an already placed word. Up to three attempts are
//! made and the one with the most words wins.

use super::intersection::find_intersections;
use super::placement::can_place;
use crate::core::{Crossword, Direction, Grid, Level, OriginMarker, PlacedWord, WordEntry};
use crate::wordlists::WordBank;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Maximum number of randomized attempts per generation
pub const MAX_ATTEMPTS: usize = 3;

/// An attempt reaching this share of the target ends the retries (70%)
const GOOD_ENOUGH_PERCENT: usize = 70;

/// Builds one grid, owning it exclusively until [`GridBuilder::finish`]
#[derive(Debug, Clone)]
pub struct GridBuilder {
    level: Level,
    grid: Grid,
    words: Vec<PlacedWord>,
}

impl GridBuilder {
    /// Start from an empty grid sized for `level`
    #[must_use]
    pub fn new(level: Level) -> Self {
        Self {
            level,
            grid: Grid::new(level.grid_size()),
            words: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    #[must_use]
    pub fn placed(&self) -> &[PlacedWord] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Place `entry` at an explicit position if the validator allows it
    ///
    /// Returns the new word's id, or `None` with the grid untouched.
    pub fn place(
        &mut self,
        entry: &WordEntry,
        row: isize,
        col: isize,
        direction: Direction,
    ) -> Option<u32> {
        if !can_place(&self.grid, entry.word(), row, col, direction) {
            return None;
        }

        let id = u32::try_from(self.words.len() + 1).ok()?;
        let start = (row as usize, col as usize);
        let word = PlacedWord::new(
            id,
            entry.word().to_string(),
            entry.clue().to_string(),
            start,
            direction,
        );

        for ((r, c), letter) in word.letters() {
            if let Some(cell) = self.grid.get_mut(r, c) {
                cell.set_solution(letter);
                cell.add_member(id);
            }
        }

        if let Some(cell) = self.grid.get_mut(start.0, start.1) {
            cell.mark_origin(OriginMarker {
                word_id: id,
                direction,
            });
        }

        self.words.push(word);
        Some(id)
    }

    /// Place the seed word horizontally in the middle of the grid
    pub fn place_seed(&mut self, entry: &WordEntry) -> Option<u32> {
        let size = self.grid.size() as isize;
        let row = size / 2;
        let col = (size - entry.len() as isize) / 2;
        self.place(entry, row, col, Direction::Horizontal)
    }

    /// Place `entry` across the first placed word it can legally cross
    ///
    /// Placed words are tried in placement order and shared letters in the
    /// order [`find_intersections`] yields them; the first valid spot is taken.
    pub fn place_crossing(&mut self, entry: &WordEntry) -> Option<u32> {
        let (row, col, direction) = self.words.iter().find_map(|placed| {
            let direction = placed.direction().perpendicular();
            let (d_row, d_col) = direction.delta();

            find_intersections(entry.word(), placed.word())
                .into_iter()
                .find_map(|(in_entry, in_placed)| {
                    let (row, col) = placed.cell_at(in_placed);
                    let row = row as isize - d_row * in_entry as isize;
                    let col = col as isize - d_col * in_entry as isize;

                    can_place(&self.grid, entry.word(), row, col, direction)
                        .then_some((row, col, direction))
                })
        })?;

        self.place(entry, row, col, direction)
    }

    /// Hand back the finished puzzle
    #[must_use]
    pub fn finish(self) -> Crossword {
        Crossword::new(self.level, self.grid, self.words)
    }
}

/// Summary of a generation run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationReport {
    /// Words in the returned grid
    pub placed: usize,
    /// Level target, capped at the pool size
    pub target: usize,
    /// Entries available for the level
    pub pool_size: usize,
    /// Attempts actually run
    pub attempts: usize,
}

impl GenerationReport {
    /// Fewer words than targeted were placed (informational, not an error)
    #[inline]
    #[must_use]
    pub const fn is_shortfall(&self) -> bool {
        self.placed < self.target
    }
}

/// Target word count for a pool of `pool_size` entries
#[inline]
#[must_use]
pub fn target_for(level: Level, pool_size: usize) -> usize {
    level.target_word_count().min(pool_size)
}

/// Run a single generation attempt with its own seeded shuffle
///
/// Returns an empty grid when the pool is empty or the seed word is longer
/// than the grid.
#[must_use]
pub fn attempt_once(pool: &[&WordEntry], level: Level, seed: u64) -> Crossword {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut candidates = pool.to_vec();
    candidates.shuffle(&mut rng);

    let target = target_for(level, candidates.len());
    let mut builder = GridBuilder::new(level);

    let Some((&first, rest)) = candidates.split_first() else {
        return builder.finish();
    };

    if builder.place_seed(first).is_none() {
        return builder.finish();
    }

    for &entry in rest {
        if builder.word_count() >= target {
            break;
        }
        builder.place_crossing(entry);
    }

    builder.finish()
}

/// Generate a crossword for `level`, keeping the best of up to three attempts
///
/// Each attempt gets a fresh seed drawn from `rng`. Never fails: an empty pool
/// gives an empty grid.
///
/// # Examples
/// ```
/// use crossword_engine::core::Level;
/// use crossword_engine::generator::generate;
/// use crossword_engine::wordlists::WordBank;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let bank = WordBank::embedded();
/// let level = Level::new(1).unwrap();
/// let mut rng = StdRng::seed_from_u64(7);
///
/// let (crossword, report) = generate(&bank, level, &mut rng);
/// assert_eq!(crossword.grid().size(), 5);
/// assert_eq!(report.placed, crossword.word_count());
/// assert!(report.placed >= 1);
/// ```
pub fn generate<R: Rng + ?Sized>(
    bank: &WordBank,
    level: Level,
    rng: &mut R,
) -> (Crossword, GenerationReport) {
    let pool = bank.pool(level);
    let target = target_for(level, pool.len());
    let good_enough = target * GOOD_ENOUGH_PERCENT;

    let mut best = Crossword::empty(level);
    let mut attempts = 0;

    while attempts < MAX_ATTEMPTS {
        attempts += 1;
        let candidate = attempt_once(&pool, level, rng.random());
        let placed = candidate.word_count();

        if placed > best.word_count() {
            best = candidate;
        }

        if placed * 100 >= good_enough {
            break;
        }
    }

    let report = GenerationReport {
        placed: best.word_count(),
        target,
        pool_size: pool.len(),
        attempts,
    };

    (best, report)
}

/// Generate with a fixed seed, for reproducible puzzles
#[must_use]
pub fn generate_seeded(bank: &WordBank, level: Level, seed: u64) -> (Crossword, GenerationReport) {
    let mut rng = StdRng::seed_from_u64(seed);
    generate(bank, level, &mut rng)
}
