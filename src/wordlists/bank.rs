//! Word bank indexed by difficulty level

use super::WORD_BANK;
use super::loader::{entries_from_slice, load_from_file};
use crate::core::{Level, WordEntry};
use rustc_hash::FxHashMap;
use std::io;
use std::path::Path;

/// Catalog of candidate words, grouped by level for pool selection
#[derive(Debug, Clone)]
pub struct WordBank {
    entries: Vec<WordEntry>,
    by_level: FxHashMap<Level, Vec<usize>>,
}

impl WordBank {
    /// Build a bank from entries, keeping their order within each level
    #[must_use]
    pub fn from_entries(entries: Vec<WordEntry>) -> Self {
        let mut by_level: FxHashMap<Level, Vec<usize>> = FxHashMap::default();
        for (i, entry) in entries.iter().enumerate() {
            by_level.entry(entry.level()).or_default().push(i);
        }

        Self { entries, by_level }
    }

    /// The bank compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_entries(entries_from_slice(WORD_BANK))
    }

    /// Load a bank file (`LEVEL|WORD|CLUE` per line)
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read.
    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        load_from_file(path).map(Self::from_entries)
    }

    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries for `level`, in bank order
    #[must_use]
    pub fn pool(&self, level: Level) -> Vec<&WordEntry> {
        self.by_level
            .get(&level)
            .map(|indices| indices.iter().map(|&i| &self.entries[i]).collect())
            .unwrap_or_default()
    }

    /// Number of entries for `level`
    #[must_use]
    pub fn count_for(&self, level: Level) -> usize {
        self.by_level.get(&level).map_or(0, Vec::len)
    }
}

impl Default for WordBank {
    fn default() -> Self {
        Self::embedded()
    }
}
