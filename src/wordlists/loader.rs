//! Word bank loading utilities
//!
//! Provides functions to load entries from files or from embedded constants.
//! Both use the `LEVEL|WORD|CLUE` line format.

use crate::core::{Level, WordEntry};
use std::fs;
use std::io;
use std::path::Path;

/// Load entries from a file
///
/// Returns the valid entries, skipping blank lines, `#` comments and any
/// line that does not parse.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use crossword_engine::wordlists::loader::load_from_file;
///
/// let entries = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", entries.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<WordEntry>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_entries(&content))
}

/// Parse every valid `LEVEL|WORD|CLUE` line of `content`
#[must_use]
pub fn parse_entries(content: &str) -> Vec<WordEntry> {
    content.lines().filter_map(parse_line).collect()
}

/// Parse one line; the clue may itself contain `|`
#[must_use]
pub fn parse_line(line: &str) -> Option<WordEntry> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }

    let mut fields = trimmed.splitn(3, '|');
    let level = fields.next()?.trim().parse::<u8>().ok()?;
    let level = Level::new(level).ok()?;
    let word = fields.next()?;
    let clue = fields.next().unwrap_or("");

    WordEntry::new(word, clue, level).ok()
}

/// Convert embedded `(level, word, clue)` triples to entries
///
/// # Examples
/// ```
/// use crossword_engine::wordlists::loader::entries_from_slice;
/// use crossword_engine::wordlists::WORD_BANK;
///
/// let entries = entries_from_slice(WORD_BANK);
/// assert_eq!(entries.len(), WORD_BANK.len());
/// ```
#[must_use]
pub fn entries_from_slice(slice: &[(u8, &str, &str)]) -> Vec<WordEntry> {
    slice
        .iter()
        .filter_map(|&(level, word, clue)| {
            let level = Level::new(level).ok()?;
            WordEntry::new(word, clue, level).ok()
        })
        .collect()
}
