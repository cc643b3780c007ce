//! Generate command
//!
//! Builds one puzzle, optionally from a fixed seed so it can be shared.

use crate::core::{Crossword, Level};
use crate::generator::{GenerationReport, generate_seeded};
use crate::wordlists::WordBank;
use std::time::{Duration, Instant};

/// Configuration for generating a puzzle
pub struct GenerateConfig {
    pub level: Level,
    /// Fixed seed; a random one is drawn when absent
    pub seed: Option<u64>,
}

impl GenerateConfig {
    #[must_use]
    pub const fn new(level: Level) -> Self {
        Self { level, seed: None }
    }

    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Result of generating a puzzle
pub struct GenerateResult {
    pub crossword: Crossword,
    pub report: GenerationReport,
    /// Seed that reproduces this puzzle
    pub seed: u64,
    pub duration: Duration,
}

/// Generate one puzzle from the bank
#[must_use]
pub fn generate_puzzle(bank: &WordBank, config: &GenerateConfig) -> GenerateResult {
    let seed = config.seed.unwrap_or_else(rand::random);

    let start = Instant::now();
    let (crossword, report) = generate_seeded(bank, config.level, seed);

    GenerateResult {
        crossword,
        report,
        seed,
        duration: start.elapsed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_seed_is_reproducible() {
        let bank = WordBank::embedded();
        let config = GenerateConfig::new(Level::new(3).unwrap()).with_seed(1234);

        let first = generate_puzzle(&bank, &config);
        let second = generate_puzzle(&bank, &config);

        assert_eq!(first.seed, 1234);
        assert_eq!(first.report, second.report);
        assert_eq!(first.crossword, second.crossword);
    }

    #[test]
    fn random_seed_is_reported() {
        let bank = WordBank::embedded();
        let config = GenerateConfig::new(Level::default());

        let result = generate_puzzle(&bank, &config);
        let (replay, report) = generate_seeded(&bank, config.level, result.seed);

        assert_eq!(report, result.report);
        assert_eq!(replay, result.crossword);
    }

    #[test]
    fn grid_matches_level() {
        let bank = WordBank::embedded();
        for level in Level::all() {
            let result = generate_puzzle(&bank, &GenerateConfig::new(level).with_seed(5));
            assert_eq!(result.crossword.grid().size(), level.grid_size());
            assert!(result.report.placed >= 1);
            assert!(result.report.placed <= level.target_word_count());
        }
    }

    #[test]
    fn empty_bank_gives_empty_grid() {
        let bank = WordBank::from_entries(Vec::new());
        let result = generate_puzzle(&bank, &GenerateConfig::new(Level::MIN).with_seed(1));

        assert_eq!(result.report.placed, 0);
        assert_eq!(result.report.target, 0);
        assert_eq!(result.crossword.grid().fillable_count(), 0);
    }
}
