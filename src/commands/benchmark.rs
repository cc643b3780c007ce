//! Benchmark command
//!
//! Measures generator yield over many seeded runs.

use crate::core::Level;
use crate::generator::{GenerationReport, generate_seeded};
use crate::wordlists::WordBank;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub level: Level,
    pub runs: usize,
    /// Word count each run aimed for
    pub target: usize,
    pub total_placed: usize,
    pub average_placed: f64,
    pub min_placed: usize,
    pub max_placed: usize,
    /// Runs that placed fewer words than the target
    pub shortfalls: usize,
    pub average_attempts: f64,
    /// Placed word count to number of runs
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub grids_per_second: f64,
}

impl BenchmarkResult {
    /// Share of runs that fell short of the target, in percent
    #[must_use]
    pub fn shortfall_rate(&self) -> f64 {
        if self.runs == 0 {
            0.0
        } else {
            self.shortfalls as f64 / self.runs as f64 * 100.0
        }
    }
}

/// Run `count` generations at `level` in parallel
///
/// Run `i` uses seed `base_seed + i`, so a benchmark is reproducible.
#[must_use]
pub fn run_benchmark(
    bank: &WordBank,
    level: Level,
    count: usize,
    base_seed: u64,
    show_progress: bool,
) -> BenchmarkResult {
    let pb = if show_progress {
        ProgressBar::new(count as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb.set_message(format!("level {level}"));

    let start = Instant::now();

    let reports: Vec<GenerationReport> = (0..count)
        .into_par_iter()
        .map(|i| {
            let (_, report) = generate_seeded(bank, level, base_seed.wrapping_add(i as u64));
            pb.inc(1);
            report
        })
        .collect();

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    summarize(level, &reports, duration)
}

fn summarize(level: Level, reports: &[GenerationReport], duration: Duration) -> BenchmarkResult {
    let runs = reports.len();
    let target = reports
        .first()
        .map_or_else(|| level.target_word_count(), |r| r.target);

    let mut distribution: HashMap<usize, usize> = HashMap::new();
    for report in reports {
        *distribution.entry(report.placed).or_insert(0) += 1;
    }

    let total_placed: usize = reports.iter().map(|r| r.placed).sum();
    let total_attempts: usize = reports.iter().map(|r| r.attempts).sum();
    let per_run = |total: usize| {
        if runs == 0 {
            0.0
        } else {
            total as f64 / runs as f64
        }
    };

    let seconds = duration.as_secs_f64();

    BenchmarkResult {
        level,
        runs,
        target,
        total_placed,
        average_placed: per_run(total_placed),
        min_placed: reports.iter().map(|r| r.placed).min().unwrap_or(0),
        max_placed: reports.iter().map(|r| r.placed).max().unwrap_or(0),
        shortfalls: reports.iter().filter(|r| r.is_shortfall()).count(),
        average_attempts: per_run(total_attempts),
        distribution,
        duration,
        grids_per_second: if seconds > 0.0 {
            runs as f64 / seconds
        } else {
            0.0
        },
    }
}
