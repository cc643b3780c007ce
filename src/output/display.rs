//! Display functions for command results

use super::formatters::{clue_line, create_progress_bar, grid_lines};
use crate::commands::{BenchmarkResult, GenerateResult};
use crate::core::Direction;
use colored::Colorize;

/// Print a generated puzzle with its clues
pub fn print_puzzle(result: &GenerateResult, show_solution: bool) {
    let crossword = &result.crossword;
    let report = &result.report;

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Crossword: {} {}",
        format!("level {}", crossword.level()).bright_yellow().bold(),
        format!("(seed {})", result.seed).bright_black()
    );
    println!("{}", "─".repeat(60).cyan());

    println!();
    for line in grid_lines(crossword.grid(), show_solution) {
        println!("   {line}");
    }

    for (direction, title) in [
        (Direction::Horizontal, "→ Horizontal"),
        (Direction::Vertical, "↓ Vertical"),
    ] {
        println!("\n{}", title.bright_cyan().bold());
        for word in crossword
            .words()
            .iter()
            .filter(|w| w.direction() == direction)
        {
            if show_solution {
                println!("  {}  {}", clue_line(word), word.word().green());
            } else {
                println!("  {}", clue_line(word));
            }
        }
    }

    println!();
    if report.placed == 0 {
        println!(
            "{}",
            format!("❌ No words available for level {}", crossword.level())
                .red()
                .bold()
        );
    } else if report.is_shortfall() {
        println!(
            "{}",
            format!(
                "⚠️  Placed {} of {} words after {} attempts",
                report.placed, report.target, report.attempts
            )
            .yellow()
        );
    } else {
        println!(
            "{}",
            format!(
                "✅ Placed {} words in {:.1}ms",
                report.placed,
                result.duration.as_secs_f64() * 1000.0
            )
            .green()
            .bold()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} ",
        format!("BENCHMARK RESULTS - LEVEL {}", result.level)
            .bright_cyan()
            .bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Yield:".bright_cyan().bold());
    println!("   Grids generated:  {}", result.runs);
    println!("   Target words:     {}", result.target);
    println!(
        "   Average placed:   {}",
        format!("{:.2}", result.average_placed)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best grid:        {}",
        format!("{}", result.max_placed).green()
    );
    println!(
        "   Worst grid:       {}",
        format!("{}", result.min_placed).yellow()
    );

    let rate = result.shortfall_rate();
    let rate_text = format!("{rate:.1}% ({} grids)", result.shortfalls);
    println!(
        "   Shortfalls:       {}",
        if result.shortfalls == 0 {
            rate_text.green()
        } else {
            rate_text.yellow()
        }
    );
    println!("   Avg attempts:     {:.2}", result.average_attempts);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Grids/second:     {:.1}", result.grids_per_second);

    if result.runs == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let mut counts: Vec<(usize, usize)> = result
        .distribution
        .iter()
        .map(|(&placed, &runs)| (placed, runs))
        .collect();
    counts.sort_unstable();

    for (placed, count) in counts {
        let pct = (count as f64 / result.runs as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        let (filled, empty) = bar.split_at(bar.rfind('█').map_or(0, |i| i + '█'.len_utf8()));
        println!(
            "   {placed:>2} words: {}{} {count:4} ({pct:5.1}%)",
            filled.green(),
            empty.bright_black()
        );
    }
}
