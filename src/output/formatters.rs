//! Formatting utilities for terminal output

use crate::core::{Grid, PlacedWord};

/// Shown for cells outside every word
pub const BLOCKED: char = '■';
/// Shown for fillable cells with no letter
pub const EMPTY: char = '·';

/// Render a grid as text, one line per row
///
/// With `show_solution` the solution letters are printed, otherwise whatever
/// the player has entered.
#[must_use]
pub fn grid_lines(grid: &Grid, show_solution: bool) -> Vec<String> {
    grid.rows()
        .map(|row| {
            row.iter()
                .map(|cell| {
                    if cell.is_blocked() {
                        BLOCKED
                    } else if show_solution {
                        cell.solution_letter().unwrap_or(EMPTY)
                    } else {
                        cell.displayed_letter().unwrap_or(EMPTY)
                    }
                })
                .map(String::from)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// One clue as printed under the grid, with a 1-based start position
#[must_use]
pub fn clue_line(word: &PlacedWord) -> String {
    let (row, col) = word.start();
    format!(
        "{:>2}. {} ({}) [{},{}]",
        word.id(),
        word.clue(),
        word.len(),
        row + 1,
        col + 1
    )
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
