//! Placement validation
//!
//! A word may occupy a span when every cell is inside the grid and every
//! already-lettered cell agrees with the word. Nothing else is checked: words
//! may run side by side without a blocked cell between them.

use crate::core::{Direction, Grid};

/// Check whether `word` fits at `(row, col)` in `direction`
///
/// Coordinates are signed so callers can pass starts computed from an
/// intersection that fall off the top or left edge; those are simply invalid.
#[must_use]
pub fn can_place(grid: &Grid, word: &str, row: isize, col: isize, direction: Direction) -> bool {
    let (d_row, d_col) = direction.delta();

    word.chars().enumerate().all(|(i, letter)| {
        let i = i as isize;
        grid.get_signed(row + d_row * i, col + d_col * i)
            .is_some_and(|cell| {
                cell.solution_letter()
                    .is_none_or(|existing| existing == letter)
            })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Level, WordEntry};
    use crate::generator::GridBuilder;

    fn builder_with_chat() -> GridBuilder {
        let level = Level::new(2).unwrap();
        let chat = WordEntry::new("CHAT", "", level).unwrap();
        let mut builder = GridBuilder::new(level);
        builder.place(&chat, 3, 1, Direction::Horizontal).unwrap();
        builder
    }

    #[test]
    fn empty_grid_accepts_in_bounds_word() {
        let grid = Grid::new(7);
        assert!(can_place(&grid, "CHAT", 3, 1, Direction::Horizontal));
        assert!(can_place(&grid, "FROMAGE", 0, 0, Direction::Vertical));
    }

    #[test]
    fn rejects_leaving_the_grid() {
        let grid = Grid::new(7);
        assert!(!can_place(&grid, "CHAT", 3, 4, Direction::Horizontal));
        assert!(!can_place(&grid, "CHAT", 4, 0, Direction::Vertical));
        assert!(!can_place(&grid, "CHAT", -1, 0, Direction::Vertical));
        assert!(!can_place(&grid, "CHAT", 0, -2, Direction::Horizontal));
    }

    #[test]
    fn word_exactly_grid_width() {
        let grid = Grid::new(5);
        assert!(can_place(&grid, "ARBRE", 2, 0, Direction::Horizontal));
        assert!(!can_place(&grid, "ECHARPE", 2, 0, Direction::Horizontal));
    }

    #[test]
    fn accepts_agreeing_crossing() {
        let builder = builder_with_chat();
        // TAS down through the T of CHAT at (3, 4)
        assert!(can_place(builder.grid(), "TAS", 3, 4, Direction::Vertical));
    }

    #[test]
    fn rejects_conflicting_overlap() {
        let builder = builder_with_chat();
        let before = builder.grid().clone();

        // SOL would put 'O' on the 'H' at (3, 2)
        assert!(!can_place(builder.grid(), "SOL", 2, 2, Direction::Vertical));
        assert_eq!(builder.grid(), &before);
    }

    #[test]
    fn permits_adjacent_parallel_words() {
        let builder = builder_with_chat();
        assert!(can_place(builder.grid(), "LAIT", 4, 1, Direction::Horizontal));
        assert!(can_place(builder.grid(), "NUIT", 2, 1, Direction::Horizontal));
    }
}
