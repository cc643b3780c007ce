//! Interactive solving state machine
//!
//! Wraps a [`Crossword`] with the transient player state: cursor, selected
//! word, and the terminal completed/revealed flags. Every operation is total;
//! anything that does not apply is a no-op reported as `false`.

use super::input::normalize_input;
use crate::core::{Crossword, Grid, PlacedWord};

/// Lifecycle of a solving session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// No letter entered yet
    NotStarted,
    /// At least one letter entered, not yet solved
    InProgress,
    /// Every word filled correctly by the player
    Completed,
    /// The solution was shown
    Revealed,
}

impl GameStatus {
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Revealed)
    }
}

/// Cell under focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
}

impl Cursor {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Player state for one crossword
#[derive(Debug, Clone)]
pub struct SolvingController {
    crossword: Crossword,
    cursor: Option<Cursor>,
    selected_word: Option<u32>,
    started: bool,
    revealed: bool,
    complete: bool,
}

impl SolvingController {
    #[must_use]
    pub const fn new(crossword: Crossword) -> Self {
        Self {
            crossword,
            cursor: None,
            selected_word: None,
            started: false,
            revealed: false,
            complete: false,
        }
    }

    #[inline]
    #[must_use]
    pub const fn crossword(&self) -> &Crossword {
        &self.crossword
    }

    #[inline]
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        self.crossword.grid()
    }

    #[inline]
    #[must_use]
    pub const fn cursor(&self) -> Option<Cursor> {
        self.cursor
    }

    #[inline]
    #[must_use]
    pub const fn selected_word_id(&self) -> Option<u32> {
        self.selected_word
    }

    #[must_use]
    pub fn selected_word(&self) -> Option<&PlacedWord> {
        self.selected_word.and_then(|id| self.crossword.word(id))
    }

    #[inline]
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.complete
    }

    #[inline]
    #[must_use]
    pub const fn is_revealed(&self) -> bool {
        self.revealed
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        if self.revealed {
            GameStatus::Revealed
        } else if self.complete {
            GameStatus::Completed
        } else if self.started {
            GameStatus::InProgress
        } else {
            GameStatus::NotStarted
        }
    }

    /// Correctly filled cells and total fillable cells
    #[must_use]
    pub fn progress(&self) -> (usize, usize) {
        self.crossword.progress()
    }

    /// Type into a cell
    ///
    /// Input is reduced to one uppercase letter, or cleared when it holds no
    /// letter. After a letter, the cursor steps along the selected word if the
    /// next cell exists and is fillable.
    pub fn set_cell_value(&mut self, row: usize, col: usize, input: &str) -> bool {
        if self.revealed || self.complete || !self.is_fillable(row as isize, col as isize) {
            return false;
        }

        let letter = normalize_input(input);
        self.crossword.set_displayed(row, col, letter);
        self.started = true;
        self.complete = self.crossword.is_solved();

        let step = self.selected_word().map(|word| word.direction().delta());
        if letter.is_some()
            && let Some((d_row, d_col)) = step
        {
            let (next_row, next_col) = (row as isize + d_row, col as isize + d_col);
            if self.is_fillable(next_row, next_col) {
                self.cursor = Some(Cursor::new(next_row as usize, next_col as usize));
            }
        }

        true
    }

    /// Clear the cell under the cursor
    pub fn erase(&mut self) -> bool {
        match self.cursor {
            Some(Cursor { row, col }) => self.set_cell_value(row, col, ""),
            None => false,
        }
    }

    /// Focus a cell and select the first word through it
    pub fn select_cell(&mut self, row: usize, col: usize) -> bool {
        let Some(&first) = self
            .grid()
            .get(row, col)
            .and_then(|cell| cell.member_word_ids().first())
        else {
            return false;
        };

        self.selected_word = Some(first);
        self.cursor = Some(Cursor::new(row, col));
        true
    }

    /// Step the cursor to a neighbouring fillable cell
    ///
    /// The target need not belong to the selected word; when it does not,
    /// the selection follows to the target's first word.
    pub fn move_cursor(&mut self, d_row: isize, d_col: isize) -> bool {
        let Some(cursor) = self.cursor else {
            return false;
        };

        let row = cursor.row as isize + d_row;
        let col = cursor.col as isize + d_col;
        if !self.is_fillable(row, col) {
            return false;
        }

        let (row, col) = (row as usize, col as usize);
        self.cursor = Some(Cursor::new(row, col));

        if !self
            .selected_word()
            .is_some_and(|word| word.covers(row, col))
        {
            self.selected_word = self
                .grid()
                .get(row, col)
                .and_then(|cell| cell.member_word_ids().first().copied());
        }

        true
    }

    /// At an intersection, switch the selection to the other word
    pub fn toggle_direction(&mut self) -> bool {
        let Some(Cursor { row, col }) = self.cursor else {
            return false;
        };
        let Some(members) = self.grid().get(row, col).map(|cell| cell.member_word_ids()) else {
            return false;
        };
        if members.len() < 2 {
            return false;
        }

        let next = self
            .selected_word
            .and_then(|id| members.iter().position(|&m| m == id))
            .map_or(members[0], |i| members[(i + 1) % members.len()]);

        self.selected_word = Some(next);
        true
    }

    /// Select the next word by id (wrapping) and jump to its first cell
    pub fn select_next_word(&mut self) -> bool {
        let count = self.crossword.word_count() as u32;
        if count == 0 {
            return false;
        }

        let next = self.selected_word.map_or(1, |id| id % count + 1);
        self.focus_word(next)
    }

    /// Select the previous word by id (wrapping) and jump to its first cell
    pub fn select_previous_word(&mut self) -> bool {
        let count = self.crossword.word_count() as u32;
        if count == 0 {
            return false;
        }

        let previous = self
            .selected_word
            .map_or(count, |id| if id <= 1 { count } else { id - 1 });
        self.focus_word(previous)
    }

    /// Show the solution; terminal and idempotent
    pub fn reveal(&mut self) {
        self.crossword.reveal();
        self.revealed = true;
        self.complete = true;
    }

    /// Give the puzzle back, e.g. for printing
    #[must_use]
    pub fn into_crossword(self) -> Crossword {
        self.crossword
    }

    fn focus_word(&mut self, id: u32) -> bool {
        let Some((row, col)) = self.crossword.word(id).map(PlacedWord::start) else {
            return false;
        };

        self.selected_word = Some(id);
        self.cursor = Some(Cursor::new(row, col));
        true
    }

    fn is_fillable(&self, row: isize, col: isize) -> bool {
        self.grid()
            .get_signed(row, col)
            .is_some_and(|cell| cell.is_fillable())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Direction, Level, WordEntry};
    use crate::generator::{GridBuilder, generate_seeded};
    use crate::wordlists::WordBank;

    /// CHAT across at (3, 1) and TABLE down at (3, 4) in a 9x9 grid
    fn controller() -> SolvingController {
        let level = Level::new(3).unwrap();
        let chat = WordEntry::new("CHAT", "Animal qui miaule", level).unwrap();
        let table = WordEntry::new("TABLE", "On y mange", level).unwrap();

        let mut builder = GridBuilder::new(level);
        builder.place(&chat, 3, 1, Direction::Horizontal).unwrap();
        builder.place(&table, 3, 4, Direction::Vertical).unwrap();
        SolvingController::new(builder.finish())
    }

    fn type_word(controller: &mut SolvingController, id: u32) {
        let letters: Vec<_> = controller
            .crossword()
            .word(id)
            .unwrap()
            .letters()
            .collect();
        for ((row, col), letter) in letters {
            controller.set_cell_value(row, col, &letter.to_string());
        }
    }

    fn displayed(controller: &SolvingController, row: usize, col: usize) -> Option<char> {
        controller.grid()[(row, col)].displayed_letter()
    }

    #[test]
    fn starts_not_started() {
        let controller = controller();
        assert_eq!(controller.status(), GameStatus::NotStarted);
        assert_eq!(controller.cursor(), None);
        assert_eq!(controller.selected_word_id(), None);
        assert!(!controller.is_complete());
        assert!(!controller.is_revealed());
    }

    #[test]
    fn input_is_normalized() {
        let mut controller = controller();
        assert!(controller.set_cell_value(3, 1, "a1"));
        assert_eq!(displayed(&controller, 3, 1), Some('A'));
        assert_eq!(controller.status(), GameStatus::InProgress);
    }

    #[test]
    fn non_letter_input_clears_cell() {
        let mut controller = controller();
        controller.set_cell_value(3, 1, "c");
        controller.set_cell_value(3, 1, "5");
        assert_eq!(displayed(&controller, 3, 1), None);
    }

    #[test]
    fn blocked_and_out_of_range_cells_ignored() {
        let mut controller = controller();
        assert!(!controller.set_cell_value(0, 0, "x"));
        assert!(!controller.set_cell_value(50, 1, "x"));
        assert_eq!(displayed(&controller, 0, 0), None);
        assert_eq!(controller.status(), GameStatus::NotStarted);
    }

    #[test]
    fn select_cell_picks_first_member() {
        let mut controller = controller();
        assert!(controller.select_cell(3, 4));
        assert_eq!(controller.selected_word_id(), Some(1));
        assert_eq!(controller.cursor(), Some(Cursor::new(3, 4)));

        assert!(controller.select_cell(5, 4));
        assert_eq!(controller.selected_word_id(), Some(2));
    }

    #[test]
    fn select_blocked_cell_is_noop() {
        let mut controller = controller();
        controller.select_cell(3, 1);
        assert!(!controller.select_cell(0, 0));
        assert_eq!(controller.cursor(), Some(Cursor::new(3, 1)));
        assert_eq!(controller.selected_word_id(), Some(1));
    }

    #[test]
    fn typing_advances_along_selected_word() {
        let mut controller = controller();
        controller.select_cell(3, 1);

        controller.set_cell_value(3, 1, "c");
        assert_eq!(controller.cursor(), Some(Cursor::new(3, 2)));
        controller.set_cell_value(3, 2, "h");
        assert_eq!(controller.cursor(), Some(Cursor::new(3, 3)));
    }

    #[test]
    fn typing_down_advances_vertically() {
        let mut controller = controller();
        controller.select_cell(4, 4);
        controller.set_cell_value(4, 4, "a");
        assert_eq!(controller.cursor(), Some(Cursor::new(5, 4)));
    }

    #[test]
    fn cursor_stays_at_word_end() {
        let mut controller = controller();
        controller.select_cell(3, 4);
        controller.set_cell_value(3, 4, "t");
        // (3, 5) is blocked
        assert_eq!(controller.cursor(), Some(Cursor::new(3, 4)));
    }

    #[test]
    fn deletion_does_not_advance() {
        let mut controller = controller();
        controller.select_cell(3, 1);
        controller.set_cell_value(3, 1, "");
        assert_eq!(controller.cursor(), Some(Cursor::new(3, 1)));
    }

    #[test]
    fn no_selection_no_advance() {
        let mut controller = controller();
        controller.set_cell_value(3, 1, "c");
        assert_eq!(controller.cursor(), None);
    }

    #[test]
    fn erase_clears_cursor_cell() {
        let mut controller = controller();
        controller.select_cell(3, 2);
        controller.set_cell_value(3, 2, "h");
        controller.move_cursor(0, -1);

        assert!(controller.erase());
        assert_eq!(displayed(&controller, 3, 2), None);
        assert_eq!(controller.cursor(), Some(Cursor::new(3, 2)));
    }

    #[test]
    fn erase_without_cursor_is_noop() {
        let mut controller = controller();
        assert!(!controller.erase());
    }

    #[test]
    fn move_cursor_stays_on_fillable_cells() {
        let mut controller = controller();
        assert!(!controller.move_cursor(0, 1));

        controller.select_cell(3, 1);
        assert!(controller.move_cursor(0, 1));
        assert_eq!(controller.cursor(), Some(Cursor::new(3, 2)));

        // Above is blocked, left edge of CHAT then off the word
        assert!(!controller.move_cursor(-1, 0));
        assert!(controller.move_cursor(0, -1));
        assert!(!controller.move_cursor(0, -1));
        assert_eq!(controller.cursor(), Some(Cursor::new(3, 1)));
    }

    #[test]
    fn move_cursor_onto_other_word_moves_selection() {
        let mut controller = controller();
        controller.select_cell(3, 4);
        assert_eq!(controller.selected_word_id(), Some(1));

        assert!(controller.move_cursor(1, 0));
        assert_eq!(controller.cursor(), Some(Cursor::new(4, 4)));
        assert_eq!(controller.selected_word_id(), Some(2));

        // Back onto the intersection keeps TABLE selected
        assert!(controller.move_cursor(-1, 0));
        assert_eq!(controller.selected_word_id(), Some(2));
    }

    #[test]
    fn toggle_direction_at_intersection() {
        let mut controller = controller();
        controller.select_cell(3, 4);
        assert!(controller.toggle_direction());
        assert_eq!(controller.selected_word_id(), Some(2));
        assert!(controller.toggle_direction());
        assert_eq!(controller.selected_word_id(), Some(1));
    }

    #[test]
    fn toggle_direction_needs_intersection() {
        let mut controller = controller();
        controller.select_cell(3, 1);
        assert!(!controller.toggle_direction());
        assert_eq!(controller.selected_word_id(), Some(1));
    }

    #[test]
    fn word_cycling_wraps() {
        let mut controller = controller();
        assert!(controller.select_next_word());
        assert_eq!(controller.selected_word_id(), Some(1));
        assert_eq!(controller.cursor(), Some(Cursor::new(3, 1)));

        controller.select_next_word();
        assert_eq!(controller.selected_word_id(), Some(2));
        assert_eq!(controller.cursor(), Some(Cursor::new(3, 4)));

        controller.select_next_word();
        assert_eq!(controller.selected_word_id(), Some(1));

        controller.select_previous_word();
        assert_eq!(controller.selected_word_id(), Some(2));
    }

    #[test]
    fn completes_when_every_word_correct() {
        let mut controller = controller();
        type_word(&mut controller, 1);
        assert!(!controller.is_complete());

        type_word(&mut controller, 2);
        assert!(controller.is_complete());
        assert!(!controller.is_revealed());
        assert_eq!(controller.status(), GameStatus::Completed);
    }

    #[test]
    fn wrong_letter_blocks_completion() {
        let mut controller = controller();
        type_word(&mut controller, 1);
        type_word(&mut controller, 2);
        assert!(controller.is_complete());

        let mut controller = self::controller();
        type_word(&mut controller, 2);
        controller.set_cell_value(3, 1, "C");
        controller.set_cell_value(3, 2, "H");
        controller.set_cell_value(3, 3, "O");
        assert!(!controller.is_complete());
    }

    #[test]
    fn completed_is_terminal() {
        let mut controller = controller();
        type_word(&mut controller, 1);
        type_word(&mut controller, 2);

        assert!(!controller.set_cell_value(3, 1, "z"));
        assert_eq!(displayed(&controller, 3, 1), Some('C'));
        assert!(controller.is_complete());
    }

    #[test]
    fn reveal_fills_and_locks() {
        let mut controller = controller();
        controller.reveal();

        assert!(controller.is_revealed());
        assert!(controller.is_complete());
        assert_eq!(controller.status(), GameStatus::Revealed);
        assert_eq!(displayed(&controller, 7, 4), Some('E'));
        assert!(!controller.set_cell_value(3, 1, "z"));
        assert_eq!(controller.progress(), (8, 8));
    }

    #[test]
    fn reveal_is_idempotent() {
        let mut controller = controller();
        controller.set_cell_value(3, 1, "q");
        controller.reveal();
        let once = controller.grid().clone();

        controller.reveal();
        assert_eq!(controller.grid(), &once);
        assert!(controller.is_complete());
    }

    #[test]
    fn completion_matches_grid_on_generated_puzzles() {
        let bank = WordBank::embedded();
        for seed in 0..5 {
            let (crossword, _) = generate_seeded(&bank, Level::new(2).unwrap(), seed);
            let mut controller = SolvingController::new(crossword);

            let solution: Vec<_> = controller
                .grid()
                .cells()
                .filter_map(|(pos, cell)| cell.solution_letter().map(|l| (pos, l)))
                .collect();
            let (last, rest) = solution.split_last().unwrap();

            for &((row, col), letter) in rest {
                controller.set_cell_value(row, col, &letter.to_string());
                assert!(!controller.is_complete());
            }
            let ((row, col), letter) = *last;
            controller.set_cell_value(row, col, &letter.to_string());
            assert!(controller.is_complete());
        }
    }

    #[test]
    fn empty_puzzle_never_completes() {
        let mut controller = SolvingController::new(Crossword::empty(Level::MIN));
        assert!(!controller.set_cell_value(2, 2, "a"));
        assert!(!controller.select_next_word());
        assert!(!controller.is_complete());
        assert_eq!(controller.status(), GameStatus::NotStarted);
    }
}
