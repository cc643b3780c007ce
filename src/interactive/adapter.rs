//! Boundary between the engine and a presentation layer
//!
//! The adapter owns the word bank, the current difficulty level and the
//! solving session. A front end reads a [`BoardView`] snapshot and feeds
//! [`InputEvent`]s back; it never touches the grid directly.

use crate::core::{Direction, Grid, Level, PlacedWord};
use crate::generator::{GenerationReport, generate};
use crate::solving::{Cursor, GameStatus, SolvingController};
use crate::wordlists::WordBank;
use rand::Rng;

/// Input forwarded from the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A cell was clicked
    CellClicked { row: usize, col: usize },
    /// A character was typed at the cursor
    Key(char),
    /// Clear the cell under the cursor
    Erase,
    /// Arrow-key navigation
    Move { d_row: isize, d_col: isize },
    NextWord,
    PreviousWord,
    /// Switch between the two words at an intersection
    ToggleDirection,
    /// Regenerate at another difficulty
    ChangeLevel(Level),
    NewGame,
    /// Show the solution
    Reveal,
}

/// What an event did, for feedback in the front end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing changed
    Ignored,
    /// Cursor, selection or letters changed
    Updated,
    /// This event finished the puzzle
    Completed,
    /// The solution is now shown
    Revealed,
    /// A fresh puzzle replaced the old one
    NewGame(GenerationReport),
}

/// Read-only snapshot of everything a front end draws
#[derive(Debug, Clone)]
pub struct BoardView<'a> {
    pub grid: &'a Grid,
    /// Horizontal words by id, for the first clue list
    pub horizontal: Vec<&'a PlacedWord>,
    /// Vertical words by id, for the second clue list
    pub vertical: Vec<&'a PlacedWord>,
    pub selected_word_id: Option<u32>,
    pub cursor: Option<Cursor>,
    pub is_complete: bool,
    pub is_revealed: bool,
    pub status: GameStatus,
    pub level: Level,
    pub report: GenerationReport,
    /// Correct cells and fillable cells
    pub progress: (usize, usize),
}

impl BoardView<'_> {
    /// The word a clue list should highlight
    #[must_use]
    pub fn selected_word(&self) -> Option<&PlacedWord> {
        let id = self.selected_word_id?;
        self.horizontal
            .iter()
            .chain(&self.vertical)
            .find(|word| word.id() == id)
            .copied()
    }
}

/// Owns one solving session and regenerates it on request
pub struct RenderAdapter<R: Rng> {
    bank: WordBank,
    level: Level,
    rng: R,
    controller: SolvingController,
    report: GenerationReport,
}

impl<R: Rng> RenderAdapter<R> {
    /// Generate a first puzzle at `level`
    pub fn new(bank: WordBank, level: Level, mut rng: R) -> Self {
        let (crossword, report) = generate(&bank, level, &mut rng);

        Self {
            bank,
            level,
            rng,
            controller: SolvingController::new(crossword),
            report,
        }
    }

    #[inline]
    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }

    #[inline]
    #[must_use]
    pub const fn report(&self) -> GenerationReport {
        self.report
    }

    #[inline]
    #[must_use]
    pub const fn controller(&self) -> &SolvingController {
        &self.controller
    }

    /// Snapshot of the current session
    #[must_use]
    pub fn view(&self) -> BoardView<'_> {
        let words = self.controller.crossword().words();
        let (horizontal, vertical): (Vec<&PlacedWord>, Vec<&PlacedWord>) = words
            .iter()
            .partition(|word| word.direction() == Direction::Horizontal);

        BoardView {
            grid: self.controller.grid(),
            horizontal,
            vertical,
            selected_word_id: self.controller.selected_word_id(),
            cursor: self.controller.cursor(),
            is_complete: self.controller.is_complete(),
            is_revealed: self.controller.is_revealed(),
            status: self.controller.status(),
            level: self.level,
            report: self.report,
            progress: self.controller.progress(),
        }
    }

    /// Apply one input event
    pub fn handle(&mut self, event: InputEvent) -> Outcome {
        match event {
            InputEvent::CellClicked { row, col } => {
                Self::updated(self.controller.select_cell(row, col))
            }
            InputEvent::Key(key) => {
                let Some(Cursor { row, col }) = self.controller.cursor() else {
                    return Outcome::Ignored;
                };
                let mut buffer = [0; 4];
                let changed = self
                    .controller
                    .set_cell_value(row, col, key.encode_utf8(&mut buffer));
                self.after_edit(changed)
            }
            InputEvent::Erase => {
                let changed = self.controller.erase();
                self.after_edit(changed)
            }
            InputEvent::Move { d_row, d_col } => {
                Self::updated(self.controller.move_cursor(d_row, d_col))
            }
            InputEvent::NextWord => Self::updated(self.controller.select_next_word()),
            InputEvent::PreviousWord => Self::updated(self.controller.select_previous_word()),
            InputEvent::ToggleDirection => Self::updated(self.controller.toggle_direction()),
            InputEvent::ChangeLevel(level) => {
                self.level = level;
                Outcome::NewGame(self.new_game())
            }
            InputEvent::NewGame => Outcome::NewGame(self.new_game()),
            InputEvent::Reveal => {
                if self.controller.is_revealed() {
                    return Outcome::Ignored;
                }
                self.controller.reveal();
                Outcome::Revealed
            }
        }
    }

    /// Replace the session wholesale with a fresh puzzle
    fn new_game(&mut self) -> GenerationReport {
        let (crossword, report) = generate(&self.bank, self.level, &mut self.rng);
        self.controller = SolvingController::new(crossword);
        self.report = report;
        report
    }

    fn after_edit(&self, changed: bool) -> Outcome {
        if !changed {
            Outcome::Ignored
        } else if self.controller.is_complete() {
            Outcome::Completed
        } else {
            Outcome::Updated
        }
    }

    const fn updated(changed: bool) -> Outcome {
        if changed {
            Outcome::Updated
        } else {
            Outcome::Ignored
        }
    }
}
