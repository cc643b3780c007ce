//! Core domain types for crosswords
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! Words, levels, the grid and the generated puzzle are all plain data here.

mod crossword;
mod grid;
mod level;
mod word;

pub use crossword::Crossword;
pub use grid::{Cell, Direction, Grid, OriginMarker, PlacedWord};
pub use level::{Level, LevelError};
pub use word::{MIN_WORD_LENGTH, WordEntry, WordError};
