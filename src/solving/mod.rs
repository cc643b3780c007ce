//! Interactive solving
//!
//! The state machine a player drives: cursor, selection, typing and win
//! detection on top of a generated [`Crossword`](crate::core::Crossword).

mod controller;
mod input;

pub use controller::{Cursor, GameStatus, SolvingController};
pub use input::normalize_input;
