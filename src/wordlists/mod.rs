//! Word bank for crossword generation
//!
//! Provides an embedded word bank compiled into the binary for zero-cost access,
//! plus loading from user files.

mod bank;
mod embedded;
pub mod loader;

pub use bank::WordBank;
pub use embedded::{WORD_BANK, WORD_BANK_COUNT};
