//! Crossword Engine
//!
//! Generates square crossword grids from a leveled word bank and runs the
//! interactive solving session on top of them.
//!
//! # Quick Start
//!
//! ```rust
//! use crossword_engine::core::Level;
//! use crossword_engine::generator::generate_seeded;
//! use crossword_engine::solving::SolvingController;
//! use crossword_engine::wordlists::WordBank;
//!
//! let bank = WordBank::embedded();
//! let (crossword, report) = generate_seeded(&bank, Level::new(2).unwrap(), 42);
//! assert_eq!(crossword.grid().size(), 7);
//! assert_eq!(report.placed, crossword.word_count());
//!
//! let mut session = SolvingController::new(crossword);
//! session.select_next_word();
//! let cursor = session.cursor().unwrap();
//! session.set_cell_value(cursor.row, cursor.col, "a");
//! assert!(!session.is_complete());
//!
//! session.reveal();
//! assert!(session.is_complete());
//! ```

// Core domain types
pub mod core;

// Grid generation
pub mod generator;

// Player session state machine
pub mod solving;

// Word banks
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
