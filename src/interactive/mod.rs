//! Interactive TUI interface
//!
//! [`RenderAdapter`] is the front-end agnostic boundary; [`App`] and
//! [`run_tui`] put it on a terminal with ratatui.

pub mod adapter;
pub mod app;
pub mod rendering;

pub use adapter::{BoardView, InputEvent, Outcome, RenderAdapter};
pub use app::{Action, App, action_for_key, run_tui};
