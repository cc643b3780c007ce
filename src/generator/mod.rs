//! Crossword generation
//!
//! Shared-letter search, placement validation and the greedy best-of-three
//! grid builder.

pub mod builder;
mod intersection;
mod placement;

pub use builder::{
    GenerationReport, GridBuilder, MAX_ATTEMPTS, attempt_once, generate, generate_seeded,
    target_for,
};
pub use intersection::find_intersections;
pub use placement::can_place;
