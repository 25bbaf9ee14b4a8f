//! Play-time logic against stored puzzle artifacts

/// Selection checking and solution rendering
pub mod guess;

pub use guess::{SolutionPath, check_selection, is_placed_word, selection_text, solution_paths};
