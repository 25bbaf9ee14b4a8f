//! Selection checking and solution rendering against a stored artifact
//!
//! Both operations reuse the straight-line extraction rules, so server and
//! client agree on how a dragged pair of endpoints maps to a word.

use crate::engine::generator::Puzzle;
use crate::spatial::grid::Coord;
use crate::spatial::line::line_between;

/// A placed word together with the cells it occupies, for solution display
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolutionPath {
    /// Canonical word text
    pub word: String,
    /// Cells from the placement's start to its end
    pub cells: Vec<Coord>,
}

/// Letters along the selection, or `None` for an invalid or off-grid line
pub fn selection_text(puzzle: &Puzzle, start: Coord, end: Coord) -> Option<String> {
    let cells = line_between(start, end)?;
    cells
        .iter()
        .map(|&cell| puzzle.letter_at(cell))
        .collect()
}

/// Check a dragged selection against the not-yet-found words
///
/// The selection matches a target read in either traversal direction, so
/// drag direction is irrelevant; only collinearity and the letters matter.
/// Returns the canonical word on a hit.
pub fn check_selection(
    puzzle: &Puzzle,
    start: Coord,
    end: Coord,
    found: &[String],
) -> Option<String> {
    let text = selection_text(puzzle, start, end)?;
    let reversed: String = text.chars().rev().collect();

    puzzle
        .words
        .iter()
        .find(|word| {
            let novel = !found.iter().any(|f| f == *word);
            novel && (word.as_str() == text || word.as_str() == reversed)
        })
        .cloned()
}

/// Membership check against the artifact's placed words
///
/// Exact, case-sensitive match against the normalized stored words; a word
/// that was filtered or dropped during generation is never a member.
pub fn is_placed_word(puzzle: &Puzzle, candidate: &str) -> bool {
    puzzle.words.iter().any(|word| word == candidate)
}

/// Re-derive each placement's cell path for rendering the solution
pub fn solution_paths(puzzle: &Puzzle) -> Vec<SolutionPath> {
    puzzle
        .placements
        .iter()
        .filter_map(|placement| {
            line_between(placement.start, placement.end).map(|cells| SolutionPath {
                word: placement.word.clone(),
                cells,
            })
        })
        .collect()
}
