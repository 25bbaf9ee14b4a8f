//! Puzzle generation engine
//!
//! Data flows normalizer to planner to filler to assembler: raw words are
//! filtered and ordered, placed along straight lines under the overlap
//! rules, the remaining cells are filled with random letters, and the
//! result is packaged as an immutable artifact.

/// Generation orchestration and the puzzle artifact
pub mod generator;
/// Randomized word placement with bounded retries
pub mod planner;
/// Seeded random source
pub mod rng;
/// Word normalization, filtering, and ordering
pub mod words;

pub use generator::{GenerationOptions, PlacementStrategy, Puzzle, generate};
pub use planner::Placement;
