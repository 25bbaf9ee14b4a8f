//! Seeded word-search puzzle generation engine and player toolkit
//!
//! The engine places candidate words along straight lines in a square grid
//! under overlap rules, fills the rest with random letters, and packages the
//! result as a reproducible artifact. Play-time helpers map dragged
//! selections back to words using the same line-extraction rules.

#![forbid(unsafe_code)]

/// Generation engine: normalization, placement, filling, assembly
pub mod engine;
/// Boundary collaborators: CLI, stores, catalog, errors
pub mod io;
/// Play-time selection checking and solution rendering
pub mod play;
/// Grid-space primitives shared by generation and play
pub mod spatial;

pub use io::error::{PuzzleError, Result};
