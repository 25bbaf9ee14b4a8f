//! Grid-space primitives shared by generation and play
//!
//! This module contains spatial functionality including:
//! - The mutable construction grid and its occupancy rules
//! - The four placement directions
//! - Straight-line extraction between coordinate pairs

/// Placement line directions
pub mod direction;
/// Letter grid buffer and commit rules
pub mod grid;
/// Straight-line extraction between two coordinates
pub mod line;

pub use direction::Direction;
pub use grid::{Coord, LetterGrid};
