//! Line directions available to the placement planner

use serde::{Deserialize, Serialize};

/// Unit-vector direction of a placed word
///
/// Left- and up-facing lines are expressed through the reversed orientation
/// flag on a placement rather than through extra direction variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    /// Horizontal, left to right (0, +1)
    East,
    /// Vertical, top to bottom (+1, 0)
    South,
    /// Diagonal, down and to the right (+1, +1)
    SouthEast,
    /// Diagonal, up and to the right (-1, +1)
    NorthEast,
}

/// The two straight directions
const STRAIGHT: [Direction; 2] = [Direction::East, Direction::South];

/// All four directions, diagonals included
const ALL: [Direction; 4] = [
    Direction::East,
    Direction::South,
    Direction::SouthEast,
    Direction::NorthEast,
];

impl Direction {
    /// Row and column step taken per letter
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Self::East => (0, 1),
            Self::South => (1, 0),
            Self::SouthEast => (1, 1),
            Self::NorthEast => (-1, 1),
        }
    }

    /// Whether this direction is one of the two diagonals
    pub const fn is_diagonal(self) -> bool {
        matches!(self, Self::SouthEast | Self::NorthEast)
    }

    /// Directions the planner may draw from for the given options
    pub const fn enabled(diagonals: bool) -> &'static [Self] {
        if diagonals { &ALL } else { &STRAIGHT }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enabled_set_sizes() {
        assert_eq!(Direction::enabled(false).len(), 2);
        assert_eq!(Direction::enabled(true).len(), 4);
        assert!(
            Direction::enabled(false)
                .iter()
                .all(|d| !d.is_diagonal())
        );
    }

    #[test]
    fn test_deltas_are_unit_steps() {
        for dir in Direction::enabled(true) {
            let (dr, dc) = dir.delta();
            assert!(dr.abs() <= 1 && dc.abs() <= 1);
            assert!(dr != 0 || dc != 0);
        }
    }
}
