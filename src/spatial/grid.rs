//! Mutable letter grid used during puzzle construction
//!
//! The grid is a square buffer of byte cells. During construction a cell is
//! either empty or holds a committed uppercase letter; a committed cell is
//! never overwritten with a different letter. `can_place` is the sole gate
//! before `commit`.

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::spatial::direction::Direction;

/// Marker byte for a cell no word has claimed yet
const EMPTY_CELL: u8 = 0;

/// A row/column position in grid space
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coord {
    /// Row index, top to bottom
    pub row: usize,
    /// Column index, left to right
    pub col: usize,
}

impl Coord {
    /// Create a coordinate from row and column indices
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Square letter buffer with occupancy tracking
#[derive(Debug, Clone)]
pub struct LetterGrid {
    cells: Array2<u8>,
    size: usize,
}

impl LetterGrid {
    /// Create an all-empty grid with the given edge length
    pub fn new(size: usize) -> Self {
        Self {
            cells: Array2::from_elem((size, size), EMPTY_CELL),
            size,
        }
    }

    /// Edge length of the grid
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Letter at a cell, or `None` if the cell is empty or out of bounds
    pub fn letter_at(&self, coord: Coord) -> Option<char> {
        self.cells
            .get((coord.row, coord.col))
            .copied()
            .filter(|&b| b != EMPTY_CELL)
            .map(char::from)
    }

    /// Whether the stored text fits along the line without conflicts
    ///
    /// True only if every cell the text would occupy is in bounds and is
    /// either empty or already holds the exact matching letter.
    pub fn can_place(&self, stored: &str, origin: Coord, direction: Direction) -> bool {
        let (dr, dc) = direction.delta();
        stored.bytes().enumerate().all(|(i, letter)| {
            let row = origin.row as i32 + dr * i as i32;
            let col = origin.col as i32 + dc * i as i32;
            if row < 0 || col < 0 || row >= self.size as i32 || col >= self.size as i32 {
                return false;
            }
            self.cells
                .get((row as usize, col as usize))
                .is_some_and(|&cell| cell == EMPTY_CELL || cell == letter)
        })
    }

    /// Write the stored text along the line
    ///
    /// Idempotent on cells that already hold the matching letter. Returns
    /// false without touching the grid if the line fails `can_place`, so a
    /// conflicting letter is never overwritten.
    pub fn commit(&mut self, stored: &str, origin: Coord, direction: Direction) -> bool {
        if !self.can_place(stored, origin, direction) {
            return false;
        }

        let (dr, dc) = direction.delta();
        for (i, letter) in stored.bytes().enumerate() {
            let row = (origin.row as i32 + dr * i as i32) as usize;
            let col = (origin.col as i32 + dc * i as i32) as usize;
            if let Some(cell) = self.cells.get_mut((row, col)) {
                *cell = letter;
            }
        }
        true
    }

    /// Fill every still-empty cell in row-major order
    ///
    /// The supplier is invoked once per empty cell, in row-major order, so a
    /// seeded letter source consumes its state deterministically.
    pub fn fill_empty_with(&mut self, mut supplier: impl FnMut() -> char) {
        for cell in &mut self.cells {
            if *cell == EMPTY_CELL {
                *cell = supplier() as u8;
            }
        }
    }

    /// Number of cells still empty
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&b| b == EMPTY_CELL).count()
    }

    /// Snapshot the grid as one string per row
    pub fn to_rows(&self) -> Vec<String> {
        self.cells
            .rows()
            .into_iter()
            .map(|row| row.iter().map(|&b| char::from(b)).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = LetterGrid::new(8);
        assert_eq!(grid.size(), 8);
        assert_eq!(grid.empty_count(), 64);
        assert_eq!(grid.letter_at(Coord::new(3, 3)), None);
    }

    #[test]
    fn test_commit_writes_letters_along_line() {
        let mut grid = LetterGrid::new(6);
        assert!(grid.commit("CAT", Coord::new(1, 2), Direction::East));
        assert_eq!(grid.letter_at(Coord::new(1, 2)), Some('C'));
        assert_eq!(grid.letter_at(Coord::new(1, 3)), Some('A'));
        assert_eq!(grid.letter_at(Coord::new(1, 4)), Some('T'));
        assert_eq!(grid.empty_count(), 33);
    }

    #[test]
    fn test_can_place_accepts_matching_overlap() {
        let mut grid = LetterGrid::new(6);
        assert!(grid.commit("CAT", Coord::new(0, 0), Direction::East));
        // Shares the 'A' at (0,1)
        assert!(grid.can_place("ANT", Coord::new(0, 1), Direction::South));
        // 'DOG' would need 'D' where 'C' is committed
        assert!(!grid.can_place("DOG", Coord::new(0, 0), Direction::South));
    }

    #[test]
    fn test_commit_refuses_conflicting_line() {
        let mut grid = LetterGrid::new(6);
        assert!(grid.commit("CAT", Coord::new(0, 0), Direction::East));
        assert!(!grid.commit("DOG", Coord::new(0, 0), Direction::East));
        // The failed commit must not have disturbed any cell
        assert_eq!(grid.letter_at(Coord::new(0, 0)), Some('C'));
        assert_eq!(grid.letter_at(Coord::new(0, 1)), Some('A'));
    }

    #[test]
    fn test_can_place_rejects_out_of_bounds() {
        let grid = LetterGrid::new(5);
        assert!(!grid.can_place("LONGER", Coord::new(0, 0), Direction::East));
        assert!(!grid.can_place("CAT", Coord::new(1, 0), Direction::NorthEast));
        assert!(grid.can_place("CAT", Coord::new(2, 0), Direction::NorthEast));
    }

    #[test]
    fn test_fill_empty_preserves_committed_letters() {
        let mut grid = LetterGrid::new(4);
        assert!(grid.commit("GO", Coord::new(0, 0), Direction::SouthEast));
        grid.fill_empty_with(|| 'X');
        assert_eq!(grid.empty_count(), 0);
        assert_eq!(grid.letter_at(Coord::new(0, 0)), Some('G'));
        assert_eq!(grid.letter_at(Coord::new(1, 1)), Some('O'));
        assert_eq!(grid.letter_at(Coord::new(2, 2)), Some('X'));
    }
}
