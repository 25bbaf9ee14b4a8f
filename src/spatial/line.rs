//! Straight-line extraction between two grid coordinates
//!
//! Shared by guess checking and solution rendering: both must agree on how a
//! pair of endpoints maps to an ordered cell path. A coordinate pair that is
//! not perfectly horizontal, vertical, or 45-degree diagonal yields no path
//! rather than an error, since freeform drag gestures frequently describe no
//! valid line.

use crate::spatial::grid::Coord;

/// Ordered cell path between two endpoints, inclusive of both
///
/// Returns `None` unless the endpoints satisfy one of the three line rules:
/// same row, same column, or equal absolute row and column deltas. The path
/// steps one cell at a time from `start` toward `end`.
pub fn line_between(start: Coord, end: Coord) -> Option<Vec<Coord>> {
    let dr = end.row as i32 - start.row as i32;
    let dc = end.col as i32 - start.col as i32;

    if dr != 0 && dc != 0 && dr.abs() != dc.abs() {
        return None;
    }

    let steps = dr.abs().max(dc.abs());
    let step_r = dr.signum();
    let step_c = dc.signum();

    let mut cells = Vec::with_capacity(steps as usize + 1);
    for i in 0..=steps {
        cells.push(Coord::new(
            (start.row as i32 + step_r * i) as usize,
            (start.col as i32 + step_c * i) as usize,
        ));
    }
    Some(cells)
}
