//! Randomized word placement with bounded retries
//!
//! Candidates are tried one at a time in priority order. Each attempt picks
//! a direction from the enabled set, optionally reverses the word on a
//! seeded coin flip, and picks a random origin whose full extent stays in
//! bounds. `can_place` gates the commit; an exhausted retry budget drops the
//! word without aborting the run. There is no backtracking across words in
//! the greedy strategy, trading optimality for predictable running time.

use serde::{Deserialize, Serialize};

use crate::engine::rng::RandomSource;
use crate::spatial::direction::Direction;
use crate::spatial::grid::{Coord, LetterGrid};

/// Committed word occurrence in the grid
///
/// `word` always holds the original (un-reversed) text; `reversed` records
/// whether the grid stores it back to front. Reading the line from `start`
/// to `end` yields the stored orientation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// Canonical word text as the player must submit it
    pub word: String,
    /// First cell of the stored line
    pub start: Coord,
    /// Last cell of the stored line
    pub end: Coord,
    /// Direction stepped from start to end
    pub direction: Direction,
    /// Whether the grid holds the word back to front
    pub reversed: bool,
}

/// Knobs controlling a single placement pass
#[derive(Clone, Copy, Debug)]
pub struct PlannerOptions {
    /// Whether diagonal directions may be drawn
    pub diagonals: bool,
    /// Whether the reversal coin is flipped at all
    pub reverse: bool,
    /// Placement attempts per word before it is dropped
    pub attempts: usize,
}

/// Result of one placement pass over the candidate list
#[derive(Debug)]
pub struct PassOutcome {
    /// Placements in the order their words were committed
    pub placements: Vec<Placement>,
    /// Candidates whose retry budget ran out
    pub dropped: Vec<String>,
}

/// Attempt to place every candidate, mutating the grid
///
/// Candidates are consumed in the given order; each either commits and
/// yields a placement or lands in the dropped list.
pub fn place_words(
    grid: &mut LetterGrid,
    candidates: &[String],
    options: &PlannerOptions,
    rng: &mut RandomSource,
) -> PassOutcome {
    let directions = Direction::enabled(options.diagonals);
    let mut placements = Vec::with_capacity(candidates.len());
    let mut dropped = Vec::new();

    for word in candidates {
        match place_one(grid, word, directions, options, rng) {
            Some(placement) => placements.push(placement),
            None => {
                log::debug!(
                    "dropping '{word}': no legal line after {} attempts",
                    options.attempts
                );
                dropped.push(word.clone());
            }
        }
    }

    PassOutcome {
        placements,
        dropped,
    }
}

/// Try one word against the grid within the retry budget
fn place_one(
    grid: &mut LetterGrid,
    word: &str,
    directions: &[Direction],
    options: &PlannerOptions,
    rng: &mut RandomSource,
) -> Option<Placement> {
    let len = word.len();
    if len == 0 || len > grid.size() {
        return None;
    }

    for _ in 0..options.attempts {
        let direction = directions
            .get(rng.pick(directions.len()))
            .copied()
            .unwrap_or(Direction::East);
        let reversed = options.reverse && rng.coin();

        let origin = random_origin(grid.size(), len, direction, rng);

        let stored: String = if reversed {
            word.chars().rev().collect()
        } else {
            word.to_string()
        };

        if grid.commit(&stored, origin, direction) {
            let (dr, dc) = direction.delta();
            let span = (len - 1) as i32;
            let end = Coord::new(
                (origin.row as i32 + dr * span) as usize,
                (origin.col as i32 + dc * span) as usize,
            );
            return Some(Placement {
                word: word.to_string(),
                start: origin,
                end,
                direction,
                reversed,
            });
        }
    }

    None
}

/// Random origin keeping the word's full extent inside the grid
///
/// Each axis range is derived from the direction's step sign: a positive
/// step shrinks the range from the far edge, a negative step from the near
/// edge, and a zero step leaves the whole axis available.
fn random_origin(size: usize, len: usize, direction: Direction, rng: &mut RandomSource) -> Coord {
    let (dr, dc) = direction.delta();
    let span = len - 1;

    let row = match dr {
        1 => rng.pick(size - span),
        -1 => span + rng.pick(size - span),
        _ => rng.pick(size),
    };
    let col = if dc == 1 {
        rng.pick(size - span)
    } else {
        rng.pick(size)
    };

    Coord::new(row, col)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn options(diagonals: bool, reverse: bool) -> PlannerOptions {
        PlannerOptions {
            diagonals,
            reverse,
            attempts: 150,
        }
    }

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_places_small_set_on_roomy_grid() {
        let mut grid = LetterGrid::new(12);
        let mut rng = RandomSource::new(42);
        let outcome = place_words(&mut grid, &words(&["CAT", "DOG"]), &options(true, true), &mut rng);
        assert_eq!(outcome.placements.len(), 2);
        assert!(outcome.dropped.is_empty());
    }

    #[test]
    fn test_placement_endpoints_span_length() {
        let mut grid = LetterGrid::new(10);
        let mut rng = RandomSource::new(7);
        let outcome = place_words(&mut grid, &words(&["SATURN"]), &options(true, true), &mut rng);
        let placement = outcome.placements.first().unwrap();
        let dr = (placement.end.row as i32 - placement.start.row as i32).abs();
        let dc = (placement.end.col as i32 - placement.start.col as i32).abs();
        assert_eq!(dr.max(dc), 5);
    }

    #[test]
    fn test_no_diagonals_when_disabled() {
        let mut grid = LetterGrid::new(10);
        let mut rng = RandomSource::new(3);
        let outcome = place_words(
            &mut grid,
            &words(&["ALPHA", "BRAVO", "DELTA"]),
            &options(false, true),
            &mut rng,
        );
        assert!(
            outcome
                .placements
                .iter()
                .all(|p| !p.direction.is_diagonal())
        );
    }

    #[test]
    fn test_no_reversal_when_disabled() {
        let mut grid = LetterGrid::new(10);
        let mut rng = RandomSource::new(11);
        let outcome = place_words(
            &mut grid,
            &words(&["ALPHA", "BRAVO", "DELTA"]),
            &options(true, false),
            &mut rng,
        );
        assert!(outcome.placements.iter().all(|p| !p.reversed));
    }

    #[test]
    fn test_zero_attempts_drops_everything() {
        let mut grid = LetterGrid::new(10);
        let mut rng = RandomSource::new(1);
        let zero = PlannerOptions {
            diagonals: true,
            reverse: true,
            attempts: 0,
        };
        let outcome = place_words(&mut grid, &words(&["CAT"]), &zero, &mut rng);
        assert!(outcome.placements.is_empty());
        assert_eq!(outcome.dropped, vec!["CAT"]);
    }
}
