//! Generation orchestration from raw words to a finished puzzle artifact
//!
//! A generation call owns its grid and random source exclusively; nothing is
//! shared across calls, so concurrent callers are naturally isolated. The
//! call either returns a complete artifact or fails outright.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::engine::planner::{PassOutcome, Placement, PlannerOptions, place_words};
use crate::engine::rng::RandomSource;
use crate::engine::words;
use crate::io::configuration::{
    DEFAULT_GRID_SIZE, DEFAULT_MAX_WORD_LEN, MAX_GRID_SIZE, MIN_GRID_SIZE, PLACEMENT_ATTEMPTS,
    STRICT_ROUNDS,
};
use crate::io::error::{PuzzleError, Result, invalid_option};
use crate::spatial::grid::{Coord, LetterGrid};

/// How the planner responds to words that fail to place
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlacementStrategy {
    /// Single pass per word; unplaceable words are dropped silently
    #[default]
    Greedy,
    /// Reshuffle-and-retry the whole word order until every candidate
    /// places, failing after a bounded number of rounds
    Strict,
}

/// Options controlling one generation call
#[derive(Clone, Debug)]
pub struct GenerationOptions {
    /// Grid edge length
    pub size: usize,
    /// Whether diagonal directions may be used
    pub diagonals: bool,
    /// Whether words may be stored reversed
    pub reverse: bool,
    /// Cap on word length before the grid-ratio bound applies
    pub max_word_len: usize,
    /// Placement attempts per word
    pub attempts: usize,
    /// Word-dropping policy
    pub strategy: PlacementStrategy,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            size: DEFAULT_GRID_SIZE,
            diagonals: true,
            reverse: true,
            max_word_len: DEFAULT_MAX_WORD_LEN,
            attempts: PLACEMENT_ATTEMPTS,
            strategy: PlacementStrategy::Greedy,
        }
    }
}

impl GenerationOptions {
    /// Validate option values before any grid work begins
    ///
    /// # Errors
    ///
    /// Returns `InvalidOption` if the grid size falls outside the accepted
    /// bounds or the word-length cap cannot admit any word.
    pub fn validate(&self) -> Result<()> {
        if self.size < MIN_GRID_SIZE || self.size > MAX_GRID_SIZE {
            return Err(invalid_option(
                "size",
                &self.size,
                &format!("must be in [{MIN_GRID_SIZE}, {MAX_GRID_SIZE}]"),
            ));
        }
        if self.max_word_len < 2 {
            return Err(invalid_option(
                "max_word_len",
                &self.max_word_len,
                &"must admit words of length 2",
            ));
        }
        Ok(())
    }
}

/// Immutable output artifact of one generation call
///
/// `words` and `placements` are the same length and co-indexed; every grid
/// letter belongs either to a placement or to the filler pass.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    /// Process-unique opaque identifier
    pub id: String,
    /// Grid edge length
    pub size: usize,
    /// Completed letter grid, one string per row
    pub grid: Vec<String>,
    /// Successfully placed words in commit order
    pub words: Vec<String>,
    /// One placement record per placed word
    #[serde(rename = "placed")]
    pub placements: Vec<Placement>,
    /// Seed actually consumed, for reproduction
    pub seed: u64,
}

impl Puzzle {
    /// Letter at a grid cell, or `None` when out of bounds
    pub fn letter_at(&self, coord: Coord) -> Option<char> {
        self.grid
            .get(coord.row)
            .and_then(|row| row.as_bytes().get(coord.col))
            .copied()
            .map(char::from)
    }
}

/// Generate a puzzle from raw words, options, and an explicit seed
///
/// Regenerating with the same normalized word list, options, and seed
/// reproduces an identical grid and placement set. The artifact identifier
/// is the only field free to differ between such runs.
///
/// # Errors
///
/// Returns `InvalidOption` for out-of-policy options, `EmptyCandidateList`
/// when filtering rejects every input word, and `PlacementExhausted` when
/// the strict strategy cannot fit every candidate.
pub fn generate(raw_words: &[String], options: &GenerationOptions, seed: u64) -> Result<Puzzle> {
    options.validate()?;

    let candidates = words::candidates(raw_words, options.size, options.max_word_len);
    if candidates.is_empty() {
        return Err(PuzzleError::EmptyCandidateList {
            supplied: raw_words.len(),
        });
    }

    let planner_options = PlannerOptions {
        diagonals: options.diagonals,
        reverse: options.reverse,
        attempts: options.attempts,
    };

    let mut rng = RandomSource::new(seed);
    let (mut grid, outcome) = match options.strategy {
        PlacementStrategy::Greedy => {
            let mut grid = LetterGrid::new(options.size);
            let outcome = place_words(&mut grid, &candidates, &planner_options, &mut rng);
            (grid, outcome)
        }
        PlacementStrategy::Strict => place_all(&candidates, options, &planner_options, &mut rng)?,
    };

    grid.fill_empty_with(|| rng.letter());

    let placed_words = outcome
        .placements
        .iter()
        .map(|p| p.word.clone())
        .collect();

    Ok(Puzzle {
        id: new_puzzle_id(&mut rng),
        size: options.size,
        grid: grid.to_rows(),
        words: placed_words,
        placements: outcome.placements,
        seed,
    })
}

/// Strict strategy: reshuffle the word order until a round places everything
///
/// The first round keeps the priority order; later rounds run a seeded
/// shuffle, so strict output stays reproducible for a fixed seed.
fn place_all(
    candidates: &[String],
    options: &GenerationOptions,
    planner_options: &PlannerOptions,
    rng: &mut RandomSource,
) -> Result<(LetterGrid, PassOutcome)> {
    let mut order: Vec<String> = candidates.to_vec();
    let mut best_dropped: Vec<String> = candidates.to_vec();

    for round in 0..STRICT_ROUNDS {
        if round > 0 {
            rng.shuffle(&mut order);
        }

        let mut grid = LetterGrid::new(options.size);
        let outcome = place_words(&mut grid, &order, planner_options, rng);
        if outcome.dropped.is_empty() {
            return Ok((grid, outcome));
        }
        if outcome.dropped.len() < best_dropped.len() {
            best_dropped = outcome.dropped;
        }
    }

    Err(PuzzleError::PlacementExhausted {
        rounds: STRICT_ROUNDS,
        dropped: best_dropped,
    })
}

/// Opaque artifact identifier from wall-clock time plus seeded randomness
///
/// Collision probability is negligible at the casual-game scale this serves.
fn new_puzzle_id(rng: &mut RandomSource) -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    format!("{millis:x}-{:04x}", rng.pick(0x10000))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn raw(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_rejects_out_of_bounds_size() {
        let small = GenerationOptions {
            size: 4,
            ..GenerationOptions::default()
        };
        let result = generate(&raw(&["CAT"]), &small, 1);
        assert!(matches!(result, Err(PuzzleError::InvalidOption { .. })));

        let large = GenerationOptions {
            size: 31,
            ..GenerationOptions::default()
        };
        let result = generate(&raw(&["CAT"]), &large, 1);
        assert!(matches!(result, Err(PuzzleError::InvalidOption { .. })));
    }

    #[test]
    fn test_empty_candidates_is_fatal() {
        let options = GenerationOptions {
            size: 10,
            ..GenerationOptions::default()
        };
        // Length 9 exceeds the ratio bound of 6 for size 10
        let result = generate(&raw(&["WATERFALL"]), &options, 1);
        assert!(matches!(
            result,
            Err(PuzzleError::EmptyCandidateList { supplied: 1 })
        ));
    }

    #[test]
    fn test_words_and_placements_are_co_indexed() {
        let options = GenerationOptions::default();
        let puzzle = generate(&raw(&["PLANET", "COMET", "STAR"]), &options, 42).unwrap();
        assert_eq!(puzzle.words.len(), puzzle.placements.len());
        for (word, placement) in puzzle.words.iter().zip(&puzzle.placements) {
            assert_eq!(word, &placement.word);
        }
    }

    #[test]
    fn test_strict_zero_attempts_exhausts() {
        let options = GenerationOptions {
            attempts: 0,
            strategy: PlacementStrategy::Strict,
            ..GenerationOptions::default()
        };
        let result = generate(&raw(&["CAT", "DOG"]), &options, 9);
        assert!(matches!(
            result,
            Err(PuzzleError::PlacementExhausted { .. })
        ));
    }

    #[test]
    fn test_strict_places_every_word_when_roomy() {
        let options = GenerationOptions {
            size: 20,
            strategy: PlacementStrategy::Strict,
            ..GenerationOptions::default()
        };
        let puzzle = generate(&raw(&["APPLE", "PEAR", "PLUM", "FIG"]), &options, 4).unwrap();
        assert_eq!(puzzle.words.len(), 4);
    }
}
