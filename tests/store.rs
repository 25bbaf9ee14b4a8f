//! Validates artifact persistence, retrieval, and fallback behavior

// Tests unwrap values they just constructed
#![allow(clippy::unwrap_used)]

use gridseek::engine::{GenerationOptions, Puzzle, generate};
use gridseek::io::catalog::Difficulty;
use gridseek::io::store::{
    ArtifactStore, FlatFileStore, JsonDirStore, StackedStore, StoredPuzzle,
};
use gridseek::play;

fn sample_puzzle(seed: u64) -> Puzzle {
    let words: Vec<String> = ["CORAL", "KELP", "ABYSS"]
        .iter()
        .map(ToString::to_string)
        .collect();
    generate(&words, &GenerationOptions::default(), seed).unwrap()
}

#[test]
fn test_json_dir_store_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonDirStore::new(dir.path().join("puzzles"));

    let puzzle = sample_puzzle(1);
    let id = puzzle.id.clone();
    let record = StoredPuzzle::new(puzzle, "ocean");
    store.save(&record).unwrap();

    assert!(store.contains(&id));
    let loaded = store.load(&id).unwrap();
    assert_eq!(loaded.puzzle, record.puzzle);
    assert_eq!(loaded.theme, "ocean");
    assert_eq!(loaded.difficulty, Difficulty::Medium);
}

#[test]
fn test_missing_artifact_is_distinguished() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonDirStore::new(dir.path().join("puzzles"));
    let result = store.load("no-such-id");
    assert!(matches!(
        result,
        Err(gridseek::PuzzleError::MissingArtifact { .. })
    ));
}

#[test]
fn test_flat_store_last_record_wins() {
    let dir = tempfile::tempdir().unwrap();
    let store = FlatFileStore::new(dir.path().join("puzzles.jsonl"));

    let puzzle = sample_puzzle(2);
    let id = puzzle.id.clone();

    let mut first = StoredPuzzle::new(puzzle, "ocean");
    store.save(&first).unwrap();
    first.theme = "revised".to_string();
    store.save(&first).unwrap();

    let loaded = store.load(&id).unwrap();
    assert_eq!(loaded.theme, "revised");
}

#[test]
fn test_stacked_store_falls_back_when_primary_unavailable() {
    let dir = tempfile::tempdir().unwrap();

    // A file where the primary root should be makes every primary save fail
    let blocked_root = dir.path().join("blocked");
    std::fs::write(&blocked_root, "not a directory").unwrap();

    let store = StackedStore::new(
        JsonDirStore::new(&blocked_root),
        FlatFileStore::new(dir.path().join("fallback.jsonl")),
    );

    let puzzle = sample_puzzle(3);
    let id = puzzle.id.clone();
    store.save(&StoredPuzzle::new(puzzle, "space")).unwrap();

    let loaded = store.load(&id).unwrap();
    assert_eq!(loaded.theme, "space");
}

#[test]
fn test_loaded_artifact_supports_word_validation() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonDirStore::new(dir.path().join("puzzles"));

    let puzzle = sample_puzzle(4);
    let id = puzzle.id.clone();
    let placed = puzzle.words.clone();
    store.save(&StoredPuzzle::new(puzzle, "ocean")).unwrap();

    let loaded = store.load(&id).unwrap();
    for word in &placed {
        assert!(play::is_placed_word(&loaded.puzzle, word));
    }
    assert!(!play::is_placed_word(&loaded.puzzle, "MISSING"));
}

#[test]
fn test_difficulty_labels_follow_size() {
    let small = generate(
        &["CAT".to_string(), "DOG".to_string()],
        &GenerationOptions {
            size: 8,
            ..GenerationOptions::default()
        },
        5,
    )
    .unwrap();
    assert_eq!(StoredPuzzle::new(small, "t").difficulty, Difficulty::Easy);

    let large = generate(
        &["CAT".to_string(), "DOG".to_string()],
        &GenerationOptions {
            size: 22,
            ..GenerationOptions::default()
        },
        5,
    )
    .unwrap();
    assert_eq!(StoredPuzzle::new(large, "t").difficulty, Difficulty::Hard);
}
