//! Artifact persistence: primary JSON store with a flat-file fallback
//!
//! The primary store keeps one pretty-printed JSON document per artifact
//! under a root directory. The fallback is an append-only JSON-lines file
//! with the same logical shape, engaged transparently when the primary is
//! unavailable. Neither store is the engine's concern; a failed save never
//! reaches back into a generation call.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::engine::generator::Puzzle;
use crate::io::catalog::Difficulty;
use crate::io::error::{PuzzleError, Result, storage_error};

/// Puzzle artifact plus the metadata the persistence contract adds
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StoredPuzzle {
    /// The engine's output artifact, stored verbatim
    pub puzzle: Puzzle,
    /// Difficulty label derived from grid size
    pub difficulty: Difficulty,
    /// Theme tag, or "custom" for explicit word lists
    pub theme: String,
}

impl StoredPuzzle {
    /// Wrap an artifact with its derived metadata
    pub fn new(puzzle: Puzzle, theme: impl Into<String>) -> Self {
        let difficulty = Difficulty::for_size(puzzle.size);
        Self {
            puzzle,
            difficulty,
            theme: theme.into(),
        }
    }
}

/// Durable keyed storage for puzzle artifacts
pub trait ArtifactStore {
    /// Persist a record under its artifact id
    ///
    /// # Errors
    ///
    /// Returns a storage or serialization error when the record cannot be
    /// written durably.
    fn save(&self, record: &StoredPuzzle) -> Result<()>;

    /// Retrieve the record stored under an artifact id
    ///
    /// # Errors
    ///
    /// Returns `MissingArtifact` when no record exists for the id, or a
    /// storage/serialization error when one exists but cannot be read.
    fn load(&self, id: &str) -> Result<StoredPuzzle>;

    /// Whether a record exists for an artifact id
    fn contains(&self, id: &str) -> bool;
}

/// Primary store: one JSON document per artifact in a root directory
#[derive(Debug, Clone)]
pub struct JsonDirStore {
    root: PathBuf,
}

impl JsonDirStore {
    /// Create a store rooted at the given directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn document_path(&self, id: &str) -> PathBuf {
        self.root.join(format!("{id}.json"))
    }
}

impl ArtifactStore for JsonDirStore {
    fn save(&self, record: &StoredPuzzle) -> Result<()> {
        std::fs::create_dir_all(&self.root)
            .map_err(|source| storage_error(&self.root, "create store root", source))?;

        let path = self.document_path(&record.puzzle.id);
        let json = serde_json::to_string_pretty(record)?;
        std::fs::write(&path, json)
            .map_err(|source| storage_error(&path, "write artifact", source))
    }

    fn load(&self, id: &str) -> Result<StoredPuzzle> {
        let path = self.document_path(id);
        if !path.exists() {
            return Err(PuzzleError::MissingArtifact { id: id.to_string() });
        }
        let text = std::fs::read_to_string(&path)
            .map_err(|source| storage_error(&path, "read artifact", source))?;
        Ok(serde_json::from_str(&text)?)
    }

    fn contains(&self, id: &str) -> bool {
        self.document_path(id).exists()
    }
}

/// Fallback store: append-only JSON-lines file
///
/// On load the last record for an id wins, so a re-save is an append rather
/// than a rewrite. Malformed lines are skipped rather than poisoning the
/// whole file.
#[derive(Debug, Clone)]
pub struct FlatFileStore {
    path: PathBuf,
}

impl FlatFileStore {
    /// Create a store backed by the given JSON-lines file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn records(&self) -> Result<Vec<StoredPuzzle>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let file = std::fs::File::open(&self.path)
            .map_err(|source| storage_error(&self.path, "open flat store", source))?;
        let reader = std::io::BufReader::new(file);

        let mut records = Vec::new();
        for line in reader.lines() {
            let line = line.map_err(|source| storage_error(&self.path, "read flat store", source))?;
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<StoredPuzzle>(&line) {
                Ok(record) => records.push(record),
                Err(err) => log::warn!("skipping malformed flat-store line: {err}"),
            }
        }
        Ok(records)
    }
}

impl ArtifactStore for FlatFileStore {
    fn save(&self, record: &StoredPuzzle) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .map_err(|source| storage_error(parent, "create flat store parent", source))?;
        }

        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| storage_error(&self.path, "open flat store", source))?;

        let json = serde_json::to_string(record)?;
        writeln!(file, "{json}")
            .map_err(|source| storage_error(&self.path, "append artifact", source))
    }

    fn load(&self, id: &str) -> Result<StoredPuzzle> {
        self.records()?
            .into_iter()
            .rev()
            .find(|record| record.puzzle.id == id)
            .ok_or_else(|| PuzzleError::MissingArtifact { id: id.to_string() })
    }

    fn contains(&self, id: &str) -> bool {
        self.records()
            .map(|records| records.iter().any(|r| r.puzzle.id == id))
            .unwrap_or(false)
    }
}

/// Primary store with transparent fallback
pub struct StackedStore {
    primary: JsonDirStore,
    fallback: FlatFileStore,
}

impl StackedStore {
    /// Stack a primary directory store over a flat-file fallback
    pub const fn new(primary: JsonDirStore, fallback: FlatFileStore) -> Self {
        Self { primary, fallback }
    }

    /// Conventional layout: `<root>/` for documents, `<root>.jsonl` beside it
    pub fn at_root(root: &Path) -> Self {
        let mut flat = root.as_os_str().to_owned();
        flat.push(".jsonl");
        Self::new(JsonDirStore::new(root), FlatFileStore::new(PathBuf::from(flat)))
    }
}

impl ArtifactStore for StackedStore {
    fn save(&self, record: &StoredPuzzle) -> Result<()> {
        match self.primary.save(record) {
            Ok(()) => Ok(()),
            Err(primary_err) => {
                log::warn!("primary store unavailable, using fallback: {primary_err}");
                self.fallback.save(record)
            }
        }
    }

    fn load(&self, id: &str) -> Result<StoredPuzzle> {
        match self.primary.load(id) {
            Ok(record) => Ok(record),
            Err(PuzzleError::MissingArtifact { .. }) => self.fallback.load(id),
            Err(primary_err) => {
                log::warn!("primary store unavailable, using fallback: {primary_err}");
                self.fallback.load(id)
            }
        }
    }

    fn contains(&self, id: &str) -> bool {
        self.primary.contains(id) || self.fallback.contains(id)
    }
}
