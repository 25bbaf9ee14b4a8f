//! Theme catalog supplying named word lists to the engine
//!
//! The engine has no dependency on how themes are defined or stored; the
//! catalog just produces the `words` input. User catalogs load from a JSON
//! file and extend the built-in set.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::io::configuration::{
    DEFAULT_GRID_SIZE, EASY_SIZE_CEILING, MEDIUM_SIZE_CEILING,
};
use crate::io::error::{PuzzleError, Result, storage_error};

/// Difficulty label derived from grid size at the persistence boundary
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Grid edge up to the easy ceiling
    Easy,
    /// Grid edge up to the medium ceiling
    Medium,
    /// Anything larger
    Hard,
}

impl Difficulty {
    /// Label for a grid edge length
    pub const fn for_size(size: usize) -> Self {
        if size <= EASY_SIZE_CEILING {
            Self::Easy
        } else if size <= MEDIUM_SIZE_CEILING {
            Self::Medium
        } else {
            Self::Hard
        }
    }

    /// Grid edge suggested when a theme's difficulty picks the size
    pub const fn default_size(self) -> usize {
        match self {
            Self::Easy => EASY_SIZE_CEILING,
            Self::Medium => DEFAULT_GRID_SIZE,
            Self::Hard => 20,
        }
    }
}

/// Named word list with display metadata
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Theme {
    /// Stable identifier used on the command line
    pub id: String,
    /// Display name
    pub name: String,
    /// One-line description
    pub description: String,
    /// Raw words handed to the engine's normalizer
    pub words: Vec<String>,
    /// Default difficulty when the caller picks no grid size
    pub difficulty: Difficulty,
}

/// Collection of themes available for generation
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Catalog {
    themes: Vec<Theme>,
}

impl Catalog {
    /// The built-in themes shipped with the binary
    pub fn builtin() -> Self {
        let themes = vec![
            theme(
                "animals",
                "Animals",
                "Creatures great and small",
                &[
                    "elephant", "giraffe", "penguin", "dolphin", "cheetah", "octopus",
                    "raccoon", "badger", "ferret", "walrus", "iguana", "toucan",
                ],
                Difficulty::Easy,
            ),
            theme(
                "space",
                "Outer Space",
                "Astronomy and exploration",
                &[
                    "nebula", "galaxy", "asteroid", "comet", "orbit", "eclipse",
                    "quasar", "gravity", "rocket", "station", "module", "lander",
                ],
                Difficulty::Medium,
            ),
            theme(
                "ocean",
                "The Ocean",
                "Life and features of the deep",
                &[
                    "current", "trench", "coral", "lagoon", "plankton", "kelp",
                    "abyss", "riptide", "sea horse", "barnacle", "estuary", "driftwood",
                ],
                Difficulty::Medium,
            ),
            theme(
                "programming",
                "Programming",
                "Terms from the trade",
                &[
                    "compiler", "closure", "iterator", "pointer", "thread", "mutex",
                    "buffer", "socket", "parser", "syntax", "runtime", "borrow",
                ],
                Difficulty::Hard,
            ),
        ];
        Self { themes }
    }

    /// Load a user catalog from a JSON file
    ///
    /// # Errors
    ///
    /// Returns a storage error when the file cannot be read and a
    /// serialization error when it is not a valid theme list.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|source| storage_error(path, "read catalog", source))?;
        let themes: Vec<Theme> =
            serde_json::from_str(&text).map_err(|source| PuzzleError::Serialization {
                context: "theme catalog",
                source,
            })?;
        Ok(Self { themes })
    }

    /// Merge another catalog's themes after this catalog's own
    pub fn extend(&mut self, other: Self) {
        self.themes.extend(other.themes);
    }

    /// Look up a theme by identifier
    pub fn get(&self, id: &str) -> Option<&Theme> {
        self.themes.iter().find(|theme| theme.id == id)
    }

    /// All themes in catalog order
    pub fn themes(&self) -> &[Theme] {
        &self.themes
    }
}

fn theme(
    id: &str,
    name: &str,
    description: &str,
    words: &[&str],
    difficulty: Difficulty,
) -> Theme {
    Theme {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        words: words.iter().map(ToString::to_string).collect(),
        difficulty,
    }
}
